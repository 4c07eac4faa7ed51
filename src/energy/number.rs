//! Numeric rendering collaborator
//!
//! The energy formatter only decides units and labels; the number itself is
//! rendered by a [`NumberFormatter`]. The default is backed by ICU4X decimal
//! formatting for the configured locale.

use std::fmt;

use fixed_decimal::{Decimal, FloatPrecision};
use icu_decimal::options::DecimalFormatterOptions;
use icu_decimal::DecimalFormatter;
use icu_locale_core::Locale;

use super::error::{FormatError, FormatResult};
use super::locale::to_bcp47;

/// Fraction digits kept by the decimal style
pub const DEFAULT_MAX_FRACTION_DIGITS: u8 = 3;

/// Upper bound accepted for `max_fraction_digits`
pub const MAX_FRACTION_DIGITS_LIMIT: u8 = 15;

/// Largest magnitude the default formatter renders
pub const MAX_RENDERABLE_MAGNITUDE: f64 = 1e30;

/// Renders a number as locale-aware text
pub trait NumberFormatter {
    fn format_number(&self, value: f64) -> FormatResult<String>;
}

impl<F> NumberFormatter for F
where
    F: Fn(f64) -> FormatResult<String>,
{
    fn format_number(&self, value: f64) -> FormatResult<String> {
        self(value)
    }
}

/// Decimal-style number formatter for one locale
pub struct DecimalNumberFormatter {
    locale_identifier: String,
    formatter: DecimalFormatter,
    max_fraction_digits: u8,
}

impl DecimalNumberFormatter {
    /// Create a formatter for an underscore locale identifier ("en_US")
    pub fn new(locale_identifier: &str) -> FormatResult<Self> {
        let locale: Locale = to_bcp47(locale_identifier)
            .parse()
            .map_err(|_| FormatError::InvalidLocale(locale_identifier.to_string()))?;

        let formatter = DecimalFormatter::try_new(locale.into(), DecimalFormatterOptions::default())
            .map_err(|e| FormatError::FormatterData {
                locale: locale_identifier.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            locale_identifier: locale_identifier.to_string(),
            formatter,
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        })
    }

    /// Keep at most `digits` fraction digits (clamped to 15)
    pub fn with_max_fraction_digits(mut self, digits: u8) -> Self {
        self.max_fraction_digits = digits.min(MAX_FRACTION_DIGITS_LIMIT);
        self
    }

    pub fn locale_identifier(&self) -> &str {
        &self.locale_identifier
    }

    pub fn max_fraction_digits(&self) -> u8 {
        self.max_fraction_digits
    }

    /// Round half-to-even at `max_fraction_digits` and drop trailing zeros
    fn to_decimal(&self, value: f64) -> FormatResult<Decimal> {
        if !value.is_finite() {
            return Err(FormatError::numeric(value, "value is not finite"));
        }
        if value.abs() >= MAX_RENDERABLE_MAGNITUDE {
            return Err(FormatError::numeric(value, "magnitude is out of range"));
        }

        let position = -(self.max_fraction_digits as i16);

        // Values that round away entirely render as "0", never "-0"
        let value = if value.abs() * 10f64.powi(self.max_fraction_digits as i32) <= 0.5 {
            0.0
        } else {
            value
        };

        let mut decimal = Decimal::try_from_f64(value, FloatPrecision::RoundTrip)
            .map_err(|_| FormatError::numeric(value, "value has no decimal representation"))?;
        decimal.round(position);
        decimal.trim_end();
        Ok(decimal)
    }
}

impl NumberFormatter for DecimalNumberFormatter {
    fn format_number(&self, value: f64) -> FormatResult<String> {
        let decimal = self.to_decimal(value)?;
        Ok(self.formatter.format(&decimal).to_string())
    }
}

impl fmt::Debug for DecimalNumberFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecimalNumberFormatter")
            .field("locale_identifier", &self.locale_identifier)
            .field("max_fraction_digits", &self.max_fraction_digits)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_us() -> DecimalNumberFormatter {
        DecimalNumberFormatter::new("en_US").unwrap()
    }

    #[test]
    fn test_integers_have_no_fraction() {
        let f = en_us();
        assert_eq!(f.format_number(1.0).unwrap(), "1");
        assert_eq!(f.format_number(2.0).unwrap(), "2");
        assert_eq!(f.format_number(0.0).unwrap(), "0");
    }

    #[test]
    fn test_rounds_to_three_fraction_digits() {
        let f = en_us();
        assert_eq!(f.format_number(2.461759).unwrap(), "2.462");
        assert_eq!(f.format_number(2.5).unwrap(), "2.5");
        assert_eq!(f.format_number(0.0004).unwrap(), "0");
    }

    #[test]
    fn test_grouping_separator() {
        let f = en_us();
        assert_eq!(f.format_number(1234567.5).unwrap(), "1,234,567.5");
    }

    #[test]
    fn test_negative_values() {
        let f = en_us();
        assert_eq!(f.format_number(-2.5).unwrap(), "-2.5");
        assert_eq!(f.format_number(-0.0).unwrap(), "0");
    }

    #[test]
    fn test_german_separators() {
        let f = DecimalNumberFormatter::new("de_DE").unwrap();
        assert_eq!(f.format_number(1234.5).unwrap(), "1.234,5");
    }

    #[test]
    fn test_max_fraction_digits() {
        let f = en_us().with_max_fraction_digits(1);
        assert_eq!(f.format_number(2.461759).unwrap(), "2.5");
        let f = en_us().with_max_fraction_digits(0);
        assert_eq!(f.format_number(2.4).unwrap(), "2");
        let f = en_us().with_max_fraction_digits(40);
        assert_eq!(f.max_fraction_digits(), MAX_FRACTION_DIGITS_LIMIT);
    }

    #[test]
    fn test_posix_locale_is_accepted() {
        let f = DecimalNumberFormatter::new("en_US_POSIX").unwrap();
        assert_eq!(f.locale_identifier(), "en_US_POSIX");
        assert_eq!(f.format_number(3.0).unwrap(), "3");
    }

    #[test]
    fn test_non_finite_fails() {
        let f = en_us();
        assert!(matches!(
            f.format_number(f64::NAN),
            Err(FormatError::NumericRendering { .. })
        ));
        assert!(matches!(
            f.format_number(f64::INFINITY),
            Err(FormatError::NumericRendering { .. })
        ));
    }

    #[test]
    fn test_magnitude_bound() {
        let f = en_us();
        assert_eq!(
            f.format_number(1e21).unwrap(),
            "1,000,000,000,000,000,000,000"
        );
        assert!(f.format_number(1e29).is_ok());
        assert!(matches!(
            f.format_number(MAX_RENDERABLE_MAGNITUDE),
            Err(FormatError::NumericRendering { .. })
        ));
        assert!(f.format_number(-1e30).is_err());
    }

    #[test]
    fn test_tiny_negative_rounds_to_plain_zero() {
        let f = en_us();
        assert_eq!(f.format_number(-0.0004).unwrap(), "0");
        assert_eq!(f.format_number(-0.0006).unwrap(), "-0.001");
    }

    #[test]
    fn test_invalid_locale() {
        let err = DecimalNumberFormatter::new("not a locale!").unwrap_err();
        assert_eq!(err, FormatError::InvalidLocale("not a locale!".to_string()));
    }

    #[test]
    fn test_closure_formatter() {
        let f = |v: f64| -> FormatResult<String> { Ok(format!("<{}>", v)) };
        assert_eq!(f.format_number(1.5).unwrap(), "<1.5>");
    }
}
