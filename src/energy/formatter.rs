//! Energy formatter
//!
//! Combines unit selection, label rendering and a numeric collaborator into
//! complete strings such as "2.462 cal" or "5 kilojoules".

use serde::{Deserialize, Serialize};

use super::converter::{convert, select_unit};
use super::error::FormatResult;
use super::locale::{uses_calories, POSIX_LOCALE};
use super::number::{DecimalNumberFormatter, NumberFormatter, DEFAULT_MAX_FRACTION_DIGITS};
use super::units::{EnergyUnit, UnitStyle};

/// Settings shared by every call on an [`EnergyFormatter`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Underscore locale identifier, e.g. "en_US"
    pub locale_identifier: String,
    pub unit_style: UnitStyle,
    /// Render kilocalories as "C"/"Cal"/"Calories"
    pub is_for_food_energy_use: bool,
    /// Fraction digits kept by the default number formatter
    pub max_fraction_digits: u8,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            locale_identifier: POSIX_LOCALE.to_string(),
            unit_style: UnitStyle::default(),
            is_for_food_energy_use: false,
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }
}

impl FormatterConfig {
    pub fn new(locale_identifier: impl Into<String>) -> Self {
        Self {
            locale_identifier: locale_identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_unit_style(mut self, unit_style: UnitStyle) -> Self {
        self.unit_style = unit_style;
        self
    }

    pub fn with_food_energy_use(mut self, is_for_food_energy_use: bool) -> Self {
        self.is_for_food_energy_use = is_for_food_energy_use;
        self
    }

    pub fn with_max_fraction_digits(mut self, digits: u8) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Whether the configured locale prefers the calorie family
    pub fn uses_calories(&self) -> bool {
        uses_calories(&self.locale_identifier)
    }
}

/// A rendered string together with the unit it was rendered in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedEnergy {
    /// Full string, or just the label for label-only calls
    pub text: String,
    /// Value expressed in `unit`
    pub value: f64,
    pub unit: EnergyUnit,
}

/// Label for a value in a unit.
///
/// Food-energy kilocalories always render as "C"/"Cal"/"Calories". Otherwise
/// short and medium show the symbol, and long shows the full name, singular
/// only when the value is exactly 1.
pub fn unit_label(
    value: f64,
    unit: EnergyUnit,
    style: UnitStyle,
    is_for_food_energy_use: bool,
) -> String {
    if is_for_food_energy_use && unit == EnergyUnit::Kilocalorie {
        let label = match style {
            UnitStyle::Short => "C",
            UnitStyle::Medium => "Cal",
            UnitStyle::Long => "Calories",
        };
        return label.to_string();
    }

    match style {
        UnitStyle::Short | UnitStyle::Medium => unit.symbol().to_string(),
        UnitStyle::Long if value == 1.0 => unit.singular_name().to_string(),
        UnitStyle::Long => unit.plural_name(),
    }
}

/// Render `value` in `unit` as "<number><separator><label>"
pub fn format<N: NumberFormatter + ?Sized>(
    value: f64,
    unit: EnergyUnit,
    style: UnitStyle,
    is_for_food_energy_use: bool,
    number_formatter: &N,
) -> FormatResult<String> {
    let number = number_formatter.format_number(value)?;
    let label = unit_label(value, unit, style, is_for_food_energy_use);
    Ok(format!("{}{}{}", number, style.separator(), label))
}

/// Pick the locale-appropriate unit for a joule quantity and convert into it
pub fn scale_joules(joules: f64, locale_identifier: &str) -> (f64, EnergyUnit) {
    let prefer_calories = uses_calories(locale_identifier);
    let unit = select_unit(joules, prefer_calories);
    let value = convert(joules, unit);
    tracing::debug!(
        joules,
        locale = locale_identifier,
        prefer_calories,
        unit = %unit,
        value,
        "Selected energy unit"
    );
    (value, unit)
}

/// Render a joule quantity in the locale-appropriate unit
pub fn format_from_joules<N: NumberFormatter + ?Sized>(
    joules: f64,
    config: &FormatterConfig,
    number_formatter: &N,
) -> FormatResult<FormattedEnergy> {
    let (value, unit) = scale_joules(joules, &config.locale_identifier);
    let text = format(
        value,
        unit,
        config.unit_style,
        config.is_for_food_energy_use,
        number_formatter,
    )?;
    Ok(FormattedEnergy { text, value, unit })
}

/// Formatter bound to a configuration and a number formatter
#[derive(Debug)]
pub struct EnergyFormatter<N = DecimalNumberFormatter> {
    config: FormatterConfig,
    number_formatter: N,
}

impl EnergyFormatter<DecimalNumberFormatter> {
    /// Build with the ICU decimal formatter for the configured locale
    pub fn new(config: FormatterConfig) -> FormatResult<Self> {
        let number_formatter = DecimalNumberFormatter::new(&config.locale_identifier)?
            .with_max_fraction_digits(config.max_fraction_digits);
        Ok(Self {
            config,
            number_formatter,
        })
    }
}

impl<N: NumberFormatter> EnergyFormatter<N> {
    /// Build with a caller-supplied number formatter
    pub fn with_number_formatter(config: FormatterConfig, number_formatter: N) -> Self {
        Self {
            config,
            number_formatter,
        }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn number_formatter(&self) -> &N {
        &self.number_formatter
    }

    pub fn unit_style(&self) -> UnitStyle {
        self.config.unit_style
    }

    pub fn set_unit_style(&mut self, unit_style: UnitStyle) {
        self.config.unit_style = unit_style;
    }

    pub fn is_for_food_energy_use(&self) -> bool {
        self.config.is_for_food_energy_use
    }

    pub fn set_food_energy_use(&mut self, is_for_food_energy_use: bool) {
        self.config.is_for_food_energy_use = is_for_food_energy_use;
    }

    /// "<number> <label>" for a value already in `unit`
    pub fn format_value(&self, value: f64, unit: EnergyUnit) -> FormatResult<String> {
        format(
            value,
            unit,
            self.config.unit_style,
            self.config.is_for_food_energy_use,
            &self.number_formatter,
        )
    }

    /// Full string for a joule quantity, plus the unit chosen for it
    pub fn format_joules(&self, joules: f64) -> FormatResult<FormattedEnergy> {
        format_from_joules(joules, &self.config, &self.number_formatter)
    }

    /// Label alone for a value already in `unit`
    pub fn unit_label(&self, value: f64, unit: EnergyUnit) -> String {
        unit_label(
            value,
            unit,
            self.config.unit_style,
            self.config.is_for_food_energy_use,
        )
    }

    /// Label alone for a joule quantity, plus the unit chosen for it
    pub fn unit_label_from_joules(&self, joules: f64) -> FormattedEnergy {
        let (value, unit) = scale_joules(joules, &self.config.locale_identifier);
        FormattedEnergy {
            text: self.unit_label(value, unit),
            value,
            unit,
        }
    }
}
