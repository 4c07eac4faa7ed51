//! Energy formatting module
//!
//! Handles energy unit selection, conversion and localized rendering.

pub mod converter;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod number;
pub mod units;

pub use converter::{convert, convert_between, select_unit, to_joules};
pub use error::{FormatError, FormatResult};
pub use formatter::{
    format, format_from_joules, scale_joules, unit_label, EnergyFormatter, FormattedEnergy,
    FormatterConfig,
};
pub use locale::{
    detect_locale_identifier, is_valid_locale_identifier, normalize_locale_identifier,
    uses_calories, EnvironmentLocaleProvider, FixedLocaleProvider, LocaleProvider,
    SystemLocaleProvider, POSIX_LOCALE,
};
pub use number::{DecimalNumberFormatter, NumberFormatter};
pub use units::{EnergyUnit, UnitStyle};
