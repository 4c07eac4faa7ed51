//! Server configuration
//!
//! Reads formatter settings from `ENERGY_FMT_*` environment variables.

use crate::energy::locale::{
    detect_locale_identifier, is_valid_locale_identifier, normalize_locale_identifier,
    EnvironmentLocaleProvider, LocaleProvider, SystemLocaleProvider,
};
use crate::energy::number::MAX_FRACTION_DIGITS_LIMIT;
use crate::energy::{FormatterConfig, UnitStyle};

pub const LOCALE_VAR: &str = "ENERGY_FMT_LOCALE";
pub const UNIT_STYLE_VAR: &str = "ENERGY_FMT_UNIT_STYLE";
pub const FOOD_ENERGY_VAR: &str = "ENERGY_FMT_FOOD_ENERGY";
pub const FRACTION_DIGITS_VAR: &str = "ENERGY_FMT_FRACTION_DIGITS";

/// Where the active locale identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleSource {
    /// `ENERGY_FMT_LOCALE`
    Override,
    /// `LC_ALL` / `LC_MEASUREMENT` / `LANG` or the platform locale
    Detected,
}

/// Startup configuration for the MCP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub formatter: FormatterConfig,
    pub locale_source: LocaleSource,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        let env = EnvironmentLocaleProvider::from_process_env();
        let system = SystemLocaleProvider;
        let providers: [&dyn LocaleProvider; 2] = [&env, &system];
        Self::from_lookup(|key| std::env::var(key).ok(), &providers)
    }

    /// Read configuration through `lookup`, detecting the locale from
    /// `providers` when no override is set
    pub fn from_lookup<F>(lookup: F, providers: &[&dyn LocaleProvider]) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut formatter = FormatterConfig::default();

        let override_locale = lookup(LOCALE_VAR).and_then(|raw| {
            match normalize_locale_identifier(&raw) {
                Some(locale) if is_valid_locale_identifier(&locale) => Some(locale),
                _ => {
                    tracing::warn!("Ignoring {}={:?}; not a locale identifier", LOCALE_VAR, raw);
                    None
                }
            }
        });

        let locale_source = match override_locale {
            Some(locale) => {
                formatter.locale_identifier = locale;
                LocaleSource::Override
            }
            None => {
                formatter.locale_identifier = detect_locale_identifier(providers);
                LocaleSource::Detected
            }
        };

        if let Some(raw) = lookup(UNIT_STYLE_VAR) {
            match UnitStyle::from_str(&raw) {
                Some(style) => formatter.unit_style = style,
                None => tracing::warn!(
                    "Ignoring {}={:?}; expected short, medium or long",
                    UNIT_STYLE_VAR,
                    raw
                ),
            }
        }

        if let Some(raw) = lookup(FOOD_ENERGY_VAR) {
            match parse_flag(&raw) {
                Some(flag) => formatter.is_for_food_energy_use = flag,
                None => {
                    tracing::warn!("Ignoring {}={:?}; expected a boolean", FOOD_ENERGY_VAR, raw)
                }
            }
        }

        if let Some(raw) = lookup(FRACTION_DIGITS_VAR) {
            match raw.trim().parse::<u8>() {
                Ok(digits) if digits <= MAX_FRACTION_DIGITS_LIMIT => {
                    formatter.max_fraction_digits = digits;
                }
                _ => tracing::warn!(
                    "Ignoring {}={:?}; expected 0..={}",
                    FRACTION_DIGITS_VAR,
                    raw,
                    MAX_FRACTION_DIGITS_LIMIT
                ),
            }
        }

        Self {
            formatter,
            locale_source,
        }
    }
}

/// Parse common boolean spellings
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::locale::FixedLocaleProvider;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_detected_locale() {
        let fixed = FixedLocaleProvider("fr_FR.UTF-8".to_string());
        let providers: [&dyn LocaleProvider; 1] = [&fixed];
        let config = ServerConfig::from_lookup(lookup_from(&[]), &providers);
        assert_eq!(config.locale_source, LocaleSource::Detected);
        assert_eq!(config.formatter.locale_identifier, "fr_FR");
        assert_eq!(config.formatter.unit_style, UnitStyle::Medium);
        assert!(!config.formatter.is_for_food_energy_use);
    }

    #[test]
    fn test_overrides() {
        let fixed = FixedLocaleProvider("fr_FR".to_string());
        let providers: [&dyn LocaleProvider; 1] = [&fixed];
        let config = ServerConfig::from_lookup(
            lookup_from(&[
                (LOCALE_VAR, "en-US"),
                (UNIT_STYLE_VAR, "long"),
                (FOOD_ENERGY_VAR, "yes"),
                (FRACTION_DIGITS_VAR, "1"),
            ]),
            &providers,
        );
        assert_eq!(config.locale_source, LocaleSource::Override);
        assert_eq!(config.formatter.locale_identifier, "en_US");
        assert_eq!(config.formatter.unit_style, UnitStyle::Long);
        assert!(config.formatter.is_for_food_energy_use);
        assert_eq!(config.formatter.max_fraction_digits, 1);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ServerConfig::from_lookup(
            lookup_from(&[
                (LOCALE_VAR, " "),
                (UNIT_STYLE_VAR, "huge"),
                (FOOD_ENERGY_VAR, "maybe"),
                (FRACTION_DIGITS_VAR, "99"),
            ]),
            &[],
        );
        assert_eq!(config.locale_source, LocaleSource::Detected);
        assert_eq!(config.formatter, FormatterConfig::default());
    }

    #[test]
    fn test_invalid_locale_override_keeps_default() {
        let fixed = FixedLocaleProvider("de_DE".to_string());
        let providers: [&dyn LocaleProvider; 1] = [&fixed];

        for bad in ["not a locale!", "c"] {
            let config = ServerConfig::from_lookup(lookup_from(&[(LOCALE_VAR, bad)]), &providers);
            assert_eq!(config.locale_source, LocaleSource::Detected);
            assert_eq!(config.formatter.locale_identifier, "de_DE");
            assert!(crate::energy::EnergyFormatter::new(config.formatter).is_ok());
        }
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("on"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("nope"), None);
    }
}
