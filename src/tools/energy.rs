//! Energy Formatting MCP Tools
//!
//! Tools for rendering energy values and inspecting unit metadata.

use serde::Serialize;

use crate::energy::{
    normalize_locale_identifier, scale_joules, unit_label, uses_calories, EnergyFormatter,
    EnergyUnit, FormatterConfig, UnitStyle,
};

/// Per-call overrides of the server's formatter configuration
#[derive(Debug, Clone, Default)]
pub struct FormatOverrides {
    pub locale: Option<String>,
    pub unit_style: Option<String>,
    pub food_energy: Option<bool>,
}

/// Response for format_energy
#[derive(Debug, Serialize)]
pub struct FormatEnergyResponse {
    pub text: String,
    pub value: f64,
    pub unit: EnergyUnit,
    pub unit_style: UnitStyle,
    pub locale: String,
}

/// Response for format_joules
#[derive(Debug, Serialize)]
pub struct FormatJoulesResponse {
    pub text: String,
    pub joules: f64,
    pub value: f64,
    pub unit: EnergyUnit,
    pub unit_style: UnitStyle,
    pub locale: String,
    pub uses_calories: bool,
}

/// Response for energy_unit_label
#[derive(Debug, Serialize)]
pub struct UnitLabelResponse {
    pub label: String,
    pub unit: EnergyUnit,
    pub unit_style: UnitStyle,
}

/// Response for energy_unit_label_from_joules
#[derive(Debug, Serialize)]
pub struct UnitLabelFromJoulesResponse {
    pub label: String,
    pub joules: f64,
    pub value: f64,
    pub unit: EnergyUnit,
    pub unit_style: UnitStyle,
    pub locale: String,
}

/// Metadata for one energy unit
#[derive(Debug, Serialize)]
pub struct EnergyUnitInfo {
    pub unit: EnergyUnit,
    pub code: i32,
    pub symbol: &'static str,
    pub singular: &'static str,
    pub plural: String,
    pub joules_per_unit: f64,
    pub calorie_family: bool,
}

impl From<EnergyUnit> for EnergyUnitInfo {
    fn from(unit: EnergyUnit) -> Self {
        Self {
            unit,
            code: unit.code(),
            symbol: unit.symbol(),
            singular: unit.singular_name(),
            plural: unit.plural_name(),
            joules_per_unit: unit.joules_per_unit(),
            calorie_family: unit.is_calorie_family(),
        }
    }
}

/// Response for list_energy_units
#[derive(Debug, Serialize)]
pub struct ListEnergyUnitsResponse {
    pub units: Vec<EnergyUnitInfo>,
    pub count: usize,
}

/// Response for locale_energy_preference
#[derive(Debug, Serialize)]
pub struct LocalePreferenceResponse {
    pub locale: String,
    pub uses_calories: bool,
    /// Unit for quantities up to one large unit
    pub small_unit: EnergyUnit,
    pub large_unit: EnergyUnit,
}

/// Apply per-call overrides on top of the server configuration
pub fn resolve_config(
    base: &FormatterConfig,
    overrides: &FormatOverrides,
) -> Result<FormatterConfig, String> {
    let mut config = base.clone();

    if let Some(raw) = overrides.locale.as_deref() {
        config.locale_identifier = normalize_locale_identifier(raw)
            .ok_or_else(|| "locale cannot be empty".to_string())?;
    }

    if let Some(raw) = overrides.unit_style.as_deref() {
        config.unit_style = UnitStyle::from_str(raw).ok_or_else(|| {
            format!("Unknown unit_style '{}'. Use short, medium, or long", raw)
        })?;
    }

    if let Some(flag) = overrides.food_energy {
        config.is_for_food_energy_use = flag;
    }

    Ok(config)
}

/// Parse a unit name or symbol
pub fn parse_energy_unit(raw: &str) -> Result<EnergyUnit, String> {
    EnergyUnit::from_str(raw).ok_or_else(|| {
        format!(
            "Unknown energy unit '{}'. Use joule, kilojoule, calorie, or kilocalorie",
            raw
        )
    })
}

fn build_formatter(config: FormatterConfig) -> Result<EnergyFormatter, String> {
    EnergyFormatter::new(config).map_err(|e| format!("Formatter error: {}", e))
}

/// Format a value that is already in a known unit
pub fn format_energy(
    base: &FormatterConfig,
    value: f64,
    unit: &str,
    overrides: &FormatOverrides,
) -> Result<FormatEnergyResponse, String> {
    let unit = parse_energy_unit(unit)?;
    let config = resolve_config(base, overrides)?;
    let formatter = build_formatter(config)?;

    let text = formatter
        .format_value(value, unit)
        .map_err(|e| format!("Failed to format energy: {}", e))?;

    Ok(FormatEnergyResponse {
        text,
        value,
        unit,
        unit_style: formatter.unit_style(),
        locale: formatter.config().locale_identifier.clone(),
    })
}

/// Format a joule quantity in the locale-appropriate unit
pub fn format_joules(
    base: &FormatterConfig,
    joules: f64,
    overrides: &FormatOverrides,
) -> Result<FormatJoulesResponse, String> {
    let config = resolve_config(base, overrides)?;
    let formatter = build_formatter(config)?;

    let formatted = formatter
        .format_joules(joules)
        .map_err(|e| format!("Failed to format energy: {}", e))?;

    Ok(FormatJoulesResponse {
        text: formatted.text,
        joules,
        value: formatted.value,
        unit: formatted.unit,
        unit_style: formatter.unit_style(),
        locale: formatter.config().locale_identifier.clone(),
        uses_calories: formatter.config().uses_calories(),
    })
}

/// Label for a value in a known unit
pub fn energy_unit_label(
    base: &FormatterConfig,
    value: f64,
    unit: &str,
    overrides: &FormatOverrides,
) -> Result<UnitLabelResponse, String> {
    let unit = parse_energy_unit(unit)?;
    let config = resolve_config(base, overrides)?;

    Ok(UnitLabelResponse {
        label: unit_label(value, unit, config.unit_style, config.is_for_food_energy_use),
        unit,
        unit_style: config.unit_style,
    })
}

/// Label and chosen unit for a joule quantity
pub fn energy_unit_label_from_joules(
    base: &FormatterConfig,
    joules: f64,
    overrides: &FormatOverrides,
) -> Result<UnitLabelFromJoulesResponse, String> {
    let config = resolve_config(base, overrides)?;
    let (value, unit) = scale_joules(joules, &config.locale_identifier);

    Ok(UnitLabelFromJoulesResponse {
        label: unit_label(value, unit, config.unit_style, config.is_for_food_energy_use),
        joules,
        value,
        unit,
        unit_style: config.unit_style,
        locale: config.locale_identifier,
    })
}

/// Metadata for every supported unit
pub fn list_energy_units() -> ListEnergyUnitsResponse {
    let units: Vec<EnergyUnitInfo> =
        EnergyUnit::ALL.into_iter().map(EnergyUnitInfo::from).collect();
    let count = units.len();
    ListEnergyUnitsResponse { units, count }
}

/// Which unit family a locale uses
pub fn locale_energy_preference(
    base: &FormatterConfig,
    locale: Option<&str>,
) -> Result<LocalePreferenceResponse, String> {
    let locale = match locale {
        Some(raw) => {
            normalize_locale_identifier(raw).ok_or_else(|| "locale cannot be empty".to_string())?
        }
        None => base.locale_identifier.clone(),
    };

    let prefers = uses_calories(&locale);
    let (small_unit, large_unit) = if prefers {
        (EnergyUnit::Calorie, EnergyUnit::Kilocalorie)
    } else {
        (EnergyUnit::Joule, EnergyUnit::Kilojoule)
    };

    Ok(LocalePreferenceResponse {
        locale,
        uses_calories: prefers,
        small_unit,
        large_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> FormatterConfig {
        FormatterConfig::new("en_US")
    }

    #[test]
    fn test_resolve_config_overrides() {
        let overrides = FormatOverrides {
            locale: Some("de-DE".to_string()),
            unit_style: Some("Long".to_string()),
            food_energy: Some(true),
        };
        let config = resolve_config(&us(), &overrides).unwrap();
        assert_eq!(config.locale_identifier, "de_DE");
        assert_eq!(config.unit_style, UnitStyle::Long);
        assert!(config.is_for_food_energy_use);
    }

    #[test]
    fn test_resolve_config_rejects_bad_style() {
        let overrides = FormatOverrides {
            unit_style: Some("verbose".to_string()),
            ..Default::default()
        };
        let err = resolve_config(&us(), &overrides).unwrap_err();
        assert!(err.contains("verbose"));
    }

    #[test]
    fn test_format_energy() {
        let overrides = FormatOverrides {
            unit_style: Some("long".to_string()),
            ..Default::default()
        };
        let resp = format_energy(&us(), 1.0, "kJ", &overrides).unwrap();
        assert_eq!(resp.text, "1 kilojoule");
        assert_eq!(resp.unit, EnergyUnit::Kilojoule);
        assert_eq!(resp.locale, "en_US");
    }

    #[test]
    fn test_format_energy_unknown_unit() {
        let err = format_energy(&us(), 1.0, "btu", &FormatOverrides::default()).unwrap_err();
        assert!(err.contains("btu"));
    }

    #[test]
    fn test_format_energy_non_finite() {
        let err = format_energy(&us(), f64::NAN, "kcal", &FormatOverrides::default()).unwrap_err();
        assert!(err.starts_with("Failed to format energy"));
    }

    #[test]
    fn test_format_joules() {
        let resp = format_joules(&us(), 10.3, &FormatOverrides::default()).unwrap();
        assert_eq!(resp.text, "2.462 cal");
        assert_eq!(resp.unit, EnergyUnit::Calorie);
        assert!(resp.uses_calories);
        assert_eq!(resp.joules, 10.3);
    }

    #[test]
    fn test_format_joules_food_override() {
        let overrides = FormatOverrides {
            unit_style: Some("short".to_string()),
            food_energy: Some(true),
            ..Default::default()
        };
        let resp = format_joules(&us(), 418_400.0, &overrides).unwrap();
        assert_eq!(resp.text, "100C");
    }

    #[test]
    fn test_energy_unit_label() {
        let resp = energy_unit_label(&us(), 3.0, "cal", &FormatOverrides::default()).unwrap();
        assert_eq!(resp.label, "cal");
        assert_eq!(resp.unit_style, UnitStyle::Medium);
    }

    #[test]
    fn test_energy_unit_label_from_joules() {
        let overrides = FormatOverrides {
            locale: Some("fr_FR".to_string()),
            unit_style: Some("long".to_string()),
            ..Default::default()
        };
        let resp = energy_unit_label_from_joules(&us(), 1000.0, &overrides).unwrap();
        assert_eq!(resp.unit, EnergyUnit::Joule);
        assert_eq!(resp.label, "joules");
        assert_eq!(resp.value, 1000.0);
    }

    #[test]
    fn test_list_energy_units() {
        let resp = list_energy_units();
        assert_eq!(resp.count, 4);
        let kcal = resp
            .units
            .iter()
            .find(|u| u.unit == EnergyUnit::Kilocalorie)
            .unwrap();
        assert_eq!(kcal.symbol, "kcal");
        assert_eq!(kcal.code, 1794);
        assert!(kcal.calorie_family);
    }

    #[test]
    fn test_locale_energy_preference() {
        let resp = locale_energy_preference(&us(), None).unwrap();
        assert!(resp.uses_calories);
        assert_eq!(resp.small_unit, EnergyUnit::Calorie);

        let resp = locale_energy_preference(&us(), Some("fr_FR.UTF-8")).unwrap();
        assert_eq!(resp.locale, "fr_FR");
        assert!(!resp.uses_calories);
        assert_eq!(resp.large_unit, EnergyUnit::Kilojoule);

        assert!(locale_energy_preference(&us(), Some("")).is_err());
    }
}
