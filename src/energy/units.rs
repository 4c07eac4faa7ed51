//! Energy unit types and conversion constants
//!
//! Provides the closed set of energy units the formatter can produce, their
//! display metadata, and the unit style tiers.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants (to joules)
// ============================================================================

/// Joules per joule
pub const J_PER_JOULE: f64 = 1.0;
/// Joules per kilojoule
pub const J_PER_KILOJOULE: f64 = 1000.0;
/// Joules per thermochemical calorie
pub const J_PER_CALORIE: f64 = 4.184;
/// Joules per kilocalorie
pub const J_PER_KILOCALORIE: f64 = 4184.0;

/// An energy unit the formatter can select or render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    /// Chemistry calorie, "cal"
    Calorie,
    /// Kilocalorie, "kcal", or "C"/"Cal"/"Calories" in food-energy mode
    Kilocalorie,
}

impl EnergyUnit {
    /// Every unit, smallest first within each family
    pub const ALL: [EnergyUnit; 4] = [
        EnergyUnit::Joule,
        EnergyUnit::Kilojoule,
        EnergyUnit::Calorie,
        EnergyUnit::Kilocalorie,
    ];

    /// Conversion factor from this unit to joules
    pub fn joules_per_unit(&self) -> f64 {
        match self {
            EnergyUnit::Joule => J_PER_JOULE,
            EnergyUnit::Kilojoule => J_PER_KILOJOULE,
            EnergyUnit::Calorie => J_PER_CALORIE,
            EnergyUnit::Kilocalorie => J_PER_KILOCALORIE,
        }
    }

    /// Measurement symbol used for conversions
    pub fn canonical_symbol(&self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Calorie => "cal",
            EnergyUnit::Kilocalorie => "kCal",
        }
    }

    /// Symbol shown in short and medium styles
    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::Kilocalorie => "kcal",
            other => other.canonical_symbol(),
        }
    }

    /// Full singular name
    pub fn singular_name(&self) -> &'static str {
        match self {
            EnergyUnit::Joule => "joule",
            EnergyUnit::Kilojoule => "kilojoule",
            EnergyUnit::Calorie => "calorie",
            EnergyUnit::Kilocalorie => "kilocalorie",
        }
    }

    /// Full plural name (singular + "s", no irregular plurals)
    pub fn plural_name(&self) -> String {
        format!("{}s", self.singular_name())
    }

    /// Numeric code shared with Foundation's `EnergyFormatter.Unit`
    pub fn code(&self) -> i32 {
        match self {
            EnergyUnit::Joule => 11,
            EnergyUnit::Kilojoule => 14,
            EnergyUnit::Calorie => 1793,
            EnergyUnit::Kilocalorie => 1794,
        }
    }

    /// Look up a unit by its numeric code
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.code() == code)
    }

    /// Whether this unit belongs to the calorie family
    pub fn is_calorie_family(&self) -> bool {
        matches!(self, EnergyUnit::Calorie | EnergyUnit::Kilocalorie)
    }

    /// Parse from a name or symbol. Symbols are case-sensitive where
    /// case distinguishes units; full names are not.
    pub fn from_str(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        match trimmed {
            "J" => return Some(EnergyUnit::Joule),
            "kJ" | "KJ" => return Some(EnergyUnit::Kilojoule),
            _ => {}
        }

        match trimmed.to_lowercase().as_str() {
            "j" | "joule" | "joules" => Some(EnergyUnit::Joule),
            "kj" | "kilojoule" | "kilojoules" => Some(EnergyUnit::Kilojoule),
            "cal" | "calorie" | "calories" => Some(EnergyUnit::Calorie),
            "kcal" | "kilocalorie" | "kilocalories" => Some(EnergyUnit::Kilocalorie),
            _ => None,
        }
    }

    /// Lowercase name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        self.singular_name()
    }
}

impl std::fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verbosity tier for unit labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStyle {
    /// Symbol, no separator: "5kJ"
    Short,
    /// Symbol with a space: "5 kJ"
    #[default]
    Medium,
    /// Full name with a space: "5 kilojoules"
    Long,
}

impl UnitStyle {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" => Some(UnitStyle::Short),
            "medium" => Some(UnitStyle::Medium),
            "long" => Some(UnitStyle::Long),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStyle::Short => "short",
            UnitStyle::Medium => "medium",
            UnitStyle::Long => "long",
        }
    }

    /// Text placed between the number and the label
    pub fn separator(&self) -> &'static str {
        match self {
            UnitStyle::Short => "",
            UnitStyle::Medium | UnitStyle::Long => " ",
        }
    }
}

impl std::fmt::Display for UnitStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joules_per_unit() {
        assert_eq!(EnergyUnit::Joule.joules_per_unit(), 1.0);
        assert_eq!(EnergyUnit::Kilojoule.joules_per_unit(), 1000.0);
        assert_eq!(EnergyUnit::Calorie.joules_per_unit(), 4.184);
        assert_eq!(EnergyUnit::Kilocalorie.joules_per_unit(), 4184.0);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(EnergyUnit::Joule.symbol(), "J");
        assert_eq!(EnergyUnit::Kilojoule.symbol(), "kJ");
        assert_eq!(EnergyUnit::Calorie.symbol(), "cal");
        assert_eq!(EnergyUnit::Kilocalorie.symbol(), "kcal");
        assert_eq!(EnergyUnit::Kilocalorie.canonical_symbol(), "kCal");
    }

    #[test]
    fn test_names() {
        assert_eq!(EnergyUnit::Calorie.singular_name(), "calorie");
        assert_eq!(EnergyUnit::Calorie.plural_name(), "calories");
        assert_eq!(EnergyUnit::Kilojoule.plural_name(), "kilojoules");
    }

    #[test]
    fn test_codes_round_trip() {
        for unit in EnergyUnit::ALL {
            assert_eq!(EnergyUnit::from_code(unit.code()), Some(unit));
        }
        assert_eq!(EnergyUnit::from_code(12), None);
    }

    #[test]
    fn test_parse_unit_strings() {
        assert_eq!(EnergyUnit::from_str("J"), Some(EnergyUnit::Joule));
        assert_eq!(EnergyUnit::from_str("kJ"), Some(EnergyUnit::Kilojoule));
        assert_eq!(EnergyUnit::from_str("Kilocalories"), Some(EnergyUnit::Kilocalorie));
        assert_eq!(EnergyUnit::from_str(" kcal "), Some(EnergyUnit::Kilocalorie));
        assert_eq!(EnergyUnit::from_str("cal"), Some(EnergyUnit::Calorie));
        assert_eq!(EnergyUnit::from_str("btu"), None);
    }

    #[test]
    fn test_calorie_family() {
        assert!(EnergyUnit::Calorie.is_calorie_family());
        assert!(EnergyUnit::Kilocalorie.is_calorie_family());
        assert!(!EnergyUnit::Joule.is_calorie_family());
    }

    #[test]
    fn test_unit_style() {
        assert_eq!(UnitStyle::default(), UnitStyle::Medium);
        assert_eq!(UnitStyle::from_str("LONG"), Some(UnitStyle::Long));
        assert_eq!(UnitStyle::from_str("tiny"), None);
        assert_eq!(UnitStyle::Short.separator(), "");
        assert_eq!(UnitStyle::Long.separator(), " ");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&EnergyUnit::Kilocalorie).unwrap();
        assert_eq!(json, "\"kilocalorie\"");
        let style: UnitStyle = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(style, UnitStyle::Short);
    }
}
