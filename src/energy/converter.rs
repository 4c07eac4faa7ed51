//! Unit selection and conversion functions
//!
//! Picks the display unit for a joule quantity and converts between units.

use super::units::{EnergyUnit, J_PER_KILOCALORIE, J_PER_KILOJOULE};

/// Choose the unit a joule quantity is displayed in.
///
/// The small unit covers `(0, upper]` where the upper bound is one of the
/// large unit. Zero, negatives and NaN fall through to the large unit.
pub fn select_unit(value_in_joules: f64, prefer_calories: bool) -> EnergyUnit {
    if prefer_calories {
        if value_in_joules > 0.0 && value_in_joules <= J_PER_KILOCALORIE {
            EnergyUnit::Calorie
        } else {
            EnergyUnit::Kilocalorie
        }
    } else if value_in_joules > 0.0 && value_in_joules <= J_PER_KILOJOULE {
        EnergyUnit::Joule
    } else {
        EnergyUnit::Kilojoule
    }
}

/// Convert a joule quantity into the given unit
pub fn convert(value_in_joules: f64, to: EnergyUnit) -> f64 {
    value_in_joules / to.joules_per_unit()
}

/// Convert a quantity in the given unit to joules
pub fn to_joules(value: f64, from: EnergyUnit) -> f64 {
    value * from.joules_per_unit()
}

/// Convert a quantity between any two units
pub fn convert_between(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    if from == to {
        return value;
    }
    convert(to_joules(value, from), to)
}
