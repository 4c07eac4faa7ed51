//! Energy Formatter Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::LocaleSource;
use crate::energy::FormatterConfig;

/// Usage instructions for AI assistants
pub const ENERGY_INSTRUCTIONS: &str = r#"
# Energy Formatter Instructions

This server turns energy quantities into display strings such as
"2.462 cal", "5 kJ" or "200 Cal".

## Choosing a Tool

| You have | Tool |
|----------|------|
| A value in joules, want the best unit for the locale | `format_joules` |
| A value already in a specific unit | `format_energy` |
| Only need the unit word/symbol | `energy_unit_label` / `energy_unit_label_from_joules` |
| Want to know which family a locale uses | `locale_energy_preference` |

## Units

| Unit | Symbol | Joules |
|------|--------|--------|
| joule | J | 1 |
| kilojoule | kJ | 1000 |
| calorie | cal | 4.184 |
| kilocalorie | kcal | 4184 |

Unit parameters accept names or symbols: "kJ", "kilojoules", "kcal", ...

## Unit Selection from Joules

- Calorie locales (en_US, en_GB, haw_US, es_US, chr_US, kw_GB, cy_GB, gv_GB,
  en_US_POSIX): up to 4184 J → calories, otherwise kilocalories.
- Every other locale: up to 1000 J → joules, otherwise kilojoules.
- Zero and negative quantities use the large unit.

Locale matching is exact: "en_US" prefers calories, "en" does not.

## Styles

- `short`: symbol, no space → "5kJ"
- `medium` (default): symbol with space → "5 kJ"
- `long`: full name → "5 kilojoules", "1 kilojoule"

## Food Energy

Set `food_energy: true` when showing nutrition label values. Kilocalories
then render as "C" (short), "Cal" (medium) or "Calories" (long).

## Numbers

Numbers use the locale's separators with up to 3 fraction digits
("1,234.5" in en_US, "1.234,5" in de_DE). NaN and infinite values are
rejected.
"#;

/// Runtime status of the energy formatter service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Active formatter configuration
    pub formatter: FormatterConfig,
    pub locale_source: LocaleSource,
    pub uses_calories: bool,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    formatter: FormatterConfig,
    locale_source: LocaleSource,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(formatter: FormatterConfig, locale_source: LocaleSource) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            formatter,
            locale_source,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> ServiceStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uses_calories: self.formatter.uses_calories(),
            formatter: self.formatter.clone(),
            locale_source: self.locale_source,
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_config() {
        let tracker = StatusTracker::new(FormatterConfig::new("en_GB"), LocaleSource::Override);
        let status = tracker.get_status();
        assert_eq!(status.formatter.locale_identifier, "en_GB");
        assert!(status.uses_calories);
        assert_eq!(status.locale_source, LocaleSource::Override);
        assert_eq!(status.process_id, std::process::id());
    }

    #[test]
    fn test_status_serializes() {
        let tracker = StatusTracker::new(FormatterConfig::default(), LocaleSource::Detected);
        let json = serde_json::to_value(tracker.get_status()).unwrap();
        assert_eq!(json["locale_source"], "detected");
        assert_eq!(json["formatter"]["unit_style"], "medium");
    }
}
