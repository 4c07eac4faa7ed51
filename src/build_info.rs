//! Build metadata and the startup banner
//!
//! The build script provides the counter, timestamp and profile; the banner
//! also shows the formatter settings the server starts with.

use serde::Serialize;

use crate::energy::FormatterConfig;

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("ENERGY_FMT_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("ENERGY_FMT_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Cargo profile ("debug" or "release")
pub const BUILD_PROFILE: &str = match option_env!("ENERGY_FMT_BUILD_PROFILE") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// `str::parse` is not const
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return None;
        }
        result = result * 10 + (digit - b'0') as u64;
        i += 1;
    }
    Some(result)
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            build_profile: BUILD_PROFILE,
            description: DESCRIPTION,
        }
    }
}

/// Banner text: build identity followed by the active formatter settings
pub fn startup_banner_lines(info: &BuildInfo, config: &FormatterConfig) -> Vec<String> {
    let rule = "=".repeat(47);
    let family = if config.uses_calories() { "calories" } else { "joules" };
    vec![
        rule.clone(),
        format!("  Energy Formatter ({})", info.name),
        format!(
            "  Version: {} | Build: {} ({})",
            info.version, info.build_number, info.build_profile
        ),
        format!("  Compiled: {}", info.build_timestamp),
        format!("  Locale: {} ({})", config.locale_identifier, family),
        format!(
            "  Style: {} | Food energy: {}",
            config.unit_style,
            if config.is_for_food_energy_use { "on" } else { "off" }
        ),
        rule,
    ]
}

/// Print the startup banner to stderr
pub fn print_startup_banner(config: &FormatterConfig) {
    for line in startup_banner_lines(&BuildInfo::current(), config) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::UnitStyle;

    #[test]
    fn test_parse_u64() {
        assert_eq!(parse_u64("0"), Some(0));
        assert_eq!(parse_u64("1234"), Some(1234));
        assert_eq!(parse_u64(""), None);
        assert_eq!(parse_u64("12a"), None);
    }

    #[test]
    fn test_build_info_current() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "energy-fmt");
        assert_eq!(info.version, VERSION);
        assert!(!info.build_profile.is_empty());
    }

    #[test]
    fn test_banner_reports_formatter_settings() {
        let info = BuildInfo::current();

        let config = FormatterConfig::new("de_DE").with_unit_style(UnitStyle::Long);
        let lines = startup_banner_lines(&info, &config);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], lines[6]);
        assert!(lines.contains(&"  Locale: de_DE (joules)".to_string()));
        assert!(lines.contains(&"  Style: long | Food energy: off".to_string()));

        let config = FormatterConfig::new("en_US").with_food_energy_use(true);
        let lines = startup_banner_lines(&info, &config);
        assert!(lines.contains(&"  Locale: en_US (calories)".to_string()));
        assert!(lines.contains(&"  Style: medium | Food energy: on".to_string()));
    }
}
