//! Locale handling
//!
//! Decides whether a locale prefers the calorie family and discovers the
//! active locale identifier from the environment or the platform.

use std::collections::HashMap;

use icu_locale_core::Locale;

/// Identifier used when nothing else is known
pub const POSIX_LOCALE: &str = "en_US_POSIX";

/// Locales that display calories rather than joules
const CALORIE_LOCALES: &[&str] = &[
    "en_US",
    "en_US_POSIX",
    "haw_US",
    "es_US",
    "chr_US",
    "en_GB",
    "kw_GB",
    "cy_GB",
    "gv_GB",
];

/// Environment variables consulted for the locale, highest precedence first
const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MEASUREMENT", "LANG"];

/// Whether the locale prefers calories over joules.
///
/// Exact identifier match only: "en_US" matches, "en" and "en-US" do not.
pub fn uses_calories(locale_identifier: &str) -> bool {
    CALORIE_LOCALES.contains(&locale_identifier)
}

/// Normalize a POSIX or BCP-47 locale string into an underscore identifier.
///
/// - "en_US.UTF-8" -> "en_US"
/// - "de_DE@euro" -> "de_DE"
/// - "en-GB" -> "en_GB"
/// - "C" / "POSIX" -> "en_US_POSIX"
pub fn normalize_locale_identifier(raw: &str) -> Option<String> {
    let base = raw
        .trim()
        .split(|c: char| c == '.' || c == '@')
        .next()
        .unwrap_or("")
        .trim();

    if base.is_empty() {
        return None;
    }

    if base == "C" || base == "POSIX" {
        return Some(POSIX_LOCALE.to_string());
    }

    Some(base.replace('-', "_"))
}

/// Convert an underscore identifier into a BCP-47 tag ("en_US" -> "en-US")
pub fn to_bcp47(locale_identifier: &str) -> String {
    locale_identifier.replace('_', "-")
}

/// Whether the identifier parses as a locale ("en_US" yes, "c" no)
pub fn is_valid_locale_identifier(locale_identifier: &str) -> bool {
    to_bcp47(locale_identifier).parse::<Locale>().is_ok()
}

/// Source of a locale identifier
pub trait LocaleProvider {
    /// The identifier this source reports, if any
    fn locale_identifier(&self) -> Option<String>;
}

/// Reads the locale from a snapshot of environment variables
#[derive(Debug, Clone, Default)]
pub struct EnvironmentLocaleProvider {
    vars: HashMap<String, String>,
}

impl EnvironmentLocaleProvider {
    /// Snapshot the current process environment
    pub fn from_process_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build from arbitrary key-value pairs
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl LocaleProvider for EnvironmentLocaleProvider {
    fn locale_identifier(&self) -> Option<String> {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|key| self.vars.get(*key))
            .find_map(|value| normalize_locale_identifier(value))
    }
}

/// Asks the platform for the user's preferred locale
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocaleProvider;

impl LocaleProvider for SystemLocaleProvider {
    fn locale_identifier(&self) -> Option<String> {
        sys_locale::get_locale().and_then(|raw| normalize_locale_identifier(&raw))
    }
}

/// Always reports the same identifier
#[derive(Debug, Clone)]
pub struct FixedLocaleProvider(pub String);

impl LocaleProvider for FixedLocaleProvider {
    fn locale_identifier(&self) -> Option<String> {
        normalize_locale_identifier(&self.0)
    }
}

/// First valid identifier reported by the providers, or "en_US_POSIX"
pub fn detect_locale_identifier(providers: &[&dyn LocaleProvider]) -> String {
    providers
        .iter()
        .filter_map(|provider| provider.locale_identifier())
        .find(|locale| {
            let valid = is_valid_locale_identifier(locale);
            if !valid {
                tracing::warn!("Skipping unparseable locale {:?}", locale);
            }
            valid
        })
        .unwrap_or_else(|| {
            tracing::debug!("No locale reported, falling back to {}", POSIX_LOCALE);
            POSIX_LOCALE.to_string()
        })
}
