//! Formatting error types

use thiserror::Error;

/// Errors raised while rendering an energy value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("Cannot format {value} as a number: {reason}")]
    NumericRendering { value: f64, reason: String },

    #[error("Invalid locale identifier: {0}")]
    InvalidLocale(String),

    #[error("Number formatting data unavailable for locale {locale}: {message}")]
    FormatterData { locale: String, message: String },
}

impl FormatError {
    pub fn numeric(value: f64, reason: impl Into<String>) -> Self {
        FormatError::NumericRendering {
            value,
            reason: reason.into(),
        }
    }
}

/// Result type for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
