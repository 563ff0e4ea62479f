//! Configuration errors.
//!
//! Column sizing itself never fails. The only fallible surface is loading
//! and validating a [`crate::ColumnConfig`].

/// Error returned when a column configuration cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration source was not valid JSON for a config.
    #[error("Failed to parse column config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the solver cannot work with.
    #[error("Invalid column config field '{field}' = {value}: {reason}")]
    Invalid {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

impl ConfigError {
    /// Creates a new invalid field error.
    pub fn invalid(field: &'static str, value: f32, reason: &'static str) -> Self {
        Self::Invalid {
            field,
            value,
            reason,
        }
    }
}
