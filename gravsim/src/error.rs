//! Error types for loading and validating scenarios.
//!
//! The physics core never fails; everything here happens before the first tick.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: String, reason: String },

    #[error("Scenario has no bodies: add a generator or list bodies explicitly")]
    Empty,
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
