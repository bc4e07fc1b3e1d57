//! Error types for dataset curation.

use thiserror::Error;

/// Errors that can occur while configuring or running a curation pass.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse a TOML curation configuration.
    #[error("failed to parse curation config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is outside its valid range.
    #[error("invalid curation config: {field} {detail}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the constraint that was violated.
        detail: String,
    },

    /// The working set contains no molecules at or above the floor.
    #[error("working set is empty: no molecules with at least {min_atoms} atoms")]
    EmptyCorpus {
        /// The floor that was applied.
        min_atoms: usize,
    },
}

impl Error {
    pub fn invalid_config(field: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            detail: detail.into(),
        }
    }
}
