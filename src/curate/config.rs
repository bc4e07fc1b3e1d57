//! Configuration types for dataset curation.
//!
//! - [`CurateConfig`]: Main configuration struct
//! - [`SimilarityConfig`]: Size window and escalation schedule for the matcher
//! - [`LevelPool`]: Which molecules the level builder draws from
//!
//! All types deserialize from TOML with every field optional:
//!
//! ```
//! use molcurate::{CurateConfig, LevelPool};
//!
//! let config = CurateConfig::from_toml_str(r#"
//!     min_atoms = 8
//!     pool = "representatives"
//!
//!     [similarity]
//!     threshold = 0.1
//! "#)?;
//!
//! assert_eq!(config.min_atoms, 8);
//! assert_eq!(config.level_count, 120);
//! assert_eq!(config.pool, LevelPool::Representatives);
//! assert_eq!(config.similarity.escalation_limit, 5.0);
//! # Ok::<(), molcurate::CurateError>(())
//! ```

use serde::Deserialize;

use super::error::Error;

pub const DEFAULT_MIN_ATOMS: usize = 5;
pub const DEFAULT_LEVEL_COUNT: usize = 120;
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Source of molecules for level building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LevelPool {
    /// Every molecule in the working set.
    #[default]
    All,
    /// Only the round-robin representative selection.
    Representatives,
}

/// Allowed size window for similar molecules and how it relaxes.
///
/// The base window around a target of `n` atoms is `n * threshold`. When it
/// holds fewer than two candidates the window is multiplied by
/// `escalation_start`, then by successive multipliers `escalation_step`
/// apart, up to and including `escalation_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    pub threshold: f64,
    pub escalation_start: f64,
    pub escalation_step: f64,
    pub escalation_limit: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            escalation_start: 1.5,
            escalation_step: 0.5,
            escalation_limit: 5.0,
        }
    }
}

impl SimilarityConfig {
    /// Window multipliers tried after the base pass, in order.
    pub fn multipliers(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::successors(Some(self.escalation_start), move |m| {
            Some(m + self.escalation_step)
        })
        .take_while(move |m| *m <= self.escalation_limit)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(Error::invalid_config(
                "similarity.threshold",
                format!("must be a positive number, got {}", self.threshold),
            ));
        }
        if !self.escalation_start.is_finite() || self.escalation_start <= 0.0 {
            return Err(Error::invalid_config(
                "similarity.escalation_start",
                format!("must be a positive number, got {}", self.escalation_start),
            ));
        }
        if !self.escalation_step.is_finite() || self.escalation_step <= 0.0 {
            return Err(Error::invalid_config(
                "similarity.escalation_step",
                format!("must be a positive number, got {}", self.escalation_step),
            ));
        }
        if !self.escalation_limit.is_finite() {
            return Err(Error::invalid_config(
                "similarity.escalation_limit",
                "must be finite",
            ));
        }
        Ok(())
    }
}

/// Main configuration for a curation pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurateConfig {
    /// Minimum admissible atom count.
    pub min_atoms: usize,

    /// Maximum number of levels to build.
    pub level_count: usize,

    /// Number of representatives to draw across the size spectrum.
    pub representative_count: usize,

    pub similarity: SimilarityConfig,

    /// Molecules the level builder draws targets and companions from.
    pub pool: LevelPool,
}

impl Default for CurateConfig {
    fn default() -> Self {
        Self {
            min_atoms: DEFAULT_MIN_ATOMS,
            level_count: DEFAULT_LEVEL_COUNT,
            representative_count: DEFAULT_LEVEL_COUNT,
            similarity: SimilarityConfig::default(),
            pool: LevelPool::All,
        }
    }
}

impl CurateConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.similarity.validate()
    }
}
