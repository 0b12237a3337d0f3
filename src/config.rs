//! Configuration for building a [`RandomSource`](crate::RandomSource).
//!
//! The seed can come from code, from a deserialized config file, or from the
//! `RANDGEN_SEED` environment variable (a `.env` file is honoured).

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Environment variable holding an optional fixed seed.
pub const SEED_ENV_VAR: &str = "RANDGEN_SEED";

/// Errors raised while loading a [`SourceConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    /// The seed variable is set but is not an unsigned 64-bit integer.
    #[error("{var} must be an unsigned 64-bit integer, got {value:?}")]
    #[diagnostic(
        code(randgen::config::invalid_seed),
        help("unset the variable to let the OS choose a seed")
    )]
    InvalidSeed { var: &'static str, value: String },
}

/// Settings for a random source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Fixed seed; `None` lets the source pick one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SourceConfig {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Builder-style setter for the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load from the process environment, after reading `.env` if present.
    ///
    /// # Errors
    /// [`ConfigError::InvalidSeed`] when `RANDGEN_SEED` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    /// [`ConfigError::InvalidSeed`] when the seed variable does not parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randgen::config::SourceConfig;
    ///
    /// let config = SourceConfig::from_lookup(|_| Some("42".to_string())).unwrap();
    /// assert_eq!(config.seed, Some(42));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_ENV_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                let parsed = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed {
                        var: SEED_ENV_VAR,
                        value: raw.clone(),
                    })?;
                Some(parsed)
            }
            _ => None,
        };
        Ok(Self { seed })
    }
}

impl fmt::Display for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.seed {
            Some(seed) => write!(f, "SourceConfig {{ seed: {seed} }}"),
            None => write!(f, "SourceConfig {{ seed: <os> }}"),
        }
    }
}
