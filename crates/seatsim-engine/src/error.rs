//! Errors from a configured stabilization run.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Why [`Stabilizer::run()`](crate::Stabilizer::run) stopped without a
/// fixed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StabilizeError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The grid was still changing after `limit` rounds.
    RoundLimitExceeded {
        /// The configured `max_rounds`.
        limit: u64,
    },
}

impl fmt::Display for StabilizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::RoundLimitExceeded { limit } => {
                write!(f, "grid still changing after {limit} rounds")
            }
        }
    }
}

impl Error for StabilizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::RoundLimitExceeded { .. } => None,
        }
    }
}

impl From<ConfigError> for StabilizeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
