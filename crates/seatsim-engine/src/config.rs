//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] names a visibility policy, a vacate threshold and
//! an optional round limit. The two presets reproduce the two rule sets:
//! [`adjacent()`](SimulationConfig::adjacent) and
//! [`line_of_sight()`](SimulationConfig::line_of_sight).

use std::error::Error;
use std::fmt;

use seatsim_grid::{NeighbourCounter, NeighbourPolicy};

use crate::rule::TransitionRule;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Threshold outside `1..=8`.
    ///
    /// Zero would vacate every seat it fills, oscillating forever; above 8
    /// no seat could ever vacate.
    InvalidThreshold {
        /// The rejected value.
        value: usize,
    },
    /// `max_rounds` was `Some(0)`.
    ZeroRoundLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold { value } => {
                write!(f, "threshold must be in 1..=8, got {value}")
            }
            Self::ZeroRoundLimit => write!(f, "max_rounds must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SimulationConfig ───────────────────────────────────────────────

/// Everything a stabilization run needs besides the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// How each seat looks for neighbours. Default: adjacent.
    pub policy: NeighbourPolicy,
    /// Occupied seats seeing at least this many occupied seats vacate.
    /// Default: 4.
    pub threshold: usize,
    /// Maximum number of grid-changing rounds. `None` (default) runs until
    /// the grid stops changing.
    pub max_rounds: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::adjacent()
    }
}

impl SimulationConfig {
    /// Adjacent visibility, threshold 4.
    pub const fn adjacent() -> Self {
        Self {
            policy: NeighbourPolicy::Adjacent,
            threshold: 4,
            max_rounds: None,
        }
    }

    /// Line-of-sight visibility, threshold 5.
    pub const fn line_of_sight() -> Self {
        Self {
            policy: NeighbourPolicy::LineOfSight,
            threshold: 5,
            max_rounds: None,
        }
    }

    /// Replace the policy.
    pub fn with_policy(mut self, policy: NeighbourPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Cap the number of grid-changing rounds.
    pub fn with_max_rounds(mut self, max_rounds: u64) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Check the threshold and round limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=8).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.threshold,
            });
        }
        if self.max_rounds == Some(0) {
            return Err(ConfigError::ZeroRoundLimit);
        }
        Ok(())
    }

    /// The neighbour counter for [`policy`](Self::policy).
    pub fn counter(&self) -> &'static dyn NeighbourCounter {
        self.policy.counter()
    }

    /// The transition rule for [`threshold`](Self::threshold).
    pub fn rule(&self) -> TransitionRule {
        TransitionRule::new(self.threshold)
    }
}
