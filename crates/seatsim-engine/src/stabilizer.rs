//! Fixed-point iteration over seating rounds.
//!
//! [`Stabilizer`] is a two-state machine. It starts `Running` with the
//! initial grid; each [`advance()`](Stabilizer::advance) applies one
//! [`step`](crate::step()) and compares the result with its input. A step
//! that changes nothing moves it to `Converged`, which is terminal.
//!
//! Only the current grid and the one being built are alive at any time.
//!
//! # Termination
//!
//! Convergence is assumed, not proven: a layout that cycles with period
//! greater than one would run forever. [`stabilize`] has no cap; runs built
//! from a [`SimulationConfig`] with `max_rounds` fail with
//! [`StabilizeError::RoundLimitExceeded`] instead.

use std::time::Instant;

use seatsim_grid::{Grid, NeighbourCounter};

use crate::config::{ConfigError, SimulationConfig};
use crate::error::StabilizeError;
use crate::metrics::StabilizeMetrics;
use crate::rule::TransitionRule;
use crate::step::{step, step_counted};

/// Where a [`Stabilizer`] is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StabilizerState {
    /// Still changing; holds the current round's grid.
    Running(Grid),
    /// Terminal; holds the fixed point.
    Converged(Grid),
}

impl StabilizerState {
    /// The grid held by either state.
    pub fn grid(&self) -> &Grid {
        match self {
            Self::Running(g) | Self::Converged(g) => g,
        }
    }

    /// Consume the state, returning its grid.
    pub fn into_grid(self) -> Grid {
        match self {
            Self::Running(g) | Self::Converged(g) => g,
        }
    }

    /// `true` once the fixed point is reached.
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged(_))
    }
}

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct Convergence {
    /// The fixed point.
    pub grid: Grid,
    /// Rounds that changed the grid before it settled.
    pub rounds: u64,
    /// Occupied seats in [`grid`](Self::grid).
    pub occupied: usize,
    /// Metrics for the whole run.
    pub metrics: StabilizeMetrics,
}

/// Drives a grid to its fixed point one round at a time.
///
/// # Example
///
/// ```
/// use seatsim_engine::{Stabilizer, StabilizerState};
/// use seatsim_grid::{Adjacent, Grid};
///
/// let grid: Grid = "L.L".parse().unwrap();
/// let mut s = Stabilizer::new(grid, &Adjacent, 4);
/// s.advance().unwrap();
/// assert_eq!(s.state().grid().to_string(), "#.#");
/// assert!(s.advance().unwrap().is_converged());
/// ```
pub struct Stabilizer<'c> {
    state: StabilizerState,
    counter: &'c dyn NeighbourCounter,
    rule: TransitionRule,
    max_rounds: Option<u64>,
    metrics: StabilizeMetrics,
}

impl<'c> Stabilizer<'c> {
    /// Start a run with no round limit.
    ///
    /// `threshold` is taken as-is; use [`with_config`](Self::with_config)
    /// for a validated run.
    pub fn new(grid: Grid, counter: &'c dyn NeighbourCounter, threshold: usize) -> Self {
        Self {
            state: StabilizerState::Running(grid),
            counter,
            rule: TransitionRule::new(threshold),
            max_rounds: None,
            metrics: StabilizeMetrics::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &StabilizerState {
        &self.state
    }

    /// Rounds that have changed the grid so far.
    pub fn rounds(&self) -> u64 {
        self.metrics.rounds
    }

    /// `true` once the fixed point is reached.
    pub fn is_converged(&self) -> bool {
        self.state.is_converged()
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &StabilizeMetrics {
        &self.metrics
    }

    /// Apply one round and return the new state.
    ///
    /// Does nothing once converged. Fails with
    /// [`StabilizeError::RoundLimitExceeded`] if this round changed the grid
    /// and the configured limit is already spent; the state is left at the
    /// last grid within the limit.
    pub fn advance(&mut self) -> Result<&StabilizerState, StabilizeError> {
        let StabilizerState::Running(current) = &self.state else {
            return Ok(&self.state);
        };

        let start = Instant::now();
        let (next, changed) = step_counted(current, self.counter, self.rule.threshold());
        let elapsed_us = start.elapsed().as_micros() as u64;
        debug_assert_eq!(changed == 0, next == *current);

        self.metrics.steps += 1;
        self.metrics.last_step_us = elapsed_us;
        self.metrics.total_us += elapsed_us;

        if changed == 0 {
            self.state = StabilizerState::Converged(next);
            return Ok(&self.state);
        }

        if let Some(limit) = self.max_rounds {
            if self.metrics.rounds >= limit {
                return Err(StabilizeError::RoundLimitExceeded { limit });
            }
        }

        self.metrics.rounds += 1;
        self.metrics.cells_changed += changed as u64;
        tracing::trace!(
            round = self.metrics.rounds,
            changed,
            occupied = next.occupied_count(),
            "seating round"
        );
        self.state = StabilizerState::Running(next);
        Ok(&self.state)
    }

    /// Advance until converged.
    pub fn run(mut self) -> Result<Convergence, StabilizeError> {
        while !self.state.is_converged() {
            self.advance()?;
        }
        let grid = self.state.into_grid();
        let occupied = grid.occupied_count();
        tracing::debug!(
            counter = ?self.counter,
            threshold = self.rule.threshold(),
            rounds = self.metrics.rounds,
            occupied,
            total_us = self.metrics.total_us,
            "seating converged"
        );
        Ok(Convergence {
            grid,
            rounds: self.metrics.rounds,
            occupied,
            metrics: self.metrics,
        })
    }
}

impl Stabilizer<'static> {
    /// Start a run from a validated configuration.
    pub fn with_config(grid: Grid, config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut s = Self::new(grid, config.counter(), config.threshold);
        s.max_rounds = config.max_rounds;
        Ok(s)
    }
}

/// Run `grid` to its fixed point under `config`.
pub fn simulate(grid: &Grid, config: &SimulationConfig) -> Result<Convergence, StabilizeError> {
    Stabilizer::with_config(grid.clone(), config)?.run()
}

/// Step `initial` until a round changes nothing; return the occupied count
/// of that fixed point.
///
/// No round limit is imposed.
pub fn stabilize<C>(initial: &Grid, counter: &C, threshold: usize) -> usize
where
    C: NeighbourCounter + ?Sized,
{
    let mut current = step(initial, counter, threshold);
    if current == *initial {
        return current.occupied_count();
    }
    loop {
        let next = step(&current, counter, threshold);
        if next == current {
            return next.occupied_count();
        }
        current = next;
    }
}
