//! The two-part puzzle: adjacent rules, then line-of-sight rules.

use std::fmt;

use seatsim_engine::{simulate, Convergence, SimulationConfig, StabilizeError};
use seatsim_grid::Grid;

/// Which rule set a solution is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// Adjacent visibility, threshold 4.
    One,
    /// Line-of-sight visibility, threshold 5.
    Two,
}

impl Part {
    /// Both parts, in order.
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    /// The preset configuration for this part.
    pub fn config(self) -> SimulationConfig {
        match self {
            Part::One => SimulationConfig::adjacent(),
            Part::Two => SimulationConfig::line_of_sight(),
        }
    }

    /// `1` or `2`.
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    /// The part with the given number, if any.
    pub fn from_number(n: u8) -> Option<Part> {
        match n {
            1 => Some(Part::One),
            2 => Some(Part::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part {}", self.number())
    }
}

/// A settled run for one part.
#[derive(Clone, Debug)]
pub struct PartSolution {
    /// The part solved.
    pub part: Part,
    /// The fixed point and run metrics.
    pub convergence: Convergence,
}

impl PartSolution {
    /// Occupied seats at the fixed point: the part's answer.
    pub fn answer(&self) -> usize {
        self.convergence.occupied
    }
}

/// Settle `grid` under each of `parts`, applying `max_rounds` to every run.
pub fn solve_parts(
    grid: &Grid,
    parts: &[Part],
    max_rounds: Option<u64>,
) -> Result<Vec<PartSolution>, StabilizeError> {
    parts
        .iter()
        .map(|&part| {
            let mut config = part.config();
            config.max_rounds = max_rounds;
            let convergence = simulate(grid, &config)?;
            tracing::info!(
                %part,
                occupied = convergence.occupied,
                rounds = convergence.rounds,
                "part solved"
            );
            Ok(PartSolution { part, convergence })
        })
        .collect()
}
