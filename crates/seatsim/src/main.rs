use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use seatsim::engine::{simulate, SimulationConfig};
use seatsim::grid::NeighbourPolicy;
use seatsim::input::load_layout;
use seatsim::solve::{solve_parts, Part};
use tracing::Level;

/// Settle a seat layout and report how many seats end up occupied.
#[derive(Parser, Debug)]
#[command(name = "seatsim", version, about)]
struct Cli {
    /// Seat layout file over '.', 'L' and '#'.
    input: PathBuf,

    /// Solve only this part (1: adjacent, threshold 4; 2: line of sight, threshold 5).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Neighbour policy for a custom run: adjacent or line-of-sight.
    #[arg(long)]
    policy: Option<NeighbourPolicy>,

    /// Vacate threshold for a custom run (1..=8).
    #[arg(long)]
    threshold: Option<usize>,

    /// Fail if the layout is still changing after this many rounds.
    #[arg(long)]
    max_rounds: Option<u64>,

    /// Print the settled layout after each answer.
    #[arg(long)]
    show: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// What a command line asks for.
#[derive(Debug, PartialEq)]
enum Plan {
    /// Preset parts, reported as "Solution for part N".
    Parts(Vec<Part>),
    /// One run with an explicit policy or threshold.
    Custom(SimulationConfig),
}

impl Cli {
    fn plan(&self) -> Plan {
        let part = self.part.and_then(Part::from_number);
        if self.policy.is_none() && self.threshold.is_none() {
            return Plan::Parts(part.map_or_else(|| Part::ALL.to_vec(), |p| vec![p]));
        }
        let mut config = part.unwrap_or(Part::One).config();
        if let Some(policy) = self.policy {
            config = config.with_policy(policy);
        }
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        config.max_rounds = self.max_rounds;
        Plan::Custom(config)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let grid = load_layout(&cli.input)?;

    match cli.plan() {
        Plan::Parts(parts) => {
            let solutions =
                solve_parts(&grid, &parts, cli.max_rounds).context("simulation did not settle")?;
            for solution in solutions {
                println!(
                    "Solution for part {}: {}",
                    solution.part.number(),
                    solution.answer()
                );
                if cli.show {
                    println!("{}", solution.convergence.grid);
                }
            }
        }
        Plan::Custom(config) => {
            let done = simulate(&grid, &config).context("simulation did not settle")?;
            println!("Occupied seats: {}", done.occupied);
            if cli.show {
                println!("{}", done.grid);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("seatsim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_plan_solves_both_parts() {
        assert_eq!(cli(&["in.txt"]).plan(), Plan::Parts(vec![Part::One, Part::Two]));
    }

    #[test]
    fn part_flag_selects_one_part() {
        assert_eq!(cli(&["in.txt", "--part", "2"]).plan(), Plan::Parts(vec![Part::Two]));
        assert!(Cli::try_parse_from(["seatsim", "in.txt", "--part", "3"]).is_err());
    }

    #[test]
    fn policy_flag_makes_custom_run() {
        let plan = cli(&["in.txt", "--policy", "line-of-sight", "--threshold", "4"]).plan();
        assert_eq!(
            plan,
            Plan::Custom(
                SimulationConfig::adjacent()
                    .with_policy(NeighbourPolicy::LineOfSight)
                    .with_threshold(4)
            )
        );
    }

    #[test]
    fn custom_run_starts_from_selected_part() {
        let plan = cli(&["in.txt", "--part", "2", "--threshold", "6", "--max-rounds", "50"]).plan();
        assert_eq!(
            plan,
            Plan::Custom(
                SimulationConfig::line_of_sight()
                    .with_threshold(6)
                    .with_max_rounds(50)
            )
        );
    }

    #[test]
    fn unknown_policy_rejected() {
        assert!(Cli::try_parse_from(["seatsim", "in.txt", "--policy", "diagonal"]).is_err());
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(cli(&["in.txt"]).log_level(), Level::WARN);
        assert_eq!(cli(&["in.txt", "-vv"]).log_level(), Level::DEBUG);
        assert_eq!(cli(&["in.txt", "-vvvv"]).log_level(), Level::TRACE);
    }
}
