//! Command-line interface for the Courier routing engine.
//!
//! `courier solve` runs one optimisation request from a JSON file and
//! `courier compare` runs every tour algorithm on the same stops. Options
//! are layered by `ortho_config`: defaults, configuration files, `COURIER_*`
//! environment variables, then command-line flags.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod compare;
mod error;
mod output;
mod request;
mod solve;

pub use error::CliError;

use compare::{CompareArgs, run_compare};
use solve::{SolveArgs, run_solve};

pub(crate) const ARG_REQUEST: &str = "request-path";
pub(crate) const ARG_ALGORITHM: &str = "algorithm";
pub(crate) const ARG_CAPACITY: &str = "capacity";
pub(crate) const ARG_USE_CAPACITY: &str = "use-capacity";
pub(crate) const ARG_EXACT_CEILING: &str = "exact-ceiling";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_SOLVE_REQUEST: &str = "COURIER_CMDS_SOLVE_REQUEST_PATH";
pub(crate) const ENV_COMPARE_REQUEST: &str = "COURIER_CMDS_COMPARE_REQUEST_PATH";

/// Run the Courier CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration cannot be
/// resolved, when the request file cannot be read or fails validation, or
/// when the result cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Compare(args) => run_compare(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Delivery route optimisation over weighted stops",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Optimise a single request and print the tour.
    Solve(SolveArgs),
    /// Run every tour algorithm on a request and compare them.
    Compare(CompareArgs),
}

#[cfg(test)]
mod tests;
