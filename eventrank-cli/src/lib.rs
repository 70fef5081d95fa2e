//! Command-line interface for ranking events with EventRank.
//!
//! Two subcommands are exposed:
//! - `recommend` loads a user, candidate events and an optional similarity
//!   map from JSON files and prints the ranked events as JSON.
//! - `distance` prints the great-circle distance between two `lat,lon`
//!   points in kilometres.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod distance;
mod error;
mod fs;
mod recommend;

use distance::{DistanceArgs, run_distance};
pub use error::CliError;
use recommend::{RecommendArgs, run_recommend};

const ARG_RECOMMEND_USER: &str = "user";
const ARG_RECOMMEND_EVENTS: &str = "events";
const ARG_RECOMMEND_SIMILARITY: &str = "similarity";
const ARG_RECOMMEND_LIMIT: &str = "limit";
const ARG_RECOMMEND_WEIGHTS: &str = "weights";
const ARG_RECOMMEND_EXPLAIN: &str = "explain";
const ENV_RECOMMEND_USER: &str = "EVENTRANK_CMDS_RECOMMEND_USER";
const ENV_RECOMMEND_EVENTS: &str = "EVENTRANK_CMDS_RECOMMEND_EVENTS";

/// Run the EventRank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] describing the first failure encountered.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Distance(args) => run_distance(&args),
    }
}

/// Write `payload` followed by a newline.
fn write_output(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "eventrank",
    about = "Rank candidate events for a user and measure distances between places",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate events for a user.
    Recommend(RecommendArgs),
    /// Measure the great-circle distance between two points.
    Distance(DistanceArgs),
}

#[cfg(test)]
mod tests;
