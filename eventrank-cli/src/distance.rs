//! Distance command implementation for the EventRank CLI.

use std::io::Write;

use clap::Parser;
use eventrank_core::{Location, distance};
use log::warn;

use crate::{CliError, write_output};

/// CLI arguments for the `distance` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "distance",
    about = "Print the great-circle distance between two points in kilometres"
)]
pub(crate) struct DistanceArgs {
    /// Starting point as `lat,lon` in decimal degrees.
    #[arg(long, value_name = "lat,lon", allow_hyphen_values = true)]
    pub(crate) from: Location,
    /// Destination point as `lat,lon` in decimal degrees.
    #[arg(long, value_name = "lat,lon", allow_hyphen_values = true)]
    pub(crate) to: Location,
}

pub(crate) fn run_distance(args: &DistanceArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_distance_with(args, &mut stdout)
}

pub(crate) fn run_distance_with(
    args: &DistanceArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    if !args.from.is_valid() || !args.to.is_valid() {
        warn!("non-finite coordinates supplied; reporting a distance of zero");
    }
    let kilometres = distance(args.from, args.to);
    write_output(writer, &format!("{kilometres:.3}"))
}
