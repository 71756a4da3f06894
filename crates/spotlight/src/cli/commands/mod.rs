//! Command implementations and dispatch.

pub mod search;
pub mod tags;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Tags(cmd) => tags::run(ctx, &cmd),
    }
}
