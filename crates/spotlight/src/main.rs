//! Entry point for the `spotlight` binary.

use std::process::ExitCode;

use clap::Parser;
use spotlight::cli::{CommandContext, args::Cli, commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    commands::run(cli.command, &ctx)
}
