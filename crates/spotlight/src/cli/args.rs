//! Clap argument definitions for the `spotlight` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use spotlight_query::Scope;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "spotlight")]
#[command(about = "Global search across shows, tasks, and ideas")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `spotlight` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and print ranked results
    Search(SearchCommand),
    /// List all distinct tags in the corpus
    Tags(TagsCommand),
}

/// Shared corpus/output flags.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to the corpus JSON file (overrides the config file)
    #[arg(short = 'c', long)]
    pub corpus: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `spotlight search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Free-text search term (ignored when --tag is given)
    pub term: Option<String>,

    /// Search by selected tag instead of free text
    #[arg(short = 't', long)]
    pub tag: Option<String>,

    /// Entity types to search [default: all]
    #[arg(short = 's', long, default_value = "all")]
    pub scope: Scope,

    #[command(flatten)]
    /// Corpus and output flags.
    pub common: CommonArgs,
}

/// Arguments for `spotlight tags`.
#[derive(Args, Debug, Clone)]
pub struct TagsCommand {
    #[command(flatten)]
    /// Corpus and output flags.
    pub common: CommonArgs,
}
