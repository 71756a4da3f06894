//! CLI support for the `spotlight` binary.

pub mod args;
pub mod commands;
pub mod config;
pub mod context;
pub mod output;

pub use context::CommandContext;
