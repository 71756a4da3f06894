//! Implementation of `spotlight tags`.

use std::process::ExitCode;

use crate::cli::{
    args::TagsCommand,
    context::CommandContext,
    output::{self, JsonTagsOutput},
};

/// Lists all distinct tags across the corpus.
pub fn run(ctx: &CommandContext, cmd: &TagsCommand) -> ExitCode {
    let corpus = match ctx.corpus(cmd.common.corpus.as_deref()) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let tags = corpus.distinct_tags();
    if cmd.common.json {
        output::print_json(&JsonTagsOutput { tags: &tags });
    } else {
        output::print_tags(&tags);
    }
    ExitCode::SUCCESS
}
