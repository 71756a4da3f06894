//! Implementation of `spotlight search`.

use std::process::ExitCode;

use chrono::Utc;
use spotlight_highlight::{MatchHighlighter, dim};
use spotlight_query::NormalizedQuery;
use spotlight_search::evaluate_query;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{self, JsonSearchOutput, JsonTagsOutput},
};

/// Evaluates one query and prints ranked results.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let corpus = match ctx.corpus(cmd.common.corpus.as_deref()) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let term = cmd.term.as_deref().unwrap_or("");
    let Some(query) = NormalizedQuery::normalize(term, cmd.tag.as_deref()) else {
        // Empty query: fall back to the tag-browsing view.
        let tags = corpus.distinct_tags();
        if cmd.common.json {
            output::print_json(&JsonTagsOutput { tags: &tags });
        } else {
            println!("{}", dim("Empty query; showing all tags."));
            output::print_tags(&tags);
        }
        return ExitCode::SUCCESS;
    };

    let results = evaluate_query(&corpus, &query, cmd.scope, Utc::now(), &ctx.config.weights);

    if cmd.common.json {
        output::print_json(&JsonSearchOutput {
            query: query.text(),
            scope: cmd.scope,
            has_any_results: results.has_any_results(),
            results: &results,
        });
    } else {
        let highlighter = query
            .highlight_term()
            .map_or_else(MatchHighlighter::inert, MatchHighlighter::new);
        output::print_results(&results, &highlighter);
    }
    ExitCode::SUCCESS
}
