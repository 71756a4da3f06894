//! Rendering and JSON serialization for CLI output.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use spotlight_highlight::{MatchHighlighter, dim, header, subheader};
use spotlight_query::Scope;
use spotlight_search::{Hit, SearchResults};

/// JSON output for `spotlight search`.
#[derive(Serialize)]
pub struct JsonSearchOutput<'a> {
    /// The normalized query that was evaluated.
    pub query: &'a str,
    /// The scope the evaluation ran under.
    pub scope: Scope,
    /// Whether any bucket holds a hit.
    pub has_any_results: bool,
    /// The bucketed results.
    pub results: &'a SearchResults,
}

/// JSON output for `spotlight tags` and the empty-query fallback.
#[derive(Serialize)]
pub struct JsonTagsOutput<'a> {
    /// All distinct tags, sorted.
    pub tags: &'a [String],
}

/// Prints bucketed search results as sectioned tables.
pub fn print_results(results: &SearchResults, highlighter: &MatchHighlighter) {
    if !results.has_any_results() {
        println!("{}", dim("No results."));
        return;
    }

    print_section("Top Matches", &results.top_matches, highlighter);
    print_section("Shows", &results.shows, highlighter);
    print_section("Tasks", &results.tasks, highlighter);
    print_section("Ideas", &results.ideas, highlighter);
}

/// Prints one result section, skipping empty buckets.
fn print_section(title: &str, hits: &[Hit], highlighter: &MatchHighlighter) {
    if hits.is_empty() {
        return;
    }

    println!("{}", header(title));
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Context", "Badges", "Score"]);
    for hit in hits {
        let badges = hit
            .badges
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            highlighter.render(&hit.title),
            hit.subtitle.clone().unwrap_or_default(),
            badges,
            hit.score.to_string(),
        ]);
    }
    println!("{table}");
    println!();
}

/// Prints the distinct-tag browsing list.
pub fn print_tags(tags: &[String]) {
    if tags.is_empty() {
        println!("{}", dim("No tags in corpus."));
        return;
    }
    println!("{}", subheader("Tags:"));
    for tag in tags {
        println!("  {tag}");
    }
}

/// Serializes a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: failed to serialize output: {e}"),
    }
}
