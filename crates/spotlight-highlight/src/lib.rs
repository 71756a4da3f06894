//! Match highlighting and terminal colors for spotlight.
//!
//! This crate splits display text into plain/matched segments for a search
//! query, so callers can render matched substrings distinctly, and provides
//! the styled terminal output helpers used by the CLI.
//!
//! The query is treated as a literal: every regex metacharacter is escaped
//! before the pattern is built, so arbitrary user input can never make
//! highlighting fail at render time.

#![warn(missing_docs)]

use regex::RegexBuilder;
use serde::Serialize;

/// A span of display text, flagged when it matched the query.
///
/// Segments preserve the source text's original casing even when the query
/// was typed in a different case; concatenating the `text` of every segment
/// reconstructs the input string exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The span of source text.
    pub text: String,
    /// True if this span matched the query.
    pub matched: bool,
}

/// Splits display text into plain/matched segments for one query.
///
/// Build one per query evaluation and apply it to each displayed field.
/// An empty query produces an inert highlighter that returns the whole
/// input as a single unmatched segment.
#[derive(Debug, Clone)]
pub struct MatchHighlighter {
    /// Compiled case-insensitive literal pattern; `None` means inert.
    pattern: Option<regex::Regex>,
}

impl MatchHighlighter {
    /// Creates a highlighter for the given query text.
    ///
    /// The query is regex-escaped and compiled case-insensitively. An empty
    /// query yields an inert highlighter; so does a pattern that exceeds the
    /// regex size limit (rather than propagating an error into rendering).
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok();
        Self { pattern }
    }

    /// Creates an inert highlighter that never marks anything as matched.
    pub fn inert() -> Self {
        Self { pattern: None }
    }

    /// Splits `text` into alternating plain/matched segments.
    ///
    /// Empty segments are never produced; an input with no matches (or an
    /// inert highlighter) yields a single unmatched segment, and an empty
    /// input yields no segments.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let Some(pattern) = &self.pattern else {
            return unsegmented(text);
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                segments.push(Segment {
                    text: text[last..m.start()].to_string(),
                    matched: false,
                });
            }
            segments.push(Segment {
                text: m.as_str().to_string(),
                matched: true,
            });
            last = m.end();
        }
        if last < text.len() {
            segments.push(Segment {
                text: text[last..].to_string(),
                matched: false,
            });
        }
        segments
    }

    /// Renders `text` with matched spans wrapped in bold ANSI styling.
    pub fn render(&self, text: &str) -> String {
        self.segments(text)
            .into_iter()
            .map(|seg| {
                if seg.matched {
                    format!("{}{}{}", colors::BOLD, seg.text, colors::RESET)
                } else {
                    seg.text
                }
            })
            .collect()
    }
}

/// Returns the whole input as one unmatched segment (or nothing if empty).
fn unsegmented(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    vec![Segment {
        text: text.to_string(),
        matched: false,
    }]
}

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}
