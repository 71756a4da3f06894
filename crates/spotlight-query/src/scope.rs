//! The scope filter selecting which entity types participate in a search.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which entity types a query evaluation should produce results for.
///
/// `Clients` and `Files` are accepted but always yield empty results; they
/// are reserved for corpus types the application declares but does not
/// search yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Search every entity type.
    #[default]
    All,
    /// Shows only.
    Shows,
    /// Tasks only.
    Tasks,
    /// Ideas only.
    Ideas,
    /// Reserved; always empty.
    Clients,
    /// Reserved; always empty.
    Files,
}

/// Error returned when parsing an unrecognized scope name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scope '{input}' (expected one of: all, shows, tasks, ideas, clients, files)")]
pub struct ScopeParseError {
    /// The string that failed to parse.
    pub input: String,
}

impl FromStr for Scope {
    type Err = ScopeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "shows" => Ok(Self::Shows),
            "tasks" => Ok(Self::Tasks),
            "ideas" => Ok(Self::Ideas),
            "clients" => Ok(Self::Clients),
            "files" => Ok(Self::Files),
            other => Err(ScopeParseError {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Shows => "shows",
            Self::Tasks => "tasks",
            Self::Ideas => "ideas",
            Self::Clients => "clients",
            Self::Files => "files",
        };
        write!(f, "{name}")
    }
}

impl Scope {
    /// Returns true if the given entity bucket participates under this scope.
    pub fn includes(self, other: Self) -> bool {
        self == Self::All || self == other
    }
}
