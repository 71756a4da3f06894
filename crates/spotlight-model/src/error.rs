//! Error types for corpus loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a corpus snapshot from disk.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failed to read a corpus file.
    #[error("failed to read corpus file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse JSON corpus data.
    #[error("failed to parse corpus file {path}: {source}")]
    ParseJson {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON parse error.
        source: serde_json::Error,
    },
}
