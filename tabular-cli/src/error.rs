//! CLI error types

use std::path::PathBuf;

use tabular_lib::error::ChangeError;
use tabular_lib::error::ViewError;

/// Errors that can stop a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not valid JSON for what it should contain.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The view could not be prepared.
    #[error(transparent)]
    View(#[from] ViewError),

    /// The change could not be decoded or applied.
    #[error(transparent)]
    Change(#[from] ChangeError),

    /// The result could not be encoded.
    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    /// The result could not be written.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
