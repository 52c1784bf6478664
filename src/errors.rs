// Error types for paddock

use crate::dataset::Collection;
use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum PaddockError {
    // Errors while fetching and parsing the dataset collections
    #[snafu(display("Failed to read collection {collection}: {source}"))]
    CollectionRead {
        collection: Collection,
        source: io::Error,
    },
    #[snafu(display("Failed to parse collection {collection}: {source}"))]
    CollectionParse {
        collection: Collection,
        source: serde_json::Error,
    },
    #[snafu(display("No document available for collection {collection}"))]
    CollectionMissing { collection: Collection },
    #[snafu(display("Could not start the dataset loader runtime"))]
    RuntimeStart { source: io::Error },

    // User input validation errors
    #[snafu(display("Invalid filter value for {field}: {reason}"))]
    InvalidFilter { field: String, reason: String },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // Chart payload export errors
    #[snafu(display("Error writing chart payloads"))]
    ExportWriteError { source: io::Error },
    #[snafu(display("Error serializing chart payload for {target}"))]
    ExportSerializeError {
        target: String,
        source: serde_json::Error,
    },

    // UI errors
    #[snafu(display("Dashboard viewer failed: {reason}"))]
    ViewerError { reason: String },
}

impl PaddockError {
    /// The collection a load failure refers to, if any.
    pub fn collection(&self) -> Option<Collection> {
        match self {
            PaddockError::CollectionRead { collection, .. }
            | PaddockError::CollectionParse { collection, .. }
            | PaddockError::CollectionMissing { collection } => Some(*collection),
            _ => None,
        }
    }

    pub(crate) fn invalid_filter(field: &str, reason: impl Into<String>) -> Self {
        PaddockError::InvalidFilter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
