//! Error type surfaced by the index loader.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading or decoding a search index document.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The document could not be decoded into the expected shape.
    ///
    /// Decoding is all-or-nothing: invalid JSON, a missing `docs` array, or a
    /// record missing a required field rejects the whole document. There is
    /// no partial index.
    #[error("malformed search index: {reason}")]
    MalformedIndex {
        /// What made the document undecodable.
        reason: String,
    },

    /// The index file could not be read.
    #[error("failed to read search index {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedIndex {
            reason: reason.into(),
        }
    }
}
