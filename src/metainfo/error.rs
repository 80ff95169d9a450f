use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors that can occur when loading or redacting torrent metainfo.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The torrent file contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// A required field is missing from the torrent file.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field has an invalid value or type.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// A node of the v2 file tree is neither a file nor a directory.
    #[error("malformed file tree at {path:?}")]
    MalformedFileTree {
        /// Slash-separated path segments leading to the offending node.
        path: String,
    },

    /// The v2 file tree nests deeper than the walk allows.
    #[error("file tree nesting exceeds {limit} levels")]
    RecursionLimitExceeded { limit: usize },

    /// An I/O error occurred while reading or writing the torrent file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
