//! Error types for wordnet_sap
//!
//! This module defines the error types used throughout the library.
//! Every failure is surfaced to the caller; the only sentinel value the
//! library produces is the "no common ancestor" answer, which is a computed
//! result rather than an error.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SapError>;

/// Main error type for wordnet_sap
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SapError {
    /// A required input was missing or empty
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A vertex id fell outside `[0, vertex_count)`
    #[error("Vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    OutOfRange { vertex: usize, vertex_count: usize },

    /// A queried word is not a noun of the taxonomy
    #[error("Unknown word: '{word}'")]
    UnknownWord { word: String },

    /// The hypernym relation is not a usable rooted DAG
    #[error("Invalid hierarchy: {message}")]
    InvalidHierarchy { message: String },

    /// A record of an input table could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Reading an input source failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SapError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::OutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Create an unknown word error
    pub fn unknown_word(word: impl Into<String>) -> Self {
        Self::UnknownWord { word: word.into() }
    }

    /// Create an invalid hierarchy error
    pub fn invalid_hierarchy(message: impl Into<String>) -> Self {
        Self::InvalidHierarchy {
            message: message.into(),
        }
    }

    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was caused by a word missing from the taxonomy
    pub fn is_unknown_word(&self) -> bool {
        matches!(self, Self::UnknownWord { .. })
    }

    /// Check if this error was caused by a vertex id outside the graph
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<std::io::Error> for SapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SapError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
