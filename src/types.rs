//! Core types for wordnet_sap
//!
//! This module defines the fundamental data structures used throughout the library,
//! including vertex ids, ancestral path results, synset records, and configuration.

use crate::errors::{Result, SapError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Vertices
// ============================================================================

/// A vertex of the hypernym digraph, one per concept (synset).
pub type Vertex = usize;

/// Sentinel returned by the integer-valued queries when the two sides share
/// no common ancestor.
pub const NO_PATH: isize = -1;

// ============================================================================
// Ancestral Path
// ============================================================================

/// The answer to a shortest ancestral path query.
///
/// `length` is the sum of the BFS distances from each side to `ancestor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AncestralPath {
    /// Total number of edges on the ancestral path
    pub length: usize,
    /// The common ancestor achieving `length`
    pub ancestor: Vertex,
}

impl AncestralPath {
    /// Create a new result
    pub fn new(length: usize, ancestor: Vertex) -> Self {
        Self { length, ancestor }
    }

    /// Length as a signed integer, mapping "no path" to [`NO_PATH`]
    pub fn length_or_sentinel(path: Option<Self>) -> isize {
        path.map_or(NO_PATH, |p| p.length as isize)
    }

    /// Ancestor as a signed integer, mapping "no path" to [`NO_PATH`]
    pub fn ancestor_or_sentinel(path: Option<Self>) -> isize {
        path.map_or(NO_PATH, |p| p.ancestor as isize)
    }
}

// ============================================================================
// Synset
// ============================================================================

/// One record of the concept table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    /// Concept id (vertex of the hypernym digraph)
    pub id: Vertex,
    /// The raw member-word field, used as the human-readable label
    pub label: String,
    /// Member words (nouns) of this synset
    pub words: Vec<String>,
    /// Remaining free-text fields (definition and examples)
    pub gloss: String,
}

impl Synset {
    /// Create a synset from its label, splitting member words on
    /// `synonym_separator` the same way the concept-table loader does
    pub fn new(
        id: Vertex,
        label: impl Into<String>,
        gloss: impl Into<String>,
        synonym_separator: char,
    ) -> Self {
        let label = label.into();
        let words = label
            .split(synonym_separator)
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            id,
            label,
            words,
            gloss: gloss.into(),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for loading and querying a taxonomy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Separator between the columns of both input tables
    #[serde(default = "default_field_separator")]
    pub field_separator: char,
    /// Separator between member words of a synset
    #[serde(default = "default_synonym_separator")]
    pub synonym_separator: char,
    /// Reject hierarchies with more than one root
    #[serde(default)]
    pub require_single_root: bool,
    /// Batch size at which queries are spread over the rayon pool
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_field_separator() -> char {
    ','
}

fn default_synonym_separator() -> char {
    ' '
}

fn default_parallel_threshold() -> usize {
    64
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            field_separator: default_field_separator(),
            synonym_separator: default_synonym_separator(),
            require_single_root: false,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl TaxonomyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.field_separator == self.synonym_separator {
            return Err(SapError::invalid_argument(format!(
                "field_separator and synonym_separator must differ, both are {:?}",
                self.field_separator
            )));
        }

        for (name, sep) in [
            ("field_separator", self.field_separator),
            ("synonym_separator", self.synonym_separator),
        ] {
            if sep == '\n' || sep == '\r' {
                return Err(SapError::invalid_argument(format!(
                    "{} must not be a line break",
                    name
                )));
            }
        }

        Ok(())
    }

    pub fn with_field_separator(mut self, separator: char) -> Self {
        self.field_separator = separator;
        self
    }

    pub fn with_synonym_separator(mut self, separator: char) -> Self {
        self.synonym_separator = separator;
        self
    }

    pub fn with_require_single_root(mut self, require: bool) -> Self {
        self.require_single_root = require;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
