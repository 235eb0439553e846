//! WordNet-style taxonomy index
//!
//! Loads the concept and hypernym tables once, builds the hypernym digraph,
//! rejects it if it contains a directed cycle, and translates noun queries
//! into vertex-set queries for the [`Sap`] engine. Everything is read-only
//! after construction.

pub mod loader;
pub mod outcast;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::errors::{Result, SapError};
use crate::graph::{find_cycle, Digraph, DigraphBuilder, MAX_VERTEX_COUNT};
use crate::sap::Sap;
use crate::types::{AncestralPath, Synset, TaxonomyConfig, Vertex};

pub use loader::HypernymRecord;
pub use outcast::Outcast;

/// A loaded taxonomy: synsets, the noun index and the SAP engine
#[derive(Debug, Clone)]
pub struct Taxonomy {
    /// Synset per vertex; `None` for gaps in the id range, which never carry
    /// an edge
    synsets: Vec<Option<Synset>>,
    /// Noun -> ids of every synset it is a member of
    nouns: FxHashMap<String, Vec<Vertex>>,
    sap: Sap,
    config: TaxonomyConfig,
}

impl Taxonomy {
    /// Load a taxonomy from a concept table and a hypernym table with the
    /// default configuration
    pub fn new<S: BufRead, H: BufRead>(synsets: S, hypernyms: H) -> Result<Self> {
        Self::from_readers(synsets, hypernyms, TaxonomyConfig::default())
    }

    /// Load a taxonomy from two readers
    pub fn from_readers<S: BufRead, H: BufRead>(
        synsets: S,
        hypernyms: H,
        config: TaxonomyConfig,
    ) -> Result<Self> {
        config.validate()?;
        let synsets = loader::read_synsets(synsets, &config)?;
        let hypernyms = loader::read_hypernyms(hypernyms, &config)?;
        Self::from_records(synsets, hypernyms, config)
    }

    /// Load a taxonomy from two files
    pub fn from_paths(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
        config: TaxonomyConfig,
    ) -> Result<Self> {
        let synsets_path = synsets.as_ref();
        let hypernyms_path = hypernyms.as_ref();
        log::info!(
            "Loading taxonomy from {} and {}",
            synsets_path.display(),
            hypernyms_path.display()
        );

        let synsets = BufReader::new(open(synsets_path)?);
        let hypernyms = BufReader::new(open(hypernyms_path)?);
        Self::from_readers(synsets, hypernyms, config)
    }

    /// Build a taxonomy from already parsed records
    ///
    /// The vertex count is the largest synset id plus one, at most
    /// [`MAX_VERTEX_COUNT`]. Fails with `OutOfRange` on a synset id beyond
    /// that limit or a hypernym id outside the vertex range,
    /// `InvalidArgument` on duplicate synset ids or hypernym ids with no
    /// concept record, and `InvalidHierarchy` if the hypernym relation has a
    /// cycle (or several roots, when the config asks for a single one).
    pub fn from_records(
        synsets: Vec<Synset>,
        hypernyms: Vec<HypernymRecord>,
        config: TaxonomyConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut vertex_count = 0;
        for synset in &synsets {
            if synset.id >= MAX_VERTEX_COUNT {
                return Err(SapError::out_of_range(synset.id, MAX_VERTEX_COUNT));
            }
            vertex_count = vertex_count.max(synset.id + 1);
        }
        let mut by_id: Vec<Option<Synset>> = vec![None; vertex_count];
        let mut nouns: FxHashMap<String, Vec<Vertex>> = FxHashMap::default();

        for synset in synsets {
            let id = synset.id;
            if by_id[id].is_some() {
                return Err(SapError::invalid_argument(format!("duplicate synset id {}", id)));
            }
            for word in &synset.words {
                let ids = nouns.entry(word.clone()).or_default();
                if ids.last() != Some(&id) {
                    ids.push(id);
                }
            }
            by_id[id] = Some(synset);
        }

        let labelled = |id: Vertex| -> Result<()> {
            match by_id.get(id) {
                Some(Some(_)) => Ok(()),
                Some(None) => Err(SapError::invalid_argument(format!(
                    "hypernym table names synset {} which is not in the concept table",
                    id
                ))),
                None => Err(SapError::out_of_range(id, vertex_count)),
            }
        };

        let mut builder = DigraphBuilder::new(vertex_count);
        for (child, parents) in hypernyms {
            labelled(child)?;
            for parent in parents {
                labelled(parent)?;
                builder.add_edge(child, parent)?;
            }
        }
        let graph = builder.build();

        if let Some(cycle) = find_cycle(&graph) {
            log::warn!("Rejecting taxonomy, hypernym cycle {:?}", cycle);
            return Err(SapError::invalid_hierarchy(format!(
                "hypernym relation contains the cycle {}",
                format_cycle(&cycle)
            )));
        }

        let roots: Vec<Vertex> = graph
            .roots()
            .into_iter()
            .filter(|&v| by_id[v].is_some())
            .collect();
        if config.require_single_root && roots.len() != 1 {
            return Err(SapError::invalid_hierarchy(format!(
                "expected exactly one root, found {}",
                roots.len()
            )));
        }

        log::info!(
            "Loaded taxonomy: {} synsets, {} nouns, {} hypernym edges, {} root(s)",
            by_id.iter().filter(|s| s.is_some()).count(),
            nouns.len(),
            graph.edge_count(),
            roots.len()
        );

        let sap = Sap::from_shared(Arc::new(graph)).with_parallel_threshold(config.parallel_threshold);
        Ok(Self {
            synsets: by_id,
            nouns,
            sap,
            config,
        })
    }

    /// All nouns, sorted
    pub fn nouns(&self) -> Vec<&str> {
        let mut nouns: Vec<&str> = self.nouns.keys().map(String::as_str).collect();
        nouns.sort_unstable();
        nouns
    }

    /// Is `word` a noun of this taxonomy?
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Number of distinct nouns
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Number of synsets read from the concept table
    pub fn concept_count(&self) -> usize {
        self.synsets.iter().filter(|s| s.is_some()).count()
    }

    /// The synset with the given id
    pub fn synset(&self, id: Vertex) -> Option<&Synset> {
        self.synsets.get(id).and_then(Option::as_ref)
    }

    /// Ids of every synset containing `word`
    pub fn synsets_of(&self, word: &str) -> Result<&[Vertex]> {
        self.nouns
            .get(word)
            .map(Vec::as_slice)
            .ok_or_else(|| SapError::unknown_word(word))
    }

    /// Synsets with no hypernym
    pub fn roots(&self) -> Vec<Vertex> {
        self.sap
            .graph()
            .roots()
            .into_iter()
            .filter(|&v| self.synset(v).is_some())
            .collect()
    }

    /// The hypernym digraph
    pub fn graph(&self) -> &Digraph {
        self.sap.graph()
    }

    /// The SAP engine answering this taxonomy's queries
    pub fn sap_engine(&self) -> &Sap {
        &self.sap
    }

    /// The configuration this taxonomy was loaded with
    pub fn config(&self) -> &TaxonomyConfig {
        &self.config
    }

    /// Shortest ancestral path between any synset of `a` and any synset of `b`
    pub fn shortest(&self, a: &str, b: &str) -> Result<Option<AncestralPath>> {
        let vs = self.synsets_of(a)?;
        let ws = self.synsets_of(b)?;
        self.sap.shortest_sets(vs, ws)
    }

    /// Semantic distance between two nouns; `-1` if they share no ancestor
    pub fn distance(&self, a: &str, b: &str) -> Result<isize> {
        Ok(AncestralPath::length_or_sentinel(self.shortest(a, b)?))
    }

    /// Label of the common ancestor on a shortest ancestral path between two
    /// nouns, `None` if they share no ancestor
    pub fn sap(&self, a: &str, b: &str) -> Result<Option<&str>> {
        Ok(self
            .shortest(a, b)?
            .and_then(|p| self.synset(p.ancestor))
            .map(|s| s.label.as_str()))
    }

    /// Synset ids along a shortest ancestral path from `a` up to the common
    /// ancestor and down to `b`
    pub fn path(&self, a: &str, b: &str) -> Result<Option<Vec<Vertex>>> {
        let vs = self.synsets_of(a)?;
        let ws = self.synsets_of(b)?;
        self.sap.path(vs, ws)
    }

    /// Distances for many noun pairs, each with its own result
    ///
    /// Runs on the rayon pool once the batch reaches the configured
    /// `parallel_threshold`.
    pub fn distances_batch<S: AsRef<str> + Sync>(&self, pairs: &[(S, S)]) -> Vec<Result<isize>> {
        let query = |(a, b): &(S, S)| self.distance(a.as_ref(), b.as_ref());
        if pairs.len() < self.config.parallel_threshold {
            pairs.iter().map(query).collect()
        } else {
            pairs.par_iter().map(query).collect()
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| SapError::Io {
        message: format!("{}: {}", path.display(), e),
    })
}

fn format_cycle(cycle: &[Vertex]) -> String {
    cycle
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
