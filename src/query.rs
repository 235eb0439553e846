//! JSON interface for batch queries
//!
//! A request lists noun pairs and, optionally, groups of nouns to find the
//! outcast of:
//!
//! ```json
//! {"queries": [{"a": "dog", "b": "cat"}], "outcasts": [["dog", "cat", "table"]]}
//! ```
//!
//! Each query is answered independently; a failing query carries an `error`
//! string instead of failing the whole batch.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::taxonomy::{Outcast, Taxonomy};
use crate::types::NO_PATH;

/// A pair of nouns to relate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounPair {
    pub a: String,
    pub b: String,
}

/// Input batch from JSON
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub queries: Vec<NounPair>,
    #[serde(default)]
    pub outcasts: Vec<Vec<String>>,
}

/// Answer to one noun pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairAnswer {
    pub a: String,
    pub b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<isize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancestor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Answer to one outcast group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcastAnswer {
    pub nouns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Output batch for JSON
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryResponse {
    pub answers: Vec<PairAnswer>,
    pub outcasts: Vec<OutcastAnswer>,
}

/// Answer a single noun pair
pub fn answer_pair(taxonomy: &Taxonomy, pair: &NounPair) -> PairAnswer {
    let mut answer = PairAnswer {
        a: pair.a.clone(),
        b: pair.b.clone(),
        distance: None,
        ancestor: None,
        error: None,
    };

    match taxonomy.shortest(&pair.a, &pair.b) {
        Ok(Some(path)) => {
            answer.distance = Some(path.length as isize);
            answer.ancestor = taxonomy.synset(path.ancestor).map(|s| s.label.clone());
        }
        Ok(None) => answer.distance = Some(NO_PATH),
        Err(e) => answer.error = Some(e.to_string()),
    }
    answer
}

/// Answer a single outcast group
pub fn answer_outcast(taxonomy: &Taxonomy, nouns: &[String]) -> OutcastAnswer {
    let words: Vec<&str> = nouns.iter().map(String::as_str).collect();
    let (outcast, error) = match Outcast::new(taxonomy).outcast(&words) {
        Ok(word) => (Some(word.to_string()), None),
        Err(e) => (None, Some(e.to_string())),
    };
    OutcastAnswer {
        nouns: nouns.to_vec(),
        outcast,
        error,
    }
}

/// Answer a whole request
///
/// Pair queries run on the rayon pool once there are at least the
/// taxonomy's `parallel_threshold` of them. Answers keep request order.
pub fn run(taxonomy: &Taxonomy, request: &QueryRequest) -> QueryResponse {
    let answers: Vec<PairAnswer> = if request.queries.len() < taxonomy.config().parallel_threshold {
        request
            .queries
            .iter()
            .map(|pair| answer_pair(taxonomy, pair))
            .collect()
    } else {
        request
            .queries
            .par_iter()
            .map(|pair| answer_pair(taxonomy, pair))
            .collect()
    };

    let outcasts: Vec<OutcastAnswer> = request
        .outcasts
        .iter()
        .map(|nouns| answer_outcast(taxonomy, nouns))
        .collect();

    QueryResponse { answers, outcasts }
}

/// Parse a JSON request, answer it and serialize the response
///
/// Only malformed JSON is an error; per-query failures are reported inside
/// the response.
pub fn run_json(taxonomy: &Taxonomy, json_input: &str) -> Result<String> {
    let request: QueryRequest = serde_json::from_str(json_input)?;
    log::debug!(
        "JSON batch with {} pair queries and {} outcast groups",
        request.queries.len(),
        request.outcasts.len()
    );
    let response = run(taxonomy, &request);
    Ok(serde_json::to_string(&response)?)
}
