//! Outcast detection
//!
//! Given a list of nouns, the outcast is the one least related to the
//! others: the noun whose summed distance to every other noun is largest.

use super::Taxonomy;
use crate::errors::{Result, SapError};

/// Finds the odd one out among a list of nouns
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> Outcast<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Return the outcast of `nouns`
    ///
    /// Ties go to the noun listed first. Needs at least two nouns, all known
    /// to the taxonomy, and every pair must share an ancestor.
    pub fn outcast<'n>(&self, nouns: &[&'n str]) -> Result<&'n str> {
        if nouns.len() < 2 {
            return Err(SapError::invalid_argument(format!(
                "outcast needs at least two nouns, got {}",
                nouns.len()
            )));
        }

        let mut totals = vec![0usize; nouns.len()];
        for i in 0..nouns.len() {
            for j in (i + 1)..nouns.len() {
                let d = self.taxonomy.distance(nouns[i], nouns[j])?;
                if d < 0 {
                    return Err(SapError::invalid_argument(format!(
                        "'{}' and '{}' share no common ancestor",
                        nouns[i], nouns[j]
                    )));
                }
                totals[i] += d as usize;
                totals[j] += d as usize;
            }
        }

        let mut best = 0;
        for (i, &total) in totals.iter().enumerate() {
            if total > totals[best] {
                best = i;
            }
        }

        log::debug!("Outcast of {:?}: {} (distances {:?})", nouns, nouns[best], totals);
        Ok(nouns[best])
    }
}
