//! Line-oriented readers for the concept and hypernym tables
//!
//! Concept table, one synset per line:
//!
//! ```text
//! 36,AND_circuit AND_gate,a circuit in a computer that fires only when all of its inputs fire
//! ```
//!
//! Hypernym table, a synset followed by its hypernyms:
//!
//! ```text
//! 164,21012,56099
//! ```
//!
//! Blank lines are ignored. Line numbers in errors are 1-based.

use std::io::BufRead;

use crate::errors::{Result, SapError};
use crate::types::{Synset, TaxonomyConfig, Vertex};

/// A synset id together with the ids of its hypernyms
pub type HypernymRecord = (Vertex, Vec<Vertex>);

/// Read every record of a concept table
pub fn read_synsets<R: BufRead>(reader: R, config: &TaxonomyConfig) -> Result<Vec<Synset>> {
    let mut synsets = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        synsets.push(parse_synset(&line, idx + 1, config)?);
    }
    Ok(synsets)
}

/// Read every record of a hypernym table
pub fn read_hypernyms<R: BufRead>(
    reader: R,
    config: &TaxonomyConfig,
) -> Result<Vec<HypernymRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_hypernyms(&line, idx + 1, config)?);
    }
    Ok(records)
}

/// Parse one concept record: `id, member words, gloss`
///
/// The gloss is everything after the second separator and may itself
/// contain separators.
pub fn parse_synset(line: &str, line_no: usize, config: &TaxonomyConfig) -> Result<Synset> {
    let mut fields = line.splitn(3, config.field_separator);

    let id = parse_id(fields.next().unwrap_or_default(), line_no)?;
    let label = fields
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SapError::parse(line_no, format!("synset {} has no member words", id)))?;
    let gloss = fields.next().unwrap_or_default().trim();

    Ok(Synset::new(id, label, gloss, config.synonym_separator))
}

/// Parse one hypernym record: `id, parent, parent, ...`
///
/// A record without parents is allowed and describes a root.
pub fn parse_hypernyms(line: &str, line_no: usize, config: &TaxonomyConfig) -> Result<HypernymRecord> {
    let mut fields = line.split(config.field_separator);
    let id = parse_id(fields.next().unwrap_or_default(), line_no)?;

    let parents = fields
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| parse_id(f, line_no))
        .collect::<Result<Vec<_>>>()?;

    Ok((id, parents))
}

fn parse_id(field: &str, line_no: usize) -> Result<Vertex> {
    let field = field.trim();
    field
        .parse::<Vertex>()
        .map_err(|e| SapError::parse(line_no, format!("invalid synset id '{}': {}", field, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_synset_with_commas_in_gloss() {
        let config = TaxonomyConfig::default();
        let s = parse_synset(
            "22,Aachen Aken,a city in western Germany; \"the spa of Aachen, Charlemagne's capital\"",
            1,
            &config,
        )
        .unwrap();

        assert_eq!(s.id, 22);
        assert_eq!(s.label, "Aachen Aken");
        assert_eq!(s.words, vec!["Aachen", "Aken"]);
        assert!(s.gloss.contains("Aachen, Charlemagne's"));
    }

    #[test]
    fn test_parse_synset_without_gloss() {
        let s = parse_synset("3,entity", 1, &TaxonomyConfig::default()).unwrap();
        assert_eq!(s.words, vec!["entity"]);
        assert_eq!(s.gloss, "");
    }

    #[test]
    fn test_parse_synset_errors() {
        let config = TaxonomyConfig::default();

        let err = parse_synset("x,dog,gloss", 4, &config).unwrap_err();
        assert!(matches!(err, SapError::Parse { line: 4, .. }));

        let err = parse_synset("-1,dog,gloss", 1, &config).unwrap_err();
        assert!(matches!(err, SapError::Parse { .. }));

        let err = parse_synset("5,,gloss", 2, &config).unwrap_err();
        assert!(err.to_string().contains("no member words"));
    }

    #[test]
    fn test_parse_hypernyms() {
        let config = TaxonomyConfig::default();
        assert_eq!(parse_hypernyms("164,21012,56099", 1, &config).unwrap(), (164, vec![21012, 56099]));
        assert_eq!(parse_hypernyms("38003", 1, &config).unwrap(), (38003, vec![]));
        assert_eq!(parse_hypernyms("7,8,", 1, &config).unwrap(), (7, vec![8]));

        let err = parse_hypernyms("7,eight", 9, &config).unwrap_err();
        assert!(matches!(err, SapError::Parse { line: 9, .. }));
    }

    #[test]
    fn test_read_tables_skip_blank_lines() {
        let config = TaxonomyConfig::default();
        let synsets = read_synsets("0,dog,a dog\n\n1,canine,a canine\n".as_bytes(), &config).unwrap();
        assert_eq!(synsets.len(), 2);
        assert_eq!(synsets[1].id, 1);

        let err = read_synsets("0,dog,a dog\n\nbad\n".as_bytes(), &config).unwrap_err();
        assert!(matches!(err, SapError::Parse { line: 3, .. }));

        let hypernyms = read_hypernyms("0,1\n\n1,2\n".as_bytes(), &config).unwrap();
        assert_eq!(hypernyms, vec![(0, vec![1]), (1, vec![2])]);
    }

    #[test]
    fn test_custom_separators() {
        let config = TaxonomyConfig::default()
            .with_field_separator('\t')
            .with_synonym_separator('|');
        let s = parse_synset("9\tbig cat|panther\tlarge feline", 1, &config).unwrap();
        assert_eq!(s.words, vec!["big cat", "panther"]);

        assert_eq!(parse_hypernyms("9\t4\t5", 1, &config).unwrap(), (9, vec![4, 5]));
    }
}
