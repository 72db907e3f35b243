//! Species match scoring
//!
//! Each record is scored against the query over a fixed, ordered list of
//! species fields (see [`Species::search_fields`]). Per field:
//!
//! | Condition                         | Score |
//! |-----------------------------------|-------|
//! | Field equals query                | 10    |
//! | Field starts with query           | 8     |
//! | Primary name contains query       | 6     |
//! | Other field contains query        | 4     |
//!
//! Multi-word queries additionally earn 2 per query word found inside any
//! word of the field. All comparisons are case-insensitive.

use serde::Serialize;
use tracing::debug;

use crate::taxonomy::{Dataset, Species, TaxonPath, TaxonomyRecord};

/// Maximum number of ranked matches returned
pub const MAX_RESULTS: usize = 5;

/// Queries shorter than this (after trimming) are not evaluated
pub const MIN_QUERY_CHARS: usize = 2;

const EXACT_SCORE: u32 = 10;
const PREFIX_SCORE: u32 = 8;
const PRIMARY_CONTAINS_SCORE: u32 = 6;
const CONTAINS_SCORE: u32 = 4;
const WORD_SCORE: u32 = 2;

/// Fields at positions below this are the primary display names
const PRIMARY_FIELDS: usize = 2;

/// One search hit
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedMatch<'a> {
    /// Position of the record in the dataset
    pub index: usize,
    pub record: &'a TaxonomyRecord,
    pub score: u32,
}

impl<'a> RankedMatch<'a> {
    pub fn species(&self) -> &'a Species {
        &self.record.species
    }

    /// Classification path for navigating the cascade to this hit
    pub fn path(&self) -> TaxonPath {
        self.record.path()
    }
}

/// Trim and lowercase a raw query
///
/// Returns `None` when the trimmed query is shorter than [`MIN_QUERY_CHARS`].
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Rank dataset records against `query`
///
/// Returns at most [`MAX_RESULTS`] matches with a positive score, highest
/// first. Equal scores keep dataset order.
pub fn search<'a>(query: &str, dataset: &'a Dataset) -> Vec<RankedMatch<'a>> {
    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };

    let mut matches: Vec<RankedMatch<'a>> = dataset
        .records()
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let score = score_normalized(&query, &record.species);
            (score > 0).then_some(RankedMatch {
                index,
                record,
                score,
            })
        })
        .collect();

    let total = matches.len();
    // Stable: ties stay in dataset order
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_RESULTS);

    debug!(
        query = %query,
        total,
        returned = matches.len(),
        top_score = ?matches.first().map(|m| m.score),
        "Search complete"
    );

    matches
}

/// Score a single species against `query`
///
/// The query is trimmed and lowercased first; no minimum length applies.
pub fn score_species(query: &str, species: &Species) -> u32 {
    score_normalized(&query.trim().to_lowercase(), species)
}

fn score_normalized(query: &str, species: &Species) -> u32 {
    if query.is_empty() {
        return 0;
    }

    let words: Vec<&str> = query.split_whitespace().collect();
    let multi_word = words.len() > 1;

    species
        .search_fields()
        .into_iter()
        .enumerate()
        .filter(|(_, field)| !field.is_empty())
        .map(|(index, field)| {
            let field = field.to_lowercase();
            let mut score = substring_score(query, &field, index);
            if multi_word {
                score += word_score(&words, &field);
            }
            score
        })
        .sum()
}

fn substring_score(query: &str, field: &str, index: usize) -> u32 {
    if field == query {
        EXACT_SCORE
    } else if field.starts_with(query) {
        PREFIX_SCORE
    } else if field.contains(query) {
        if index < PRIMARY_FIELDS {
            PRIMARY_CONTAINS_SCORE
        } else {
            CONTAINS_SCORE
        }
    } else {
        0
    }
}

/// Partial credit: each query word found inside some word of the field
fn word_score(query_words: &[&str], field: &str) -> u32 {
    let field_words: Vec<&str> = field.split_whitespace().collect();
    let hits = query_words
        .iter()
        .filter(|word| field_words.iter().any(|fw| fw.contains(*word)))
        .count() as u32;
    hits * WORD_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::fixtures::{record, record_with, SAMPLE_JSON};
    use crate::taxonomy::{LocalizedText, TaxonNode};

    const FELID: [&str; 6] = ["Animalia", "Chordata", "Mammalia", "Carnivora", "Felidae", "Panthera"];

    fn species(arabic: &str, english: &str) -> Species {
        Species {
            arabic: arabic.to_string(),
            english: english.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Dataset {
        Dataset::from_json_str(SAMPLE_JSON).unwrap()
    }

    #[test]
    fn test_short_query_returns_empty() {
        let dataset = sample();
        assert!(search("", &dataset).is_empty());
        assert!(search("ن", &dataset).is_empty());
        assert!(search("  t  ", &dataset).is_empty());
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  TiGer "), Some("tiger".to_string()));
        assert_eq!(normalize_query(" a "), None);
        assert_eq!(normalize_query("نم"), Some("نم".to_string()));
    }

    #[test]
    fn test_exact_primary_name_scores_ten() {
        assert_eq!(score_species("tiger", &species("نمر", "Tiger")), 10);
        assert_eq!(score_species("TIGER", &species("نمر", "Tiger")), 10);
        assert_eq!(score_species("نمر", &species("نمر", "Tiger")), 10);
    }

    #[test]
    fn test_prefix_scores_eight() {
        assert_eq!(score_species("tig", &species("نمر", "Tiger")), 8);
    }

    #[test]
    fn test_primary_contains_scores_six() {
        assert_eq!(score_species("ige", &species("نمر", "Tiger")), 6);
    }

    #[test]
    fn test_secondary_contains_scores_four() {
        let mut s = species("أسد", "Lion");
        s.description = LocalizedText {
            arabic: String::new(),
            english: "A big cat of the savanna".to_string(),
        };
        assert_eq!(score_species("savanna", &s), 4);
    }

    #[test]
    fn test_secondary_prefix_scores_eight() {
        let mut s = species("أسد", "Lion");
        s.habitat.english = "Savanna grasslands".to_string();
        assert_eq!(score_species("savanna", &s), 8);
    }

    #[test]
    fn test_fields_accumulate() {
        // Primary exact (10) + local name prefix (8)
        let mut s = species("نمر", "Tiger");
        s.local_names.regional.push(crate::taxonomy::RegionalName {
            name: "نمر بنغالي".to_string(),
            region: "الهند".to_string(),
        });
        assert_eq!(score_species("نمر", &s), 18);
    }

    #[test]
    fn test_multi_word_bonus() {
        // "snow leopard" vs field "Snow leopard": exact 10 + 2 words * 2
        assert_eq!(score_species("snow leopard", &species("نمر الثلوج", "Snow leopard")), 14);

        // Neither is a substring of the whole field, but both words hit
        let s = species("", "Leopard of the snow");
        assert_eq!(score_species("snow leopard", &s), 4);
    }

    #[test]
    fn test_multi_word_partial_word_match() {
        // "leo" appears inside "leopard"; "xyz" matches nothing
        let s = species("", "Snow leopard");
        assert_eq!(score_species("leo xyz", &s), 2);
    }

    #[test]
    fn test_single_word_has_no_word_bonus() {
        let s = species("", "Snow leopard");
        // contains only: 6, no bonus
        assert_eq!(score_species("leopard", &s), 6);
    }

    #[test]
    fn test_unrelated_query_scores_zero() {
        assert_eq!(score_species("zebra", &species("نمر", "Tiger")), 0);
    }

    #[test]
    fn test_exact_name_outranks_description_mention() {
        let mut lion = species("أسد", "Lion");
        lion.description.arabic = "يعيش قرب مناطق النمر".to_string();
        let dataset = Dataset::from_records(vec![
            record_with(FELID.map(|n| TaxonNode::new(n, n)), lion),
            record_with(FELID.map(|n| TaxonNode::new(n, n)), species("نمر", "Tiger")),
        ])
        .unwrap();

        let results = search("نمر", &dataset);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].species().english, "Tiger");
        assert_eq!(results[0].score, 10);
        assert_eq!(results[0].index, 1);
        assert_eq!(results[1].species().english, "Lion");
        assert_eq!(results[1].score, 4);
    }

    #[test]
    fn test_results_capped_and_non_increasing() {
        let records = (0..8)
            .map(|i| {
                let english = format!("Cat {}", "x".repeat(i));
                record(FELID, "قط", &english)
            })
            .collect();
        let dataset = Dataset::from_records(records).unwrap();

        let results = search("cat", &dataset);
        assert_eq!(results.len(), MAX_RESULTS);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let dataset = Dataset::from_records(vec![
            record(FELID, "قط أ", "Cat one"),
            record(FELID, "قط ب", "Cat two"),
            record(FELID, "قط ج", "Cat three"),
        ])
        .unwrap();

        let results = search("cat", &dataset);
        let order: Vec<usize> = results.iter().map(|m| m.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_match_carries_path() {
        let dataset = sample();
        let results = search("monarch", &dataset);
        assert_eq!(results.len(), 1);

        let path = results[0].path();
        assert_eq!(path[0].english, "Animalia");
        assert_eq!(path[1].english, "Arthropoda");
        assert_eq!(path[5].english, "Danaus");
    }

    #[test]
    fn test_sample_tiger_query() {
        let dataset = sample();
        let results = search("نمر", &dataset);

        // Tiger: exact Arabic name (10) + regional name prefix (8)
        assert_eq!(results[0].species().english, "Tiger");
        assert_eq!(results[0].score, 18);
        // Lion: mentioned in its Arabic description
        assert_eq!(results[1].species().english, "Lion");
        assert_eq!(results[1].score, 4);
        assert_eq!(results.len(), 2);
    }
}
