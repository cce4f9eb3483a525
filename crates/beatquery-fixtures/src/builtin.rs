//! Literal oracle tables shipped with the crate
//!
//! These are hand-written boundary cases; unlike the key grid they cannot
//! be derived from the grammar.

use crate::format::{BpmCase, KeywordCase};

const BPM_CASES_JSON: &str = include_str!("../data/bpm_test_cases.json");
const KEYWORD_CASES_JSON: &str = include_str!("../data/general_keywords_cases.json");

/// BPM value/range boundary table
pub fn bpm_cases() -> anyhow::Result<Vec<BpmCase>> {
    Ok(serde_json::from_str(BPM_CASES_JSON)?)
}

/// Residual keyword table
pub fn keyword_cases() -> anyhow::Result<Vec<KeywordCase>> {
    Ok(serde_json::from_str(KEYWORD_CASES_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_parse() {
        let bpm = bpm_cases().unwrap();
        assert!(bpm.iter().any(|c| c.input == "130-130" && c.bpm_values == vec![130]));
        assert!(bpm.iter().all(|c| c.bpm_ranges.iter().all(|[lo, hi]| lo < hi)));

        let keywords = keyword_cases().unwrap();
        assert!(keywords.iter().any(|c| c.input.is_empty() && c.expected.is_empty()));
    }
}
