//! Fixture file structures
//!
//! Three JSON shapes are in use, one per facet of the tokenizer. Each file
//! is a flat array of cases.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Expected BPM decomposition of one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BpmCase {
    pub input: String,
    pub bpm_values: Vec<u16>,
    pub bpm_ranges: Vec<[u16; 2]>,
}

/// Expected residual keywords of one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCase {
    pub input: String,
    pub expected: Vec<String>,
}

/// Expected key output: one canonical key, or several candidates
/// when the quality was left open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyExpectation {
    One(String),
    Many(Vec<String>),
}

impl KeyExpectation {
    /// Flatten into the ordered list of keys the tokenizer must report
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            KeyExpectation::One(key) => vec![key.clone()],
            KeyExpectation::Many(keys) => keys.clone(),
        }
    }
}

/// Expected keys of one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyCase {
    pub input: String,
    pub expected: KeyExpectation,
}

/// Which fixture shape a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureKind {
    Bpm,
    Keywords,
    Keys,
    Auto, // Auto-detect based on file name
}

impl Default for FixtureKind {
    fn default() -> Self {
        FixtureKind::Auto
    }
}

impl FixtureKind {
    /// Infer the fixture kind from a file name.
    ///
    /// `keyword` is checked before `key` since every keyword file name
    /// also contains `key`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_lowercase();
        if name.contains("bpm") {
            Some(FixtureKind::Bpm)
        } else if name.contains("keyword") {
            Some(FixtureKind::Keywords)
        } else if name.contains("key") {
            Some(FixtureKind::Keys)
        } else {
            None
        }
    }
}

/// A loaded fixture file
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureSet {
    Bpm(Vec<BpmCase>),
    Keywords(Vec<KeywordCase>),
    Keys(Vec<KeyCase>),
}

impl FixtureSet {
    pub fn kind(&self) -> FixtureKind {
        match self {
            FixtureSet::Bpm(_) => FixtureKind::Bpm,
            FixtureSet::Keywords(_) => FixtureKind::Keywords,
            FixtureSet::Keys(_) => FixtureKind::Keys,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FixtureSet::Bpm(cases) => cases.len(),
            FixtureSet::Keywords(cases) => cases.len(),
            FixtureSet::Keys(cases) => cases.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(
            FixtureKind::from_path(Path::new("bpm/bpm_test_cases.json")),
            Some(FixtureKind::Bpm)
        );
        assert_eq!(
            FixtureKind::from_path(Path::new("general_keywords_cases.json")),
            Some(FixtureKind::Keywords)
        );
        assert_eq!(
            FixtureKind::from_path(Path::new("KEY_TEST_CASES.json")),
            Some(FixtureKind::Keys)
        );
        assert_eq!(FixtureKind::from_path(Path::new("cases.json")), None);
    }

    #[test]
    fn test_key_expectation_shapes() {
        let one: KeyCase = serde_json::from_str(r#"{"input": "Cm", "expected": "Cmin"}"#).unwrap();
        assert_eq!(one.expected, KeyExpectation::One("Cmin".to_string()));

        let many: KeyCase =
            serde_json::from_str(r#"{"input": "A", "expected": ["Amaj", "Amin"]}"#).unwrap();
        assert_eq!(many.expected.to_vec(), vec!["Amaj", "Amin"]);
    }

    #[test]
    fn test_bpm_case_field_names() {
        let case = BpmCase {
            input: "150-170".to_string(),
            bpm_values: vec![],
            bpm_ranges: vec![[150, 170]],
        };
        let json = serde_json::to_value(&case).unwrap();
        assert_eq!(json["bpmRanges"][0][1], 170);
        assert!(json["bpmValues"].as_array().unwrap().is_empty());
    }
}
