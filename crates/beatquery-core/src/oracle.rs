//! Fixture oracle
//!
//! Checks fixture cases against a tokenizer. Expected and actual outputs
//! are rendered as strings so one report shape serves every fixture kind.

use crate::key::Key;
use crate::tokenizer::Tokenizer;
use beatquery_fixtures::{BpmCase, FixtureKind, FixtureSet, KeyCase, KeywordCase};
use serde::Serialize;

/// Result of checking one fixture case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub input: String,
    pub passed: bool,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

impl CaseOutcome {
    fn new(input: &str, expected: Vec<String>, actual: Vec<String>) -> Self {
        Self {
            input: input.to_string(),
            passed: expected == actual,
            expected,
            actual,
        }
    }
}

/// Summary of checking a fixture set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub kind: FixtureKind,
    pub total: usize,
    pub passed: usize,
    /// Only the failing cases
    pub failures: Vec<CaseOutcome>,
}

impl CheckReport {
    pub fn from_outcomes(kind: FixtureKind, outcomes: Vec<CaseOutcome>) -> Self {
        let total = outcomes.len();
        let failures: Vec<CaseOutcome> = outcomes.into_iter().filter(|o| !o.passed).collect();
        Self {
            kind,
            total,
            passed: total - failures.len(),
            failures,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render BPM output as `160` for values and `150-170` for ranges
fn render_bpm(values: &[u16], ranges: impl IntoIterator<Item = (u16, u16)>) -> Vec<String> {
    values
        .iter()
        .map(u16::to_string)
        .chain(ranges.into_iter().map(|(low, high)| format!("{}-{}", low, high)))
        .collect()
}

pub fn check_bpm(tokenizer: &Tokenizer, case: &BpmCase) -> CaseOutcome {
    let result = tokenizer.parse(&case.input);
    let expected = render_bpm(
        &case.bpm_values,
        case.bpm_ranges.iter().map(|&[low, high]| (low, high)),
    );
    let actual = render_bpm(
        &result.bpm_values,
        result.bpm_ranges.iter().map(|r| (r.low(), r.high())),
    );
    CaseOutcome::new(&case.input, expected, actual)
}

pub fn check_keywords(tokenizer: &Tokenizer, case: &KeywordCase) -> CaseOutcome {
    let result = tokenizer.parse(&case.input);
    CaseOutcome::new(&case.input, case.expected.clone(), result.keywords)
}

pub fn check_keys(tokenizer: &Tokenizer, case: &KeyCase) -> CaseOutcome {
    let result = tokenizer.parse(&case.input);
    let actual = result.keys.iter().map(Key::to_string).collect();
    CaseOutcome::new(&case.input, case.expected.to_vec(), actual)
}

/// Check every case of a fixture set
pub fn check_set(tokenizer: &Tokenizer, set: &FixtureSet) -> CheckReport {
    let outcomes: Vec<CaseOutcome> = match set {
        FixtureSet::Bpm(cases) => cases.iter().map(|c| check_bpm(tokenizer, c)).collect(),
        FixtureSet::Keywords(cases) => cases.iter().map(|c| check_keywords(tokenizer, c)).collect(),
        FixtureSet::Keys(cases) => cases.iter().map(|c| check_keys(tokenizer, c)).collect(),
    };

    for outcome in outcomes.iter().filter(|o| !o.passed) {
        log::debug!(
            "{:?}: expected {:?}, got {:?}",
            outcome.input,
            outcome.expected,
            outcome.actual
        );
    }

    CheckReport::from_outcomes(set.kind(), outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beatquery_fixtures::KeyExpectation;

    #[test]
    fn test_failures_are_reported() {
        let set = FixtureSet::Keywords(vec![
            KeywordCase {
                input: "dark trap 140".to_string(),
                expected: vec!["dark".to_string(), "trap".to_string()],
            },
            KeywordCase {
                input: "Cmaj".to_string(),
                expected: vec!["cmaj".to_string()],
            },
        ]);

        let report = check_set(&Tokenizer::default(), &set);
        assert_eq!(report.kind, FixtureKind::Keywords);
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert!(!report.is_success());
        assert_eq!(report.failures[0].input, "Cmaj");
        assert!(report.failures[0].actual.is_empty());
    }

    #[test]
    fn test_bpm_rendering() {
        let case = BpmCase {
            input: "90-110 120".to_string(),
            bpm_values: vec![120],
            bpm_ranges: vec![[90, 110]],
        };
        let outcome = check_bpm(&Tokenizer::default(), &case);
        assert!(outcome.passed);
        assert_eq!(outcome.actual, vec!["120", "90-110"]);
    }

    #[test]
    fn test_key_expectations() {
        let tokenizer = Tokenizer::default();
        let both = KeyCase {
            input: "F♯".to_string(),
            expected: KeyExpectation::Many(vec!["Fsmaj".to_string(), "Fsmin".to_string()]),
        };
        let one = KeyCase {
            input: "E flat minor".to_string(),
            expected: KeyExpectation::One("Ebmin".to_string()),
        };
        assert!(check_keys(&tokenizer, &both).passed);
        assert!(check_keys(&tokenizer, &one).passed);
    }
}
