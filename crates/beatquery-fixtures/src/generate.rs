//! Key fixture generation
//!
//! Enumerates every spelling the key grammar accepts together with its
//! canonical output. Roots are emitted upper-case only; case handling is
//! covered by the tokenizer's own tests.

use crate::format::{KeyCase, KeyExpectation};

pub const ROOTS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

/// Every accidental spelling, symbol and word forms
pub const ACCIDENTALS: [&str; 6] = ["#", "♯", "sharp", "b", "♭", "flat"];

/// Accidentals that may stand apart from the root
pub const WORD_ACCIDENTALS: [&str; 2] = ["sharp", "flat"];

/// Every quality spelling, including the single-letter forms
pub const QUALITIES: [&str; 6] = ["major", "maj", "M", "minor", "min", "m"];

/// Qualities that may stand apart from the root
pub const LONG_QUALITIES: [&str; 4] = ["major", "maj", "minor", "min"];

fn canonical_accidental(accidental: &str) -> &'static str {
    match accidental {
        "#" | "♯" | "sharp" => "s",
        _ => "b",
    }
}

fn canonical_quality(quality: &str) -> &'static str {
    match quality {
        "major" | "maj" | "M" => "maj",
        _ => "min",
    }
}

fn both(input: String, stem: String) -> KeyCase {
    KeyCase {
        input,
        expected: KeyExpectation::Many(vec![format!("{stem}maj"), format!("{stem}min")]),
    }
}

fn one(input: String, key: String) -> KeyCase {
    KeyCase {
        input,
        expected: KeyExpectation::One(key),
    }
}

/// Enumerate all accepted key spellings.
///
/// Categories, in output order:
///  1. `X`        root alone
///  2. `XA`       root + accidental
///  3. `X A`      root, spaced word accidental
///  4. `XQ`       root + quality
///  5. `X Q`      root, spaced long quality
///  6. `XAQ`      root + accidental + quality
///  7. `X A Q`    root, spaced word accidental, spaced long quality
///  8. `XA Q`     root + accidental, spaced long quality
pub fn key_cases() -> Vec<KeyCase> {
    let mut cases = Vec::new();

    for root in ROOTS {
        cases.push(both(root.to_string(), root.to_string()));
    }

    for root in ROOTS {
        for acc in ACCIDENTALS {
            let stem = format!("{root}{}", canonical_accidental(acc));
            cases.push(both(format!("{root}{acc}"), stem));
        }
    }

    for root in ROOTS {
        for acc in WORD_ACCIDENTALS {
            let stem = format!("{root}{}", canonical_accidental(acc));
            cases.push(both(format!("{root} {acc}"), stem));
        }
    }

    for root in ROOTS {
        for qual in QUALITIES {
            cases.push(one(
                format!("{root}{qual}"),
                format!("{root}{}", canonical_quality(qual)),
            ));
        }
    }

    for root in ROOTS {
        for qual in LONG_QUALITIES {
            cases.push(one(
                format!("{root} {qual}"),
                format!("{root}{}", canonical_quality(qual)),
            ));
        }
    }

    for root in ROOTS {
        for acc in ACCIDENTALS {
            for qual in QUALITIES {
                cases.push(one(
                    format!("{root}{acc}{qual}"),
                    format!(
                        "{root}{}{}",
                        canonical_accidental(acc),
                        canonical_quality(qual)
                    ),
                ));
            }
        }
    }

    for root in ROOTS {
        for acc in WORD_ACCIDENTALS {
            for qual in LONG_QUALITIES {
                cases.push(one(
                    format!("{root} {acc} {qual}"),
                    format!(
                        "{root}{}{}",
                        canonical_accidental(acc),
                        canonical_quality(qual)
                    ),
                ));
            }
        }
    }

    for root in ROOTS {
        for acc in ACCIDENTALS {
            for qual in LONG_QUALITIES {
                cases.push(one(
                    format!("{root}{acc} {qual}"),
                    format!(
                        "{root}{}{}",
                        canonical_accidental(acc),
                        canonical_quality(qual)
                    ),
                ));
            }
        }
    }

    log::debug!("Generated {} key cases", cases.len());
    cases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_count() {
        // 7 + 42 + 14 + 42 + 28 + 252 + 56 + 168
        assert_eq!(key_cases().len(), 609);
    }

    #[test]
    fn test_inputs_are_unique() {
        let cases = key_cases();
        let mut inputs: Vec<_> = cases.iter().map(|c| c.input.as_str()).collect();
        inputs.sort_unstable();
        inputs.dedup();
        assert_eq!(inputs.len(), cases.len());
    }

    #[test]
    fn test_single_letter_qualities_stay_compact() {
        for case in key_cases() {
            assert!(!case.input.ends_with(" M") && !case.input.ends_with(" m"));
        }
    }

    #[test]
    fn test_sample_expectations() {
        let cases = key_cases();
        let find = |input: &str| {
            cases
                .iter()
                .find(|c| c.input == input)
                .map(|c| c.expected.clone())
                .unwrap()
        };

        assert_eq!(find("F♯m"), KeyExpectation::One("Fsmin".to_string()));
        assert_eq!(find("BbM"), KeyExpectation::One("Bbmaj".to_string()));
        assert_eq!(find("E flat minor"), KeyExpectation::One("Ebmin".to_string()));
        assert_eq!(
            find("G sharp"),
            KeyExpectation::Many(vec!["Gsmaj".to_string(), "Gsmin".to_string()])
        );
    }
}
