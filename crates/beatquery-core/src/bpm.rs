//! BPM values and ranges
//!
//! A candidate string is first matched against the BPM shape
//!
//! ```text
//! bpm? number (dash number?)? bpm?      number := ('+' | dash)? digit+ ('.' digit*)?
//! ```
//!
//! and only then evaluated. Anything shaped like a tempo is consumed even
//! when evaluation rejects it, so `999` or `-170` never leak into keywords.

use crate::config::{TokenizerConfig, BPM_CEILING, BPM_FLOOR};
use crate::error::Error;
use crate::words::is_dash;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive tempo range with `low < high`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[u16; 2]", try_from = "[u16; 2]")]
pub struct BpmRange {
    low: u16,
    high: u16,
}

impl BpmRange {
    pub fn new(low: u16, high: u16) -> Option<Self> {
        (BPM_FLOOR <= low && low < high && high <= BPM_CEILING).then_some(Self { low, high })
    }

    pub fn low(&self) -> u16 {
        self.low
    }

    pub fn high(&self) -> u16 {
        self.high
    }
}

impl fmt::Display for BpmRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl From<BpmRange> for [u16; 2] {
    fn from(range: BpmRange) -> Self {
        [range.low, range.high]
    }
}

impl TryFrom<[u16; 2]> for BpmRange {
    type Error = Error;

    fn try_from([low, high]: [u16; 2]) -> Result<Self, Self::Error> {
        BpmRange::new(low, high).ok_or(Error::InvalidRange { low, high })
    }
}

/// A decimal literal as written in the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Number<'a> {
    negative: bool,
    digits: &'a str,
    fraction: Option<&'a str>,
}

impl Number<'_> {
    /// Integer value, if the literal is a well-formed positive tempo
    fn value(&self) -> Option<u16> {
        if self.negative || self.digits.starts_with('0') {
            return None;
        }
        if matches!(self.fraction, Some(fraction) if fraction != "0") {
            return None;
        }
        self.digits.parse().ok()
    }
}

/// Syntactic form of a BPM candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BpmShape<'a> {
    Single(Number<'a>),
    Pair(Number<'a>, Number<'a>),
    /// A number followed by a separator and nothing else, e.g. `150-`
    Dangling(Number<'a>),
}

/// Outcome of evaluating a BPM-shaped candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpmMatch {
    Value(u16),
    Range(BpmRange),
    Rejected,
}

fn strip_bpm_prefix(text: &str) -> &str {
    match text.get(..3) {
        Some(head) if head.eq_ignore_ascii_case("bpm") => &text[3..],
        _ => text,
    }
}

fn strip_bpm_suffix(text: &str) -> &str {
    let Some(split) = text.len().checked_sub(3) else {
        return text;
    };
    match text.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case("bpm") => &text[..split],
        _ => text,
    }
}

fn parse_number(text: &str) -> Option<(Number<'_>, &str)> {
    let mut chars = text.chars();
    let (negative, unsigned) = match chars.next() {
        Some('+') => (false, chars.as_str()),
        Some(c) if is_dash(c) => (true, chars.as_str()),
        _ => (false, text),
    };

    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }
    let (digits, rest) = unsigned.split_at(digit_count);

    let (fraction, rest) = match rest.strip_prefix('.') {
        Some(after_point) => {
            let fraction_count = after_point.bytes().take_while(u8::is_ascii_digit).count();
            let (fraction, rest) = after_point.split_at(fraction_count);
            (Some(fraction), rest)
        }
        None => (None, rest),
    };

    Some((
        Number {
            negative,
            digits,
            fraction,
        },
        rest,
    ))
}

fn parse_shape(text: &str) -> Option<BpmShape<'_>> {
    let body = strip_bpm_suffix(strip_bpm_prefix(text));

    let (first, rest) = parse_number(body)?;
    if rest.is_empty() {
        return Some(BpmShape::Single(first));
    }

    let mut chars = rest.chars();
    if !chars.next().is_some_and(is_dash) {
        return None;
    }
    let rest = chars.as_str();
    if rest.is_empty() {
        return Some(BpmShape::Dangling(first));
    }

    let (second, rest) = parse_number(rest)?;
    rest.is_empty().then_some(BpmShape::Pair(first, second))
}

impl BpmShape<'_> {
    fn evaluate(&self, config: &TokenizerConfig) -> BpmMatch {
        let in_band = |number: &Number<'_>| number.value().filter(|&v| config.accepts(v));

        match self {
            BpmShape::Single(number) => in_band(number).map_or(BpmMatch::Rejected, BpmMatch::Value),
            BpmShape::Pair(first, second) => match (in_band(first), in_band(second)) {
                (Some(low), Some(high)) if low == high => BpmMatch::Value(low),
                (Some(low), Some(high)) => {
                    BpmRange::new(low, high).map_or(BpmMatch::Rejected, BpmMatch::Range)
                }
                _ => BpmMatch::Rejected,
            },
            BpmShape::Dangling(_) => BpmMatch::Rejected,
        }
    }
}

/// Evaluate a single candidate string.
///
/// Returns `None` when the text is not shaped like a tempo at all.
pub fn evaluate(text: &str, config: &TokenizerConfig) -> Option<BpmMatch> {
    parse_shape(text).map(|shape| shape.evaluate(config))
}

/// Evaluate a candidate assembled from several words.
///
/// Joined candidates only count when they form a two-number range shape;
/// otherwise the words are left to be matched one by one.
pub fn evaluate_joined(text: &str, config: &TokenizerConfig) -> Option<BpmMatch> {
    match parse_shape(text)? {
        shape @ BpmShape::Pair(..) => Some(shape.evaluate(config)),
        _ => None,
    }
}
