//! Word splitting
//!
//! A query is cut into words at whitespace and at punctuation. Musical
//! symbols and dashes stay inside words. `.` is kept only between digits
//! and `+` only before a digit, so `+160.0` survives but `trap.` does not.

use std::ops::Range;

/// A word of the raw query with its byte span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Characters that may separate the two ends of a BPM range
pub fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{2013}' | '\u{2014}')
}

/// En-dash or em-dash; these separate ranges regardless of spacing
pub fn is_wide_dash(c: char) -> bool {
    matches!(c, '\u{2013}' | '\u{2014}')
}

fn is_word_char(c: char, prev: Option<char>, next: Option<char>) -> bool {
    let digit = |side: Option<char>| side.is_some_and(|d| d.is_ascii_digit());
    match c {
        '.' => digit(prev) && digit(next),
        '+' => digit(next),
        _ => c.is_alphanumeric() || is_dash(c) || matches!(c, '_' | '#' | '♯' | '♭'),
    }
}

/// Split a raw query into words
pub fn split_words(raw: &str) -> Vec<Word<'_>> {
    let chars: Vec<(usize, char)> = raw.char_indices().collect();
    let mut words = Vec::new();
    let mut start = None;

    for (n, &(i, c)) in chars.iter().enumerate() {
        let prev = n.checked_sub(1).map(|p| chars[p].1);
        let next = chars.get(n + 1).map(|&(_, c)| c);
        if is_word_char(c, prev, next) {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            words.push(Word {
                text: &raw[s..i],
                span: s..i,
            });
        }
    }
    if let Some(s) = start {
        words.push(Word {
            text: &raw[s..],
            span: s..raw.len(),
        });
    }

    log::trace!("Split {:?} into {} words", raw, words.len());
    words
}

/// Case-insensitive `bpm`
pub fn is_bpm_word(text: &str) -> bool {
    text.eq_ignore_ascii_case("bpm")
}

/// A word made of a single dash character
pub fn is_lone_dash(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_dash(c))
}

/// Words made only of symbols carry nothing searchable
pub fn has_searchable_text(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}
