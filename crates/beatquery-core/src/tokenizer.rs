//! Search query tokenizer
//!
//! Scans the words of a query left to right. At each position a BPM match
//! is tried first, then a key match; anything else is a keyword. Every
//! match consumes its words, so spans never overlap.

use crate::bpm::{self, BpmMatch, BpmRange};
use crate::config::TokenizerConfig;
use crate::key::{self, Key};
use crate::result::ParseResult;
use crate::words::{
    has_searchable_text, is_bpm_word, is_lone_dash, is_wide_dash, split_words, Word,
};
use serde::Serialize;
use std::ops::Range;

/// What a stretch of the query was recognized as
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TokenKind {
    BpmValue(u16),
    BpmRange(BpmRange),
    /// One key, or both qualities when none was given
    Keys(Vec<Key>),
    Keyword(String),
    /// Shaped like a tempo but implausible; consumed and dropped
    Rejected,
}

/// A recognized stretch of the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryToken {
    pub kind: TokenKind,
    /// Byte span in the raw query
    pub span: Range<usize>,
    /// Raw text covered by the span
    pub text: String,
}

/// Search query tokenizer
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Parse a raw query into its BPM, key and keyword facets
    pub fn parse(&self, raw: &str) -> ParseResult {
        ParseResult::from_tokens(self.tokenize(raw))
    }

    /// Split a raw query into recognized tokens, in query order
    pub fn tokenize(&self, raw: &str) -> Vec<QueryToken> {
        let words = split_words(raw);
        let mut tokens = Vec::new();
        let mut ranges_kept = 0;
        let mut i = 0;

        while i < words.len() {
            let (kind, consumed) = if let Some((matched, consumed)) = self.match_bpm(&words, i) {
                (self.bpm_kind(matched, &mut ranges_kept), consumed)
            } else if let Some(matched) = key::match_key(&words[i..]) {
                (TokenKind::Keys(matched.keys), matched.consumed)
            } else if has_searchable_text(words[i].text) {
                (TokenKind::Keyword(words[i].text.to_lowercase()), 1)
            } else {
                log::trace!("Skipping symbol-only word {:?}", words[i].text);
                i += 1;
                continue;
            };

            let span = words[i].span.start..words[i + consumed - 1].span.end;
            log::debug!("{:?} -> {:?}", &raw[span.clone()], kind);
            tokens.push(QueryToken {
                kind,
                text: raw[span.clone()].to_string(),
                span,
            });
            i += consumed;
        }

        tokens
    }

    fn bpm_kind(&self, matched: BpmMatch, ranges_kept: &mut usize) -> TokenKind {
        match matched {
            BpmMatch::Value(bpm) => TokenKind::BpmValue(bpm),
            BpmMatch::Range(range) if *ranges_kept < self.config.max_ranges => {
                *ranges_kept += 1;
                TokenKind::BpmRange(range)
            }
            BpmMatch::Range(range) => {
                log::debug!(
                    "Dropping range {} (limit of {} per query)",
                    range,
                    self.config.max_ranges
                );
                TokenKind::Rejected
            }
            BpmMatch::Rejected => TokenKind::Rejected,
        }
    }

    /// BPM match at `words[i]`, with spaced `bpm` words on either side.
    ///
    /// `bpm 160 bpm` is consumed whole.
    fn match_bpm(&self, words: &[Word<'_>], i: usize) -> Option<(BpmMatch, usize)> {
        let prefixed = usize::from(is_bpm_word(words[i].text));
        let body = i + prefixed;

        let (matched, consumed) = self.match_bpm_body(words, body)?;
        let suffixed = words
            .get(body + consumed)
            .is_some_and(|word| is_bpm_word(word.text));
        Some((matched, prefixed + consumed + usize::from(suffixed)))
    }

    /// Longest BPM candidate at `words[i]`: spaced range, dash-joined
    /// range, then the single word
    fn match_bpm_body(&self, words: &[Word<'_>], i: usize) -> Option<(BpmMatch, usize)> {
        let first = words.get(i)?;

        if let (Some(dash), Some(last)) = (words.get(i + 1), words.get(i + 2)) {
            if is_lone_dash(dash.text) {
                let joined = format!("{}-{}", first.text, last.text);
                if let Some(matched) = bpm::evaluate_joined(&joined, &self.config) {
                    return Some((matched, 3));
                }
            }
        }

        if let Some(next) = words.get(i + 1) {
            let wide_join = first.text.chars().next_back().is_some_and(is_wide_dash)
                || next.text.chars().next().is_some_and(is_wide_dash);
            if wide_join {
                let joined = format!("{}{}", first.text, next.text);
                if let Some(matched) = bpm::evaluate_joined(&joined, &self.config) {
                    return Some((matched, 2));
                }
            }
        }

        bpm::evaluate(first.text, &self.config).map(|matched| (matched, 1))
    }
}
