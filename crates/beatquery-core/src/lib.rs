//! Beatquery core library
//!
//! Tokenizes free-text beat search queries into BPM values, BPM ranges,
//! musical keys and residual keywords.

pub mod bpm;
pub mod config;
pub mod error;
pub mod key;
pub mod oracle;
pub mod result;
pub mod tokenizer;
pub mod words;

pub use bpm::BpmRange;
pub use config::TokenizerConfig;
pub use error::{Error, Result};
pub use key::{Accidental, Key, Quality, Root};
pub use oracle::{CaseOutcome, CheckReport};
pub use result::ParseResult;
pub use tokenizer::{QueryToken, TokenKind, Tokenizer};

/// Parse a query with the default configuration
pub fn parse_search_query(raw: &str) -> ParseResult {
    Tokenizer::default().parse(raw)
}
