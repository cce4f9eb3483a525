//! Beatquery fixture file library
//!
//! JSON oracle files for the search query tokenizer: their formats,
//! reading and writing, and the built-in case tables.

pub mod builtin;
pub mod format;
pub mod generate;
pub mod reader;
pub mod writer;

pub use format::{BpmCase, FixtureKind, FixtureSet, KeyCase, KeyExpectation, KeywordCase};
pub use reader::FixtureReader;
pub use writer::FixtureWriter;
