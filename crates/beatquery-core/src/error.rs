//! Error types for beatquery
//!
//! Parsing a query never fails; these cover configuration loading and the
//! conversions of the public value types.

use thiserror::Error;

/// Result type for beatquery operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Not a canonical key name such as `Csmin`
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid BPM range: {low}-{high}")]
    InvalidRange { low: u16, high: u16 },
}
