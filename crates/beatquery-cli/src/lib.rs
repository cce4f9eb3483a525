//! Shared pieces of the beatquery command line tools

pub mod output;

use anyhow::{Context, Result};
use beatquery_core::{Tokenizer, TokenizerConfig};
use beatquery_fixtures::FixtureKind;
use std::path::Path;

/// Build a tokenizer from an optional TOML config path
pub fn load_tokenizer(config_path: Option<&str>) -> Result<Tokenizer> {
    let config = match config_path {
        Some(path) => TokenizerConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => TokenizerConfig::default(),
    };
    log::info!(
        "Tokenizer band {}..={} BPM, {} range(s) per query",
        config.min_bpm,
        config.max_bpm,
        config.max_ranges
    );
    Ok(Tokenizer::new(&config))
}

/// Parse a `--kind` argument
pub fn parse_kind(value: &str) -> std::result::Result<FixtureKind, String> {
    match value.to_lowercase().as_str() {
        "auto" => Ok(FixtureKind::Auto),
        "bpm" => Ok(FixtureKind::Bpm),
        "keywords" => Ok(FixtureKind::Keywords),
        "keys" => Ok(FixtureKind::Keys),
        other => Err(format!(
            "unknown fixture kind '{}' (expected auto, bpm, keywords or keys)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("BPM"), Ok(FixtureKind::Bpm));
        assert_eq!(parse_kind("keys"), Ok(FixtureKind::Keys));
        assert!(parse_kind("key").is_err());
    }

    #[test]
    fn test_load_tokenizer() {
        let tokenizer = load_tokenizer(None).unwrap();
        assert_eq!(tokenizer.config(), &TokenizerConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beatquery.toml");
        std::fs::write(&path, "[tokenizer]\nmax_ranges = 2\n").unwrap();
        let tokenizer = load_tokenizer(path.to_str()).unwrap();
        assert_eq!(tokenizer.config().max_ranges, 2);

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[tokenizer]\nmin_bpm = 500\n").unwrap();
        assert!(load_tokenizer(bad.to_str()).is_err());
    }
}
