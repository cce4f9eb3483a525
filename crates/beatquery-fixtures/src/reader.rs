//! Fixture file reader

use crate::format::{BpmCase, FixtureKind, FixtureSet, KeyCase, KeywordCase};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct FixtureReader;

impl FixtureReader {
    /// Read a fixture file.
    ///
    /// With `FixtureKind::Auto` the kind is taken from the file name; the
    /// keyword and key shapes cannot be told apart from the JSON alone.
    pub fn read(path: &Path, kind: FixtureKind) -> Result<FixtureSet> {
        let resolved = match kind {
            FixtureKind::Auto => FixtureKind::from_path(path),
            explicit => Some(explicit),
        };

        log::debug!("Reading {:?} fixtures from {}", resolved, path.display());

        let set = match resolved {
            Some(FixtureKind::Bpm) => FixtureSet::Bpm(Self::read_cases::<BpmCase>(path)?),
            Some(FixtureKind::Keywords) => {
                FixtureSet::Keywords(Self::read_cases::<KeywordCase>(path)?)
            }
            Some(FixtureKind::Keys) => FixtureSet::Keys(Self::read_cases::<KeyCase>(path)?),
            Some(FixtureKind::Auto) | None => anyhow::bail!(
                "Cannot infer fixture kind from file name: {} (pass an explicit kind)",
                path.display()
            ),
        };

        log::info!("Loaded {} cases from {}", set.len(), path.display());
        Ok(set)
    }

    fn read_cases<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open fixture file: {}", path.display()))?;
        let cases = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse fixture file: {}", path.display()))?;
        Ok(cases)
    }
}
