//! Fixture file writer

use crate::format::FixtureSet;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct FixtureWriter {}

impl FixtureWriter {
    pub fn new() -> Self {
        Self {}
    }

    /// Write a fixture file as pretty JSON with a 4-space indent
    pub fn write(&self, path: &Path, set: &FixtureSet) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create fixture file: {}", path.display()))?;

        let mut writer = BufWriter::new(file);

        match set {
            FixtureSet::Bpm(cases) => self.write_cases(&mut writer, cases)?,
            FixtureSet::Keywords(cases) => self.write_cases(&mut writer, cases)?,
            FixtureSet::Keys(cases) => self.write_cases(&mut writer, cases)?,
        }

        writer.write_all(b"\n")?;
        writer.flush()?;

        log::info!("Wrote {} cases to {}", set.len(), path.display());
        Ok(())
    }

    fn write_cases<T: Serialize>(&self, writer: &mut BufWriter<File>, cases: &[T]) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        cases.serialize(&mut serializer)?;
        Ok(())
    }
}

impl Default for FixtureWriter {
    fn default() -> Self {
        Self::new()
    }
}
