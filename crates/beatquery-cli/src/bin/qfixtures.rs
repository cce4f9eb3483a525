//! qfixtures - Write the tokenizer oracle files
//!
//! Usage: qfixtures <output_dir>

use anyhow::{Context, Result};
use beatquery_fixtures::{builtin, generate, FixtureSet, FixtureWriter};
use clap::Parser;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "qfixtures")]
#[command(about = "Write BPM, keyword and key fixture files", long_about = None)]
struct Args {
    /// Output directory for the JSON fixtures
    output_dir: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    run_qfixtures(Path::new(&args.output_dir))
}

fn run_qfixtures(output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let sets = [
        ("bpm_test_cases.json", FixtureSet::Bpm(builtin::bpm_cases()?)),
        (
            "general_keywords_cases.json",
            FixtureSet::Keywords(builtin::keyword_cases()?),
        ),
        ("key_test_cases.json", FixtureSet::Keys(generate::key_cases())),
    ];

    let writer = FixtureWriter::new();
    let mut files = Vec::new();
    for (name, set) in &sets {
        let path = output_dir.join(name);
        writer.write(&path, set)?;
        files.push(serde_json::json!({
            "file": path.display().to_string(),
            "kind": set.kind(),
            "cases": set.len(),
        }));
    }

    let result = serde_json::json!({
        "status": "success",
        "output_dir": output_dir.display().to_string(),
        "files": files,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beatquery_fixtures::{FixtureKind, FixtureReader};

    #[test]
    fn test_writes_all_fixture_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fixtures");
        run_qfixtures(&out).unwrap();

        let keys = FixtureReader::read(&out.join("key_test_cases.json"), FixtureKind::Auto).unwrap();
        assert_eq!(keys.len(), 609);
        let bpm = FixtureReader::read(&out.join("bpm_test_cases.json"), FixtureKind::Auto).unwrap();
        assert_eq!(bpm.kind(), FixtureKind::Bpm);
        let words =
            FixtureReader::read(&out.join("general_keywords_cases.json"), FixtureKind::Auto).unwrap();
        assert_eq!(words.kind(), FixtureKind::Keywords);
    }
}
