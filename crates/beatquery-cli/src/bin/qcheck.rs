//! qcheck - Check fixture files against the tokenizer
//!
//! Usage:
//!   qcheck <fixture.json>...                   # Kind inferred from file names
//!   qcheck --kind keys <fixture.json>...       # Explicit kind for every file
//!   qcheck --config <path> <fixture.json>...   # Custom tokenizer settings

use anyhow::Result;
use beatquery_cli::output::{print_check_reports, FileReport};
use beatquery_cli::{load_tokenizer, parse_kind};
use beatquery_core::oracle::check_set;
use beatquery_fixtures::{FixtureKind, FixtureReader};
use clap::Parser;
use rayon::prelude::*;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "qcheck")]
#[command(about = "Check tokenizer fixture files", long_about = None)]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Fixture kind: auto, bpm, keywords or keys
    #[arg(short, long, default_value = "auto", value_parser = parse_kind)]
    kind: FixtureKind,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Fixture files (JSON)
    #[arg(required = true)]
    files: Vec<String>,
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

    run_qcheck(args.config.as_deref(), args.kind, &args.files)
}

fn run_qcheck(config_path: Option<&str>, kind: FixtureKind, files: &[String]) -> Result<()> {
    let tokenizer = load_tokenizer(config_path)?;
    let start = std::time::Instant::now();

    log::info!("Checking {} fixture files", files.len());

    let reports = files
        .par_iter()
        .map(|file| {
            let set = FixtureReader::read(Path::new(file), kind)?;
            let report = check_set(&tokenizer, &set);
            log::info!(
                "{}: {}/{} cases passed",
                file,
                report.passed,
                report.total
            );
            Ok(FileReport {
                path: file.clone(),
                report,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!("Checked all files in {:.2}s", start.elapsed().as_secs_f64());

    print_check_reports(&reports);

    let failed: usize = reports.iter().map(|r| r.report.failures.len()).sum();
    if failed > 0 {
        anyhow::bail!("{} fixture cases failed", failed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["qcheck", "bpm_test_cases.json", "keys.json"]);
        assert_eq!(args.kind, FixtureKind::Auto);
        assert_eq!(args.files.len(), 2);

        let args = Args::parse_from(["qcheck", "--kind", "keys", "cases.json"]);
        assert_eq!(args.kind, FixtureKind::Keys);

        assert!(Args::try_parse_from(["qcheck", "--kind", "tempo", "cases.json"]).is_err());
    }
}
