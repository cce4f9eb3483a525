//! qparse - Search query tokenizer
//!
//! Usage:
//!   qparse <query>...                     # Default tokenizer settings
//!   qparse --config <path> <query>...     # Settings from a TOML file
//!   qparse --tokens <query>...            # Print the token stream

use anyhow::Result;
use beatquery_cli::load_tokenizer;
use beatquery_cli::output::print_json;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "qparse")]
#[command(about = "Split a beat search query into BPM, key and keyword facets", long_about = None)]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Print the recognized tokens with their spans
    #[arg(short, long)]
    tokens: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Query words, joined with single spaces
    #[arg(required = true, allow_hyphen_values = true)]
    query: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Default: no logs (clean JSON output for parsing)
    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    run_qparse(args.config.as_deref(), &args.query.join(" "), args.tokens)
}

fn run_qparse(config_path: Option<&str>, query: &str, show_tokens: bool) -> Result<()> {
    let tokenizer = load_tokenizer(config_path)?;

    log::info!("Query: {:?}", query);

    if show_tokens {
        let tokens = tokenizer.tokenize(query);
        log::info!("{} tokens", tokens.len());
        print_json(&tokens);
    } else {
        print_json(&tokenizer.parse(query));
    }

    Ok(())
}
