//! `generate-golden` — writes the tokenizer golden file.
//!
//! With no arguments, tokenizes the fixed corpus with `xlm-roberta-base` and
//! overwrites `testdata/tokenizer_golden.json`.
//!
//! Build: `cargo build --bin generate-golden`

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use sat_golden::{CheckOutcome, Config, GoldenError, Generator, default_corpus, fixture};

// ── CLI ─────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "generate-golden")]
#[command(version = sat_golden::PKG_VERSION)]
#[command(about = "generate tokenizer golden test fixtures")]
struct Args {
    /// path to a golden.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// hub repository id or path to a tokenizer.json
    #[arg(short, long)]
    model: Option<String>,

    /// golden file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// compare against the existing golden file instead of writing it
    #[arg(long)]
    check: bool,
}

// ── run ─────────────────────────────────────────────────────────────

fn run(args: Args) -> sat_golden::Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(output) = args.output {
        config.output = output;
    }

    let source = config.source();
    info!(version = sat_golden::version_string(), %source, "generate-golden starting");

    let tokenizer = source.load()?;
    info!(vocab_size = tokenizer.vocab_size(), "tokenizer loaded");

    let records = Generator::new(tokenizer).generate(default_corpus())?;

    if !args.check {
        fixture::write(&config.output, &records)?;
        println!("Generated {} test cases", records.len());
        return Ok(());
    }

    let total = records.len();
    match fixture::check(&config.output, &records)? {
        CheckOutcome::UpToDate => {
            println!("Golden file up to date ({total} test cases)");
            Ok(())
        }
        CheckOutcome::Reformatted => {
            eprintln!(
                "{}: records match but formatting differs",
                config.output.display()
            );
            Err(GoldenError::Stale {
                differing: 0,
                total,
            })
        }
        CheckOutcome::Stale(diffs) => {
            for diff in &diffs {
                eprintln!("{diff}");
            }
            Err(GoldenError::Stale {
                differing: diffs.len(),
                total,
            })
        }
    }
}

// ── main ────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
