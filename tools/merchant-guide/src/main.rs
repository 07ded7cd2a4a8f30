//! CLI tool answering merchant queries about intergalactic numerals and prices.
//!
//! # Usage
//!
//! ```bash
//! # Read ./input.txt, write ./output.txt and ./errors.txt
//! merchant-guide
//!
//! # Same files in another directory
//! merchant-guide --workdir notes/
//!
//! # Explicit paths, answers printed to stdout
//! merchant-guide -i trade.txt -e rejected.txt --stdout
//!
//! # With logging
//! RUST_LOG=debug merchant-guide --workdir notes/
//! ```

use std::{
    fs::{self, File},
    io::{Read, Write, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use galaxy::prelude::*;
use tracing::{error, info};

const INPUT_FILE: &str = "input.txt";
const OUTPUT_FILE: &str = "output.txt";
const ERRORS_FILE: &str = "errors.txt";

/// Answer merchant queries about intergalactic numerals and prices.
///
/// Reads the whole input, answers every query in order and writes the
/// answers and the rejected lines to separate files.
#[derive(Parser, Debug)]
#[command(name = "merchant-guide")]
#[command(version, about)]
struct Args {
    /// Directory holding input.txt, output.txt and errors.txt.
    #[arg(short, long, default_value = ".")]
    workdir: PathBuf,

    /// Input file. Overrides <WORKDIR>/input.txt.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Answers file. Overrides <WORKDIR>/output.txt.
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Rejected lines file. Overrides <WORKDIR>/errors.txt.
    #[arg(short, long)]
    errors: Option<PathBuf>,

    /// Print answers to stdout instead of writing the answers file.
    #[arg(long)]
    stdout: bool,
}

impl Args {
    fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| self.workdir.join(INPUT_FILE))
    }

    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.workdir.join(OUTPUT_FILE))
    }

    fn errors_path(&self) -> PathBuf {
        self.errors.clone().unwrap_or_else(|| self.workdir.join(ERRORS_FILE))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let input_path = args.input_path();
    let file = File::open(&input_path)
        .with_context(|| format!("Failed to open input file: {}", input_path.display()))?;
    info!(path = %input_path.display(), "reading input");

    // Nothing is written when the input contradicts itself
    let report = process_input(file)?;

    let results: Box<dyn Write> = if args.stdout {
        Box::new(stdout().lock())
    } else {
        Box::new(create(&args.output_path())?)
    };
    let diagnostics = create(&args.errors_path())?;
    write_report(&report, results, diagnostics)?;

    // Summary goes to stderr so it never mixes with answers on stdout
    eprintln!(
        "Answered {} query(ies), rejected {} line(s)",
        report.results.len(),
        report.rejections.len()
    );

    Ok(())
}

fn create(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))
}

/// Reads the whole input and runs every phase over it.
fn process_input<R: Read>(mut input: R) -> Result<Report> {
    let mut text = String::new();
    input.read_to_string(&mut text).context("Failed to read input as UTF-8 text")?;
    process(&text).context("Input is contradictory, no answers produced")
}

/// Writes answers and rendered rejections.
fn write_report<W: Write, E: Write>(report: &Report, mut results: W, mut diagnostics: E) -> Result<()> {
    results.write_all(report.results_text().as_bytes()).context("Failed to write answers")?;
    results.flush().context("Failed to flush answers")?;

    diagnostics
        .write_all(report.diagnostics_text().as_bytes())
        .context("Failed to write rejected lines")?;
    diagnostics.flush().context("Failed to flush rejected lines")?;
    Ok(())
}
