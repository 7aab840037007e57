//! Multi-document YAML splitter command-line interface.

use anyhow::Result;
use clap::Parser;
use confdiff::{split_file, yaml_files_under, SplitOutcome};
use std::path::Path;
use std::path::PathBuf;
use std::process;

/// Split multi-document YAML files into single-document files.
#[derive(Parser)]
#[command(name = "confsplit")]
#[command(version)]
#[command(
    about = "Split multi-document YAML files into single-document files",
    long_about = None
)]
struct Cli {
    /// File or directory paths to process
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Delete the original multi-doc file after splitting
    #[arg(short = 'd', long)]
    delete_original: bool,

    /// Show what would be done without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    for path in &cli.paths {
        let abs = std::path::absolute(path)?;
        if !abs.exists() {
            // Skip and keep going; a bad argument should not sink the rest.
            eprintln!("Path not found: {}", abs.display());
            continue;
        }
        if abs.is_dir() {
            for file in yaml_files_under(&abs) {
                split_one(&file, &cli)?;
            }
        } else {
            split_one(&abs, &cli)?;
        }
    }
    Ok(())
}

fn split_one(path: &Path, cli: &Cli) -> Result<()> {
    let outcome = split_file(path, cli.delete_original, cli.dry_run)?;
    report(path, &outcome, cli.dry_run);
    Ok(())
}

fn report(source: &Path, outcome: &SplitOutcome, dry_run: bool) {
    for out in &outcome.outputs {
        if dry_run {
            println!("DRY-RUN: would create {}", out.display());
        } else {
            println!("Created {}", out.display());
        }
    }
    if outcome.removed_original {
        println!("Removed original {}", source.display());
    }
}
