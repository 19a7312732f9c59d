//! # heatdash-cli
//!
//! Converts public-health xlsx workbooks into the processed CSVs the
//! heatdash views are served from.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use heatdash_table::{read_workbook, sanitize_sheet_name, Table};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// heatdash - public-health spreadsheet processing
#[derive(Parser)]
#[command(name = "heatdash")]
#[command(author, version, about = "Convert spreadsheet data for the heatdash charts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert every worksheet of an xlsx workbook into one CSV per sheet
    Convert {
        /// Source spreadsheet path
        input: PathBuf,

        /// Destination directory for the processed CSVs
        #[arg(default_value = "data_processed")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    match cli.command {
        Command::Convert { input, out_dir } => convert(&input, &out_dir),
    }
}

/// Extract every worksheet and write `<out_dir>/<sanitized name>.csv`.
fn convert(input: &Path, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let grids = read_workbook(input)
        .with_context(|| format!("Failed to read workbook: {}", input.display()))?;

    for grid in &grids {
        let table = Table::extract(grid);
        let name = sanitize_sheet_name(grid.name());
        let path = out_dir.join(format!("{name}.csv"));

        tracing::info!(sheet = grid.name(), rows = table.len(), "extracted worksheet");
        table
            .save_csv(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {} ({} rows)", path.display(), table.len());
    }

    Ok(())
}
