//! Command-line interface for chandas-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Identify the meter of a Sanskrit verse
//! - **scan**: Show the Laghu/Guru pattern of a verse without identification
//! - **catalog**: List, show, or export meters from the catalog
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Identify the meter of a verse
//! chandas-solver analyze "vande gurūṇāṃ caraṇāravinde"
//!
//! # Pipe a verse from a file
//! cat verse.txt | chandas-solver analyze -
//!
//! # JSON output for scripting
//! chandas-solver analyze "..." --format json
//!
//! # Scansion only
//! chandas-solver scan "dharmakṣetre kurukṣetre"
//!
//! # Start web UI
//! chandas-solver serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

pub mod analyze;
pub mod catalog;
pub mod scan;

#[derive(Parser)]
#[command(name = "chandas-solver")]
#[command(version)]
#[command(about = "Identify Sanskrit verse meters (chandas) from IAST or Devanagari text")]
#[command(
    long_about = "chandas-solver scans a Sanskrit verse into its Laghu/Guru syllable-weight pattern and matches it against a catalog of classical meters.\n\nIt accepts IAST romanization or Devanagari, splits the verse into pādas on daṇḍas and newlines, and reports:\n- Exact matches when the pattern repeats a known meter\n- Partial pāda alignments and the Anuṣṭubh rule\n- Fuzzy matches with a confidence score when the verse is close to a known meter"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify the meter of a verse
    Analyze(analyze::AnalyzeArgs),

    /// Scan a verse into its Laghu/Guru pattern
    Scan(scan::ScanArgs),

    /// Manage the meter catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
