use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::analyze::load_catalog;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all meters in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show details of a specific meter
    Show {
        /// Meter name (e.g., "Vasantatilakā")
        #[arg(required = true)]
        name: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => run_list(catalog, format, verbose),
        CatalogCommands::Show { name, catalog } => run_show(&name, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(&output, catalog),
    }
}

fn run_list(
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    if verbose {
        eprintln!("Loaded catalog with {} meters", catalog.len());
    }

    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let name_width = catalog
                .meters
                .iter()
                .map(|m| m.name.chars().count())
                .max()
                .unwrap_or(4)
                .max(4);
            let pattern_width = catalog
                .meters
                .iter()
                .filter_map(|m| m.canonical_pattern().map(|p| p.len()))
                .max()
                .unwrap_or(7)
                .max(7);

            println!("Meter Catalog ({} meters)\n", catalog.len());
            println!(
                "{:<name_w$} {:<pat_w$} {:>9}",
                "Name",
                "Pattern",
                "Syllables",
                name_w = name_width,
                pat_w = pattern_width,
            );
            println!("{}", "-".repeat(name_width + pattern_width + 11));

            for meter in &catalog.meters {
                let pattern = meter
                    .canonical_pattern()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "(rule)".to_string());
                let syllables = meter
                    .syllables_per_pada
                    .map(|n| n.to_string())
                    .unwrap_or_default();
                println!(
                    "{:<name_w$} {:<pat_w$} {:>9}",
                    meter.name,
                    pattern,
                    syllables,
                    name_w = name_width,
                    pat_w = pattern_width,
                );
                if verbose {
                    if let Some(gana) = &meter.gana {
                        println!("  └─ Gaṇa: {gana}");
                    }
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .meters
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "name": m.name,
                        "pattern": m.canonical_pattern().map(|p| p.to_string()),
                        "syllables_per_pada": m.syllables_per_pada,
                        "gana": m.gana,
                        "description": m.description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tpattern\tsyllables_per_pada\tgana");
            for m in &catalog.meters {
                println!(
                    "{}\t{}\t{}\t{}",
                    m.name,
                    m.canonical_pattern()
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                    m.syllables_per_pada
                        .map(|n| n.to_string())
                        .unwrap_or_default(),
                    m.gana.as_deref().unwrap_or(""),
                );
            }
        }
    }

    Ok(())
}

fn run_show(name: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let meter = catalog
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Meter '{}' not found", name))?;

    match format {
        OutputFormat::Text => {
            println!("Meter: {}\n", meter.name);
            if let Some(pattern) = meter.canonical_pattern() {
                println!("Pattern:   {} ({} syllables)", pattern, pattern.len());
            } else {
                println!("Pattern:   (matched by built-in rule)");
            }
            if let Some(n) = meter.syllables_per_pada {
                println!("Syllables: {n} per pāda");
            }
            if let Some(gana) = &meter.gana {
                println!("Gaṇa:      {gana}");
            }
            if let Some(desc) = &meter.description {
                println!("\n{desc}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(meter)?);
        }
        OutputFormat::Tsv => {
            println!("name\tpattern\tsyllables_per_pada\tgana");
            println!(
                "{}\t{}\t{}\t{}",
                meter.name,
                meter
                    .canonical_pattern()
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
                meter
                    .syllables_per_pada
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                meter.gana.as_deref().unwrap_or(""),
            );
        }
    }

    Ok(())
}

fn run_export(output: &std::path::Path, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let json = catalog.to_json()?;
    std::fs::write(output, json)?;

    println!("Exported {} meters to {}", catalog.len(), output.display());

    Ok(())
}
