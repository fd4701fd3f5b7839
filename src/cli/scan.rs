use clap::Args;

use crate::cli::analyze::read_text;
use crate::cli::OutputFormat;
use crate::core::pattern::Pattern;
use crate::core::verse::split_padas;
use crate::scansion::scan;
use crate::translit::{SanskritTransliterator, Transliterate};
use crate::utils::validation::validate_shloka;

#[derive(Args)]
pub struct ScanArgs {
    /// The verse to scan, in IAST or Devanagari.
    /// Use '-' to read from stdin
    #[arg(required = true)]
    pub text: String,
}

/// Execute scan subcommand
///
/// # Errors
///
/// Returns an error if the input is empty or too long, or transliteration
/// fails.
pub fn run(args: ScanArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_text(&args.text)?;
    let shloka = validate_shloka(&text)?;

    let transliterator = SanskritTransliterator::new();
    let padas = split_padas(&shloka);
    if verbose {
        eprintln!("Split into {} pāda/s", padas.len());
    }

    let mut scanned: Vec<(String, Pattern)> = Vec::with_capacity(padas.len());
    for pada in padas {
        let romanized = transliterator.to_iast(&pada)?;
        let pattern = scan(&romanized);
        scanned.push((pada, pattern));
    }

    match format {
        OutputFormat::Text => {
            for (pada, pattern) in &scanned {
                println!("{pada}");
                println!("  {} ({} syllables)", pattern, pattern.len());
            }
            let combined = Pattern::concat(
                &scanned.iter().map(|(_, p)| p.clone()).collect::<Vec<_>>(),
            );
            println!("\nCombined: {} ({} syllables)", combined, combined.len());
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = scanned
                .iter()
                .map(|(pada, pattern)| {
                    serde_json::json!({
                        "pada": pada,
                        "pattern": pattern,
                        "syllables": pattern.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("pada\tpattern\tsyllables");
            for (pada, pattern) in &scanned {
                println!("{pada}\t{pattern}\t{}", pattern.len());
            }
        }
    }

    Ok(())
}
