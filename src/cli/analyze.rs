use std::path::PathBuf;

use clap::Args;

use crate::analysis::{analyze, Analysis};
use crate::catalog::MeterCatalog;
use crate::cli::OutputFormat;
use crate::matching::{MatchConfig, DEFAULT_FUZZY_THRESHOLD};
use crate::translit::SanskritTransliterator;
use crate::utils::validation::validate_shloka;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// The verse to analyze, in IAST or Devanagari.
    /// Use '-' to read from stdin
    #[arg(required = true)]
    pub text: String,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Minimum similarity for a fuzzy match (0.0 to 1.0)
    #[arg(long, default_value_t = DEFAULT_FUZZY_THRESHOLD)]
    pub fuzzy_threshold: f64,
}

/// Execute analyze subcommand
///
/// # Errors
///
/// Returns an error if the input is empty or too long, the catalog cannot
/// be loaded, or transliteration fails.
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_text(&args.text)?;
    let shloka = validate_shloka(&text)?;

    let catalog = load_catalog(args.catalog.as_deref())?;
    if verbose {
        eprintln!("Loaded catalog with {} meters", catalog.len());
    }

    let config = MatchConfig {
        fuzzy_threshold: args.fuzzy_threshold,
    };
    let result = analyze(&shloka, &catalog, &SanskritTransliterator::new(), config)?;

    match format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Tsv => print_tsv(&result),
    }

    Ok(())
}

pub(crate) fn read_text(arg: &str) -> anyhow::Result<String> {
    use std::io::Read;

    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(arg.to_string())
    }
}

pub(crate) fn load_catalog(path: Option<&std::path::Path>) -> anyhow::Result<MeterCatalog> {
    Ok(match path {
        Some(path) => MeterCatalog::load_from_file(path)?,
        None => MeterCatalog::load_embedded()?,
    })
}

fn print_text(result: &Analysis) {
    println!("Verse: {}", result.input.original);
    println!("  Devanagari: {}", result.input.devanagari);
    println!("  IAST:       {}", result.input.latin);

    println!("\nScansion:");
    for (i, pattern) in result.pattern.by_pada.iter().enumerate() {
        println!(
            "  Pāda {}: {} ({} syllables)",
            i + 1,
            pattern,
            pattern.len()
        );
    }
    println!(
        "  Combined: {} ({} syllables)",
        result.pattern.combined,
        result.pattern.combined.len()
    );

    println!("\nMeter: {}", result.identified_meter);
    if let Some(similarity) = result.similarity {
        println!("Confidence: {:.1}%", similarity * 100.0);
    }
    for line in result.explanation.lines() {
        println!("  {line}");
    }
}

fn print_tsv(result: &Analysis) {
    println!("meter\tkind\tsimilarity\tcombined_pattern\tsyllables\tpadas");
    println!(
        "{}\t{:?}\t{}\t{}\t{}\t{}",
        result.identified_meter,
        result.kind,
        result
            .similarity
            .map(|s| format!("{s:.4}"))
            .unwrap_or_default(),
        result.pattern.combined,
        result.pattern.combined.len(),
        result.pattern.by_pada.len(),
    );
}
