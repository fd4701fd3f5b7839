//! End-to-end verse analysis.
//!
//! Ties the pipeline together: script detection, transliteration, pāda
//! splitting, scansion, and meter identification. [`analyze`] is the single
//! entry point shared by the CLI and the web API.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::MeterCatalog;
use crate::core::pattern::Pattern;
use crate::core::types::{MatchKind, Script};
use crate::core::verse::split_padas;
use crate::matching::{MatchConfig, MatchingEngine};
use crate::scansion::scan;
use crate::translit::{detect_script, Transliterate, TransliterationError};

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Transliteration failed: {0}")]
    Transliteration(#[from] TransliterationError),
}

/// The input verse echoed in both scripts
#[derive(Debug, Clone, Serialize)]
pub struct InputForms {
    pub original: String,
    pub devanagari: String,
    pub latin: String,
}

/// Scansion output: one pattern per pāda plus their concatenation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    pub by_pada: Vec<Pattern>,
    pub combined: Pattern,
}

/// Full analysis of one verse
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub input: InputForms,
    pub pattern: PatternSummary,

    /// Name of the identified meter, or "Unknown" / "Unknown / Mixed"
    #[serde(rename = "identifiedChandas")]
    pub identified_meter: String,

    pub explanation: String,

    /// Which matching tier produced the identification
    pub kind: MatchKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

/// Analyze a verse: detect its script, echo it in both scripts, split it
/// into pādas, scan each pāda, and identify the meter.
///
/// Scansion always runs on the romanized text; Devanagari input is
/// transliterated pāda by pāda first.
pub fn analyze(
    shloka: &str,
    catalog: &MeterCatalog,
    transliterator: &dyn Transliterate,
    config: MatchConfig,
) -> Result<Analysis, AnalyzeError> {
    let script = detect_script(shloka);

    let (devanagari, latin) = match script {
        Script::Devanagari => (shloka.to_string(), transliterator.to_iast(shloka)?),
        Script::Iast => (transliterator.to_devanagari(shloka)?, shloka.to_string()),
    };

    let mut by_pada = Vec::new();
    for pada in split_padas(shloka) {
        let romanized = transliterator.to_iast(&pada)?;
        by_pada.push(scan(&romanized));
    }
    let combined = Pattern::concat(&by_pada);

    let engine = MatchingEngine::with_config(catalog, config);
    let identification = engine.identify(&by_pada);

    Ok(Analysis {
        input: InputForms {
            original: shloka.to_string(),
            devanagari,
            latin,
        },
        pattern: PatternSummary { by_pada, combined },
        identified_meter: identification.meter,
        explanation: identification.explanation,
        kind: identification.kind,
        similarity: identification.similarity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MeterDefinition;
    use crate::translit::SanskritTransliterator;

    fn analyze_with(shloka: &str, catalog: &MeterCatalog) -> Analysis {
        analyze(
            shloka,
            catalog,
            &SanskritTransliterator::new(),
            MatchConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_analyze_exact_match_iast() {
        let mut catalog = MeterCatalog::new();
        catalog.add_meter(MeterDefinition::new("Test", "GG"));

        // "mātā | mātā" -> GG per pāda
        let analysis = analyze_with("mātā | mātā", &catalog);

        assert_eq!(analysis.pattern.by_pada.len(), 2);
        assert_eq!(analysis.pattern.combined.to_string(), "GGGG");
        assert_eq!(analysis.identified_meter, "Test");
        assert_eq!(analysis.kind, MatchKind::ExactRepeat);
        assert_eq!(analysis.input.latin, "mātā | mātā");
        assert_eq!(analysis.input.devanagari, "माता । माता");
    }

    #[test]
    fn test_analyze_devanagari_input() {
        let catalog = MeterCatalog::new();

        let analysis = analyze_with("माता", &catalog);

        assert_eq!(analysis.input.original, "माता");
        assert_eq!(analysis.input.devanagari, "माता");
        assert_eq!(analysis.input.latin, "mātā");
        assert_eq!(analysis.pattern.combined.to_string(), "GG");
    }

    #[test]
    fn test_analyze_empty_input() {
        let catalog = MeterCatalog::new();

        let analysis = analyze_with("", &catalog);

        assert!(analysis.pattern.by_pada.is_empty());
        assert!(analysis.pattern.combined.is_empty());
        assert_eq!(analysis.identified_meter, "Unknown");
    }

    #[test]
    fn test_analysis_serializes_with_api_field_names() {
        let catalog = MeterCatalog::new();
        let analysis = analyze_with("mātā", &catalog);

        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("identifiedChandas").is_some());
        assert!(json["pattern"].get("byPada").is_some());
        assert_eq!(json["pattern"]["combined"], "GG");
    }
}
