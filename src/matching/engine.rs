use serde::Serialize;

use crate::catalog::MeterCatalog;
use crate::core::pattern::Pattern;
use crate::core::types::{MatchKind, Weight};
use crate::matching::scoring::{tiled_similarity, FuzzyCandidate};

/// Minimum similarity for a fuzzy identification to be reported
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;

/// Tunable knobs for identification
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Fuzzy matches below this similarity fall through to Unknown / Mixed
    pub fuzzy_threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

/// Result of identifying a verse's meter
#[derive(Debug, Clone, Serialize)]
pub struct Identification {
    /// Meter name, or "Unknown" / "Unknown / Mixed"
    pub meter: String,

    /// Which tier produced the identification
    pub kind: MatchKind,

    /// Similarity score, present only for fuzzy identifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,

    /// Human-readable explanation of the identification
    pub explanation: String,
}

/// Identifies meters by running per-pāda patterns through a fixed sequence
/// of tiers, from strictest to loosest:
///
/// 1. empty input
/// 2. exact cyclic repeat of a cataloged pattern
/// 3. per-pāda prefix alignment with a cataloged pattern
/// 4. the built-in Anuṣṭubh rule (catalog-independent)
/// 5. fuzzy similarity against tiled catalog patterns
/// 6. Unknown / Mixed
///
/// Within a tier, catalog order breaks ties: the first matching entry wins.
pub struct MatchingEngine<'a> {
    catalog: &'a MeterCatalog,
    config: MatchConfig,
}

impl<'a> MatchingEngine<'a> {
    #[must_use]
    pub fn new(catalog: &'a MeterCatalog) -> Self {
        Self::with_config(catalog, MatchConfig::default())
    }

    #[must_use]
    pub fn with_config(catalog: &'a MeterCatalog, config: MatchConfig) -> Self {
        Self { catalog, config }
    }

    /// Identify the meter of a verse from its per-pāda weight patterns.
    #[must_use]
    pub fn identify(&self, per_pada: &[Pattern]) -> Identification {
        let combined = Pattern::concat(per_pada);

        if combined.is_empty() {
            return Identification {
                meter: "Unknown".to_string(),
                kind: MatchKind::Unknown,
                similarity: None,
                explanation: "Input was empty or contained no recognizable vowels.".to_string(),
            };
        }

        if let Some(id) = self.match_exact_repeat(&combined) {
            return id;
        }

        if let Some(id) = self.match_pada_alignment(per_pada) {
            return id;
        }

        if let Some(id) = match_anustubh(&combined) {
            return id;
        }

        if let Some(id) = self.match_fuzzy(&combined) {
            return id;
        }

        Identification {
            meter: "Unknown / Mixed".to_string(),
            kind: MatchKind::Unknown,
            similarity: None,
            explanation: format!(
                "Could not match any standard chandas. Full pattern: '{}' (length {}).",
                combined,
                combined.len()
            ),
        }
    }

    /// Tier 2: the combined pattern is a whole number of repeats of a
    /// cataloged pattern.
    fn match_exact_repeat(&self, combined: &Pattern) -> Option<Identification> {
        self.catalog.valid_meters().find_map(|(meter, base)| {
            combined.repeats_of(&base).map(|repeats| Identification {
                meter: meter.name.clone(),
                kind: MatchKind::ExactRepeat,
                similarity: None,
                explanation: format!(
                    "Matches the {} pattern. (Detected {} pāda/s.)",
                    meter.name, repeats
                ),
            })
        })
    }

    /// Tier 3: every pāda agrees with a cataloged pattern as far as it goes,
    /// in either direction (truncated or overrun pādas both align).
    fn match_pada_alignment(&self, per_pada: &[Pattern]) -> Option<Identification> {
        self.catalog.valid_meters().find_map(|(meter, base)| {
            if per_pada.iter().all(|pada| pada.aligns_with(&base)) {
                Some(Identification {
                    meter: meter.name.clone(),
                    kind: MatchKind::PadaAlignment,
                    similarity: None,
                    explanation: format!(
                        "All pādas align (fully or partially) with the {} pattern ({}).",
                        meter.name, base
                    ),
                })
            } else {
                None
            }
        })
    }

    /// Tier 5: best tiled-similarity candidate over the catalog, accepted
    /// only above the configured threshold.
    fn match_fuzzy(&self, combined: &Pattern) -> Option<Identification> {
        let best = self
            .catalog
            .valid_meters()
            .fold(None, |best, (meter, base)| {
                let challenger = FuzzyCandidate {
                    name: meter.name.clone(),
                    similarity: tiled_similarity(combined, &base),
                    canonical: base,
                };
                FuzzyCandidate::better_of(best, challenger)
            })?;

        if best.similarity < self.config.fuzzy_threshold {
            return None;
        }

        Some(Identification {
            meter: best.name.clone(),
            kind: MatchKind::Fuzzy,
            similarity: Some(best.similarity),
            explanation: format!(
                "Detected pattern ({} syllables) matches {} with {:.1}% confidence.\nCanonical pattern: {}",
                combined.len(),
                best.name,
                best.similarity * 100.0,
                best.canonical
            ),
        })
    }
}

/// Tier 4: the Anuṣṭubh rule. The combined pattern divides into 8-syllable
/// chunks, each with the fifth syllable Laghu and the sixth Guru; the
/// remaining positions are free. Checked on the combined pattern so the
/// rule survives uneven pāda splitting.
fn match_anustubh(combined: &Pattern) -> Option<Identification> {
    if combined.is_empty() || combined.len() % 8 != 0 {
        return None;
    }

    let fits = |chunk: &[Weight]| chunk[4] == Weight::Laghu && chunk[5] == Weight::Guru;
    if !combined.weights().chunks(8).all(fits) {
        return None;
    }

    Some(Identification {
        meter: "Anuṣṭubh".to_string(),
        kind: MatchKind::Anustubh,
        similarity: None,
        explanation: "Matches Anuṣṭubh (8-syllable pādas, 5th Laghu, 6th Guru).".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MeterDefinition;

    fn pat(s: &str) -> Pattern {
        Pattern::parse(s).unwrap()
    }

    fn catalog_of(entries: &[(&str, &str)]) -> MeterCatalog {
        let mut catalog = MeterCatalog::new();
        for (name, pattern) in entries {
            catalog.add_meter(MeterDefinition::new(*name, *pattern));
        }
        catalog
    }

    #[test]
    fn test_empty_input_is_unknown() {
        let catalog = catalog_of(&[("Indravajrā", "GGLGGLLGLGG")]);
        let engine = MatchingEngine::new(&catalog);

        let id = engine.identify(&[]);
        assert_eq!(id.meter, "Unknown");
        assert_eq!(id.kind, MatchKind::Unknown);
        assert!(id.explanation.contains("empty"));

        // Pādas that produced no syllables behave like no pādas at all
        let id = engine.identify(&[pat(""), pat("")]);
        assert_eq!(id.meter, "Unknown");
    }

    #[test]
    fn test_exact_repeat_match() {
        let catalog = catalog_of(&[("Vasantatilakā", "GGLGLLLGLGGLGG")]);
        let engine = MatchingEngine::new(&catalog);

        let pada = pat("GGLGLLLGLGGLGG");
        let id = engine.identify(&[pada.clone(), pada]);

        assert_eq!(id.meter, "Vasantatilakā");
        assert_eq!(id.kind, MatchKind::ExactRepeat);
        assert!(id.explanation.contains('2'));
    }

    #[test]
    fn test_exact_repeat_first_catalog_entry_wins() {
        let catalog = catalog_of(&[("First", "LGLG"), ("Second", "LGLG")]);
        let engine = MatchingEngine::new(&catalog);

        let id = engine.identify(&[pat("LGLG")]);
        assert_eq!(id.meter, "First");
        assert_eq!(id.kind, MatchKind::ExactRepeat);
    }

    #[test]
    fn test_pada_alignment_truncated_padas() {
        let catalog = catalog_of(&[("Indravajrā", "GGLGGLLGLGG")]);
        let engine = MatchingEngine::new(&catalog);

        // Three full pādas plus one cut short: no cyclic repeat, but every
        // pāda agrees with the canonical pattern as far as it goes
        let full = pat("GGLGGLLGLGG");
        let short = pat("GGLGGLL");
        let id = engine.identify(&[full.clone(), full.clone(), full, short]);

        assert_eq!(id.meter, "Indravajrā");
        assert_eq!(id.kind, MatchKind::PadaAlignment);
    }

    #[test]
    fn test_pada_alignment_rejects_disagreement() {
        let catalog = catalog_of(&[("Indravajrā", "GGLGGLLGLGG")]);
        let engine = MatchingEngine::new(&catalog);

        // Second symbol disagrees, so alignment must not fire
        let id = engine.identify(&[pat("GL")]);
        assert_ne!(id.kind, MatchKind::PadaAlignment);
    }

    #[test]
    fn test_anustubh_with_empty_catalog() {
        let catalog = MeterCatalog::new();
        let engine = MatchingEngine::new(&catalog);

        let pada = pat("LLLLLGGL");
        let id = engine.identify(&[pada.clone(), pada.clone(), pada.clone(), pada]);

        assert_eq!(id.meter, "Anuṣṭubh");
        assert_eq!(id.kind, MatchKind::Anustubh);
        assert!(id.explanation.contains("Anuṣṭubh"));
    }

    #[test]
    fn test_anustubh_requires_fifth_laghu_sixth_guru() {
        let catalog = MeterCatalog::new();
        let engine = MatchingEngine::new(&catalog);

        // Fifth syllable Guru: not Anuṣṭubh
        let id = engine.identify(&[pat("LLLLGGGL")]);
        assert_ne!(id.kind, MatchKind::Anustubh);

        // Sixth syllable Laghu: not Anuṣṭubh
        let id = engine.identify(&[pat("LLLLLLGL")]);
        assert_ne!(id.kind, MatchKind::Anustubh);

        // Seven syllables: not Anuṣṭubh
        let id = engine.identify(&[pat("LLLLLGG")]);
        assert_ne!(id.kind, MatchKind::Anustubh);
    }

    #[test]
    fn test_fuzzy_match_above_threshold() {
        let catalog = catalog_of(&[("Cyclic", "LGLGLGLGLG")]);
        let engine = MatchingEngine::new(&catalog);

        // Two repeats with one flipped symbol: 19/20 agree -> 0.95.
        // The flip also breaks exact repeat and prefix alignment.
        let id = engine.identify(&[pat("LGGGLGLGLG"), pat("LGLGLGLGLG")]);

        assert_eq!(id.meter, "Cyclic");
        assert_eq!(id.kind, MatchKind::Fuzzy);
        let similarity = id.similarity.unwrap();
        assert!((similarity - 0.95).abs() < 1e-9);
        assert!(id.explanation.contains("95.0%"));
    }

    #[test]
    fn test_fuzzy_below_threshold_is_unknown_mixed() {
        let catalog = catalog_of(&[("Cyclic", "LGLGLGLGLG")]);
        let engine = MatchingEngine::new(&catalog);

        // All-Guru input: 10 substitutions over 20 symbols -> 0.5, under
        // the 0.7 threshold
        let id = engine.identify(&[pat("GGGGGGGGGG"), pat("GGGGGGGGGG")]);

        assert_eq!(id.meter, "Unknown / Mixed");
        assert_eq!(id.kind, MatchKind::Unknown);
        assert!(id.similarity.is_none());
        assert!(id.explanation.contains("GGGGGGGGGGGGGGGGGGGG"));
        assert!(id.explanation.contains("length 20"));
    }

    #[test]
    fn test_fuzzy_tie_breaks_by_catalog_order() {
        // Both entries are 5 substitutions from the input
        let catalog = catalog_of(&[("Earlier", "GGGGGGGGGG"), ("Later", "LLLLLLLLLL")]);
        let config = MatchConfig {
            fuzzy_threshold: 0.5,
        };
        let engine = MatchingEngine::with_config(&catalog, config);

        let id = engine.identify(&[pat("GGGGGLLLLL")]);
        assert_eq!(id.kind, MatchKind::Fuzzy);
        assert_eq!(id.meter, "Earlier");
    }

    #[test]
    fn test_unknown_mixed_with_empty_catalog() {
        let catalog = MeterCatalog::new();
        let engine = MatchingEngine::new(&catalog);

        let id = engine.identify(&[pat("GLLG")]);
        assert_eq!(id.meter, "Unknown / Mixed");
        assert!(id.explanation.contains("'GLLG'"));
        assert!(id.explanation.contains("length 4"));
    }

    #[test]
    fn test_malformed_catalog_entries_are_ignored() {
        let mut catalog = MeterCatalog::new();
        catalog.add_meter(MeterDefinition {
            name: "broken".to_string(),
            pattern: None,
            syllables_per_pada: None,
            gana: None,
            description: None,
        });
        catalog.add_meter(MeterDefinition::new("Good", "LGLG"));
        let engine = MatchingEngine::new(&catalog);

        let id = engine.identify(&[pat("LGLG")]);
        assert_eq!(id.meter, "Good");
        assert_eq!(id.kind, MatchKind::ExactRepeat);
    }

    #[test]
    fn test_identify_is_deterministic() {
        let catalog = catalog_of(&[("Indravajrā", "GGLGGLLGLGG")]);
        let engine = MatchingEngine::new(&catalog);

        let padas = [pat("GGLGGLLGLGG"), pat("GGLGGLL")];
        let first = engine.identify(&padas);
        let second = engine.identify(&padas);
        assert_eq!(first.meter, second.meter);
        assert_eq!(first.kind, second.kind);
        assert_eq!(first.explanation, second.explanation);
    }
}
