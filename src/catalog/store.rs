use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::pattern::Pattern;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Canonical pattern field of a catalog entry: a single pattern string or a
/// list of accepted variants (e.g. Upajāti mixes Indravajrā and Upendravajrā
/// pādas). Matching uses the first well-formed variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternField {
    Single(String),
    Variants(Vec<String>),
}

impl PatternField {
    /// First raw pattern string, regardless of validity
    #[must_use]
    pub fn first_raw(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Variants(v) => v.first().map(String::as_str),
        }
    }
}

/// One known meter from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeterDefinition {
    /// Display name (e.g. "Vasantatilakā")
    pub name: String,

    /// Canonical weight pattern(s); absent for meters identified by
    /// built-in rules (Anuṣṭubh) or not yet cataloged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternField>,

    /// Expected syllables per pāda, informational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllables_per_pada: Option<usize>,

    /// Gaṇa decomposition (e.g. "ta-bha-ja-ja-ga-ga"), informational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gana: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MeterDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: Some(PatternField::Single(pattern.into())),
            syllables_per_pada: None,
            gana: None,
            description: None,
        }
    }

    /// The canonical pattern, if this entry carries a well-formed one.
    ///
    /// Returns `None` for a missing, empty, or non-LG pattern string — such
    /// entries are excluded from matching but never rejected.
    #[must_use]
    pub fn canonical_pattern(&self) -> Option<Pattern> {
        let raw = self.pattern.as_ref()?.first_raw()?.trim();
        if raw.is_empty() {
            return None;
        }
        Pattern::parse(raw).ok()
    }
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub meters: Vec<MeterDefinition>,
}

/// The meter catalog with a name index
#[derive(Debug, Default)]
pub struct MeterCatalog {
    /// All meters, in catalog order (order is the matching tie-break)
    pub meters: Vec<MeterDefinition>,

    /// Index: meter name -> index in meters vec
    name_to_index: HashMap<String, usize>,
}

impl MeterCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time; validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/meters.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            eprintln!(
                "Warning: Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        let mut catalog = Self::new();
        for meter in data.meters {
            catalog.add_meter(meter);
        }

        Ok(catalog)
    }

    /// Add a meter to the catalog
    pub fn add_meter(&mut self, meter: MeterDefinition) {
        let index = self.meters.len();
        self.name_to_index.insert(meter.name.clone(), index);
        self.meters.push(meter);
    }

    /// Get a meter by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MeterDefinition> {
        self.name_to_index.get(name).map(|&idx| &self.meters[idx])
    }

    /// Iterate matchable entries: those with a well-formed canonical pattern,
    /// in catalog order. Malformed entries are silently skipped.
    pub fn valid_meters(&self) -> impl Iterator<Item = (&MeterDefinition, Pattern)> {
        self.meters
            .iter()
            .filter_map(|m| m.canonical_pattern().map(|p| (m, p)))
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            meters: self.meters.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of meters in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.meters.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = MeterCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_get_by_name() {
        let catalog = MeterCatalog::load_embedded().unwrap();

        let meter = catalog.get("Vasantatilakā");
        assert!(meter.is_some());
        let meter = meter.unwrap();
        assert_eq!(meter.syllables_per_pada, Some(14));
        assert!(meter.canonical_pattern().is_some());
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = MeterCatalog::load_embedded().unwrap();
        assert!(catalog.get("no_such_meter").is_none());
    }

    #[test]
    fn test_embedded_anustubh_has_no_pattern() {
        // The Anuṣṭubh entry documents the meter but is matched by the
        // built-in rule, so it must not surface as a matchable pattern
        let catalog = MeterCatalog::load_embedded().unwrap();
        let anustubh = catalog.get("Anuṣṭubh").unwrap();
        assert!(anustubh.canonical_pattern().is_none());
        assert!(catalog.valid_meters().all(|(m, _)| m.name != "Anuṣṭubh"));
    }

    #[test]
    fn test_variant_pattern_uses_first() {
        let catalog = MeterCatalog::load_embedded().unwrap();
        let upajati = catalog.get("Upajāti").unwrap();
        assert_eq!(
            upajati.canonical_pattern().unwrap().to_string(),
            "GGLGGLLGLGG"
        );
    }

    #[test]
    fn test_malformed_entries_skipped_not_fatal() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00Z",
            "meters": [
                {"name": "good", "pattern": "LGLG"},
                {"name": "empty", "pattern": ""},
                {"name": "whitespace", "pattern": "   "},
                {"name": "bad-symbols", "pattern": "LGXG"},
                {"name": "missing"}
            ]
        }"#;
        let catalog = MeterCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 5);

        let valid: Vec<&str> = catalog.valid_meters().map(|(m, _)| m.name.as_str()).collect();
        assert_eq!(valid, vec!["good"]);
    }

    #[test]
    fn test_catalog_to_json() {
        let catalog = MeterCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"meters\""));
        assert!(json.contains("Vasantatilakā"));
    }

    #[test]
    fn test_add_meter() {
        let mut catalog = MeterCatalog::new();
        assert_eq!(catalog.len(), 0);

        catalog.add_meter(MeterDefinition::new("Test", "LGLG"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Test").is_some());
    }
}
