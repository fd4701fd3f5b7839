//! Script detection and Devanagari ↔ IAST transliteration.
//!
//! The scansion engine only ever sees romanized text; everything
//! script-related stays behind this boundary. [`Transliterate`] is the seam
//! for plugging in an external converter, and [`SanskritTransliterator`] is
//! the built-in table-driven implementation used by the CLI and web server.

pub mod sanskrit;

use thiserror::Error;

use crate::core::types::Script;

pub use sanskrit::SanskritTransliterator;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransliterationError {
    /// A dependent vowel sign appeared without a preceding consonant
    #[error("Orphan vowel sign '{0}' (no preceding consonant)")]
    OrphanVowelSign(char),
}

/// Conversion between Devanagari and IAST romanization.
///
/// Both directions must pass text already in the target script through
/// unchanged, so callers can convert unconditionally.
pub trait Transliterate {
    /// Convert to IAST romanization.
    fn to_iast(&self, text: &str) -> Result<String, TransliterationError>;

    /// Convert to Devanagari.
    fn to_devanagari(&self, text: &str) -> Result<String, TransliterationError>;
}

/// Detect the script of an input verse.
///
/// Any character in the Devanagari block (U+0900–U+097F) marks the whole
/// input as Devanagari; everything else is treated as IAST.
#[must_use]
pub fn detect_script(text: &str) -> Script {
    if text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c)) {
        Script::Devanagari
    } else {
        Script::Iast
    }
}
