//! # chandas-solver
//!
//! A library for identifying the meter (chandas) of Sanskrit verses.
//!
//! Classical Sanskrit poetry is organized by syllable weight: each syllable
//! is either Laghu (light) or Guru (heavy), and a meter is a fixed pattern
//! of weights repeated across the four pādas (quarters) of a verse. Given a
//! verse in IAST romanization or Devanagari, `chandas-solver` scans it into
//! its weight pattern and matches that pattern against a catalog of
//! classical meters.
//!
//! ## Features
//!
//! - **Scansion**: Classical prosody rules (long vowels, anusvāra/visarga,
//!   consonant clusters) applied to IAST text
//! - **Script handling**: Devanagari input is transliterated automatically;
//!   results are echoed in both scripts
//! - **Exact matching**: Detects whole-verse repeats of a known pattern
//! - **Partial matching**: Pāda-prefix alignment and the Anuṣṭubh rule for
//!   verses that only partially follow a meter
//! - **Fuzzy matching**: Levenshtein-based similarity with a confidence
//!   score for verses close to a known meter
//!
//! ## Example
//!
//! ```rust,no_run
//! use chandas_solver::{analyze, MatchConfig, MeterCatalog, SanskritTransliterator};
//!
//! // Load the embedded catalog of classical meters
//! let catalog = MeterCatalog::load_embedded().unwrap();
//!
//! let verse = "vande gurūṇāṃ caraṇāravinde | sandarśitasvātmasukhāvabodhe";
//! let result = analyze(
//!     verse,
//!     &catalog,
//!     &SanskritTransliterator::new(),
//!     MatchConfig::default(),
//! )
//! .unwrap();
//!
//! println!("{}: {}", result.identified_meter, result.pattern.combined);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Weight patterns, pāda splitting, and shared types
//! - [`scansion`]: IAST text to Laghu/Guru patterns
//! - [`translit`]: Script detection and Devanagari ↔ IAST conversion
//! - [`catalog`]: Meter catalog storage
//! - [`matching`]: Tiered identification engine and scoring
//! - [`analysis`]: End-to-end verse analysis
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based analysis

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod scansion;
pub mod translit;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use analysis::{analyze, Analysis};
pub use catalog::{MeterCatalog, MeterDefinition};
pub use core::pattern::Pattern;
pub use core::types::{MatchKind, Script, Weight};
pub use core::verse::split_padas;
pub use matching::{Identification, MatchConfig, MatchingEngine};
pub use scansion::scan;
pub use translit::{SanskritTransliterator, Transliterate};
