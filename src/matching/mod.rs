//! Meter identification.
//!
//! [`MatchingEngine`] borrows a catalog and runs per-pāda patterns through a
//! fixed sequence of tiers (exact cyclic repeat, pāda alignment, the
//! Anuṣṭubh rule, fuzzy similarity), returning the first tier that fires.
//! [`scoring`] holds the Levenshtein machinery behind the fuzzy tier.

pub mod engine;
pub mod scoring;

pub use engine::{Identification, MatchConfig, MatchingEngine, DEFAULT_FUZZY_THRESHOLD};
