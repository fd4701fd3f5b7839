//! Core data types for weights, patterns, and verses.

pub mod pattern;
pub mod types;
pub mod verse;
