//! Syllable-weight classification (scansion) for romanized Sanskrit.
//!
//! The engine walks a normalized character array and emits one [`Weight`]
//! per vowel nucleus, applying the classical rules in precedence order:
//!
//! 1. Diphthong (`ai`, `au`) → Guru (consumes two characters)
//! 2. Long vowel (`ā ī ū ṝ e o`) → Guru
//! 3. Short vowel before anusvāra (`ṃ`) or visarga (`ḥ`) → Guru
//! 4. Short vowel before a consonant cluster → Guru
//! 5. Otherwise → Laghu
//!
//! Normalization strips whitespace before classification, so gemination
//! across a word boundary ("tat tvam") is visible to the cluster rule.
//!
//! [`Weight`]: crate::core::types::Weight

pub mod engine;

pub use engine::scan;
