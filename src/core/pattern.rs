use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::core::types::Weight;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid pattern symbol '{0}' (expected 'L' or 'G')")]
    InvalidSymbol(char),
}

/// A Laghu/Guru weight sequence, one symbol per syllable.
///
/// Displayed and serialized as a string over the alphabet {L, G}, the same
/// format catalog files and API payloads use (e.g. `"GGLGGLLGLGG"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pattern(Vec<Weight>);

impl Pattern {
    #[must_use]
    pub fn new(weights: Vec<Weight>) -> Self {
        Self(weights)
    }

    /// Parse from an `"LGLG…"` string. Empty input yields an empty pattern.
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        s.chars()
            .map(|c| Weight::from_symbol(c).ok_or(PatternError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Number of syllables
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn weights(&self) -> &[Weight] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Weight> + '_ {
        self.0.iter().copied()
    }

    /// Concatenate a set of per-pāda patterns into one combined pattern
    #[must_use]
    pub fn concat(patterns: &[Pattern]) -> Self {
        Self(patterns.iter().flat_map(|p| p.iter()).collect())
    }

    /// If `self` is exactly `base` repeated a whole positive number of times,
    /// return the repeat count.
    #[must_use]
    pub fn repeats_of(&self, base: &Pattern) -> Option<usize> {
        if base.is_empty() || self.is_empty() || self.len() % base.len() != 0 {
            return None;
        }
        let repeats = self.len() / base.len();
        let tiled = self.0.chunks(base.len()).all(|chunk| chunk == base.weights());
        tiled.then_some(repeats)
    }

    /// True if `self` and `other` agree on their common prefix, i.e. the
    /// shorter of the two is a prefix of the longer. Tolerates a truncated
    /// final pāda against a full canonical pattern (and vice versa).
    #[must_use]
    pub fn aligns_with(&self, other: &Pattern) -> bool {
        let n = self.len().min(other.len());
        self.0[..n] == other.0[..n]
    }

    /// Repeat `self` cyclically out to `len` symbols (truncating the tail).
    #[must_use]
    pub fn tiled_to(&self, len: usize) -> Self {
        if self.is_empty() {
            return Self::default();
        }
        Self(self.0.iter().copied().cycle().take(len).collect())
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for w in &self.0 {
            write!(f, "{w}")?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
