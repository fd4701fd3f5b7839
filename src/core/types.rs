use serde::{Deserialize, Serialize};

/// Metrical weight of a single syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weight {
    /// Light syllable (short vowel, open)
    Laghu,
    /// Heavy syllable (long vowel, diphthong, or closed by cluster/anusvāra/visarga)
    Guru,
}

impl Weight {
    /// The single-letter symbol used in pattern strings
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Laghu => 'L',
            Self::Guru => 'G',
        }
    }

    /// Parse a single pattern symbol
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'L' => Some(Self::Laghu),
            'G' => Some(Self::Guru),
            _ => None,
        }
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Writing system of an input verse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    /// Devanagari block (U+0900–U+097F)
    Devanagari,
    /// IAST romanization
    Iast,
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Devanagari => write!(f, "Devanagari"),
            Self::Iast => write!(f, "IAST"),
        }
    }
}

/// Which matching tier identified the meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Combined pattern is an exact whole-number repetition of the canonical pattern
    ExactRepeat,
    /// Every pāda aligns with the canonical pattern as a prefix (either direction)
    PadaAlignment,
    /// Built-in Anuṣṭubh rule (8-syllable chunks, 5th Laghu, 6th Guru)
    Anustubh,
    /// Best edit-distance candidate above the similarity threshold
    Fuzzy,
    /// No tier produced a match
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_symbols() {
        assert_eq!(Weight::Laghu.symbol(), 'L');
        assert_eq!(Weight::Guru.symbol(), 'G');
        assert_eq!(Weight::from_symbol('L'), Some(Weight::Laghu));
        assert_eq!(Weight::from_symbol('G'), Some(Weight::Guru));
        assert_eq!(Weight::from_symbol('x'), None);
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(format!("{}{}", Weight::Guru, Weight::Laghu), "GL");
    }
}
