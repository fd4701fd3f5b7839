use crate::core::pattern::Pattern;
use crate::core::types::Weight;

/// Short vowels: open syllables with these nuclei are Laghu
const SHORT_VOWELS: [char; 5] = ['a', 'i', 'u', 'ṛ', 'ḷ'];

/// Long vowels: always Guru
const LONG_VOWELS: [char; 6] = ['ā', 'ī', 'ū', 'ṝ', 'e', 'o'];

const ANUSVARA: char = 'ṃ';
const VISARGA: char = 'ḥ';

fn is_short_vowel(c: char) -> bool {
    SHORT_VOWELS.contains(&c)
}

fn is_long_vowel(c: char) -> bool {
    LONG_VOWELS.contains(&c)
}

fn is_vowel(c: char) -> bool {
    is_short_vowel(c) || is_long_vowel(c)
}

/// Lowercase and drop everything weight-neutral: whitespace, digits, stray
/// punctuation, and any pāda delimiters that survived splitting. Removing
/// separators before classification is what lets the cluster rule see
/// liaison-driven gemination across word boundaries.
fn normalize(pada: &str) -> Vec<char> {
    pada.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| {
            !(c.is_whitespace()
                || c.is_ascii_digit()
                || matches!(c, '.' | ',' | '\'' | '|' | '।' | '॥'))
        })
        .collect()
}

/// Scan a romanized (IAST) pāda into its Laghu/Guru weight sequence.
///
/// One symbol per vowel nucleus, in input order; consonants contribute
/// nothing. Unrecognized codepoints are skipped rather than rejected, so
/// corrupted input degrades to a shorter pattern instead of an error.
/// Empty or all-consonant input yields an empty pattern.
#[must_use]
pub fn scan(pada: &str) -> Pattern {
    let chars = normalize(pada);
    let mut weights = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if !is_vowel(c) {
            i += 1;
            continue;
        }

        // Diphthongs: two characters, one heavy syllable
        if c == 'a' && matches!(chars.get(i + 1), Some('i' | 'u')) {
            weights.push(Weight::Guru);
            i += 2;
            continue;
        }

        if is_long_vowel(c) {
            weights.push(Weight::Guru);
            i += 1;
            continue;
        }

        // Short vowel: heavy when closed by anusvāra/visarga or a cluster.
        // The cluster rule needs two real following characters; a pāda-final
        // vowel or a single trailing consonant leaves the syllable light.
        let weight = match (chars.get(i + 1), chars.get(i + 2)) {
            (Some(&ANUSVARA | &VISARGA), _) => Weight::Guru,
            (Some(&n1), Some(&n2)) if !is_vowel(n1) && !is_vowel(n2) => Weight::Guru,
            _ => Weight::Laghu,
        };
        weights.push(weight);
        i += 1;
    }

    Pattern::new(weights)
}
