use crate::core::pattern::Pattern;
use crate::core::types::Weight;

/// Safely convert usize to f64 for similarity calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Unit-cost Levenshtein distance between two weight sequences.
///
/// Standard dynamic-programming table of size `(len(a)+1) × (len(b)+1)`;
/// a Laghu/Guru mismatch costs exactly 1, like any substitution.
#[must_use]
pub fn levenshtein(a: &[Weight], b: &[Weight]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}

/// Similarity of an observed combined pattern against a canonical pattern
/// tiled out to the same length: `1 − distance / observed_length`.
#[must_use]
pub fn tiled_similarity(observed: &Pattern, canonical: &Pattern) -> f64 {
    if observed.is_empty() || canonical.is_empty() {
        return 0.0;
    }
    let tiled = canonical.tiled_to(observed.len());
    let distance = levenshtein(observed.weights(), tiled.weights());
    1.0 - count_to_f64(distance) / count_to_f64(observed.len())
}

/// Best fuzzy candidate seen so far.
///
/// Threaded as an immutable accumulator through a fold over catalog entries;
/// `better_of` keeps the earlier candidate on ties so catalog order is the
/// tie-break.
#[derive(Debug, Clone)]
pub struct FuzzyCandidate {
    pub name: String,
    pub similarity: f64,
    pub canonical: Pattern,
}

impl FuzzyCandidate {
    #[must_use]
    pub fn better_of(best: Option<Self>, challenger: Self) -> Option<Self> {
        match best {
            Some(current) if current.similarity >= challenger.similarity => Some(current),
            _ => Some(challenger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(s: &str) -> Pattern {
        Pattern::parse(s).unwrap()
    }

    #[test]
    fn test_levenshtein_identical() {
        let p = pat("LGLG");
        assert_eq!(levenshtein(p.weights(), p.weights()), 0);
    }

    #[test]
    fn test_levenshtein_substitution() {
        assert_eq!(levenshtein(pat("LGLG").weights(), pat("LGGG").weights()), 1);
    }

    #[test]
    fn test_levenshtein_insert_delete() {
        assert_eq!(levenshtein(pat("LGL").weights(), pat("LGLG").weights()), 1);
        assert_eq!(levenshtein(pat("").weights(), pat("GGG").weights()), 3);
    }

    #[test]
    fn test_tiled_similarity_exact() {
        let observed = pat("LGGLGGLGG");
        let canonical = pat("LGG");
        assert!((tiled_similarity(&observed, &canonical) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiled_similarity_one_off() {
        // 1 mismatch over 20 symbols -> 0.95
        let canonical = pat("LGLGLGLGLG");
        let mut symbols = canonical.tiled_to(20).to_string().into_bytes();
        symbols[2] = b'G';
        let observed = pat(std::str::from_utf8(&symbols).unwrap());
        assert!((tiled_similarity(&observed, &canonical) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_tiled_similarity_empty_inputs() {
        assert!((tiled_similarity(&pat(""), &pat("LG")) - 0.0).abs() < 1e-9);
        assert!((tiled_similarity(&pat("LG"), &pat("")) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_candidate_keeps_earlier_on_tie() {
        let first = FuzzyCandidate {
            name: "first".to_string(),
            similarity: 0.9,
            canonical: pat("LG"),
        };
        let second = FuzzyCandidate {
            name: "second".to_string(),
            similarity: 0.9,
            canonical: pat("GL"),
        };

        let best = FuzzyCandidate::better_of(None, first);
        let best = FuzzyCandidate::better_of(best, second);
        assert_eq!(best.unwrap().name, "first");
    }
}
