//! Verse segmentation into pādas (metrical lines).

/// Characters that end a pāda: single danda, double danda, ASCII pipe, newline.
const PADA_DELIMITERS: [char; 4] = ['।', '॥', '|', '\n'];

/// Split a raw verse into its pādas.
///
/// Runs of consecutive delimiters collapse; leading/trailing delimiters and
/// whitespace-only segments are dropped. A verse with no delimiters comes back
/// as a single trimmed element; empty or whitespace-only input yields an empty
/// vector. Never fails.
#[must_use]
pub fn split_padas(verse: &str) -> Vec<String> {
    verse
        .split(PADA_DELIMITERS)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
