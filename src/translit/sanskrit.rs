use crate::translit::{Transliterate, TransliterationError};

const VIRAMA: char = '\u{094D}';
const ANUSVARA_SIGN: char = '\u{0902}';
const CANDRABINDU: char = '\u{0901}';
const VISARGA_SIGN: char = '\u{0903}';
const AVAGRAHA: char = '\u{093D}';

/// Table-driven Devanagari ↔ IAST converter.
///
/// Stateless; conversion walks the input with one character of lookahead,
/// tracking whether the previous output was a bare consonant so the inherent
/// `a` / virama bookkeeping comes out right in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SanskritTransliterator;

impl SanskritTransliterator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn consonant_to_iast(c: char) -> Option<&'static str> {
    match c {
        'क' => Some("k"),
        'ख' => Some("kh"),
        'ग' => Some("g"),
        'घ' => Some("gh"),
        'ङ' => Some("ṅ"),
        'च' => Some("c"),
        'छ' => Some("ch"),
        'ज' => Some("j"),
        'झ' => Some("jh"),
        'ञ' => Some("ñ"),
        'ट' => Some("ṭ"),
        'ठ' => Some("ṭh"),
        'ड' => Some("ḍ"),
        'ढ' => Some("ḍh"),
        'ण' => Some("ṇ"),
        'त' => Some("t"),
        'थ' => Some("th"),
        'द' => Some("d"),
        'ध' => Some("dh"),
        'न' => Some("n"),
        'प' => Some("p"),
        'फ' => Some("ph"),
        'ब' => Some("b"),
        'भ' => Some("bh"),
        'म' => Some("m"),
        'य' => Some("y"),
        'र' => Some("r"),
        'ल' => Some("l"),
        'व' => Some("v"),
        'श' => Some("ś"),
        'ष' => Some("ṣ"),
        'स' => Some("s"),
        'ह' => Some("h"),
        _ => None,
    }
}

fn independent_vowel_to_iast(c: char) -> Option<&'static str> {
    match c {
        'अ' => Some("a"),
        'आ' => Some("ā"),
        'इ' => Some("i"),
        'ई' => Some("ī"),
        'उ' => Some("u"),
        'ऊ' => Some("ū"),
        'ऋ' => Some("ṛ"),
        'ॠ' => Some("ṝ"),
        'ऌ' => Some("ḷ"),
        'ए' => Some("e"),
        'ऐ' => Some("ai"),
        'ओ' => Some("o"),
        'औ' => Some("au"),
        _ => None,
    }
}

fn vowel_sign_to_iast(c: char) -> Option<&'static str> {
    match c {
        'ा' => Some("ā"),
        'ि' => Some("i"),
        'ी' => Some("ī"),
        'ु' => Some("u"),
        'ू' => Some("ū"),
        'ृ' => Some("ṛ"),
        'ॄ' => Some("ṝ"),
        'ॢ' => Some("ḷ"),
        'े' => Some("e"),
        'ै' => Some("ai"),
        'ो' => Some("o"),
        'ौ' => Some("au"),
        _ => None,
    }
}

/// IAST consonant tokens, aspirates before their bases for longest-match
const IAST_CONSONANTS: [(&str, char); 33] = [
    ("kh", 'ख'),
    ("gh", 'घ'),
    ("ch", 'छ'),
    ("jh", 'झ'),
    ("ṭh", 'ठ'),
    ("ḍh", 'ढ'),
    ("th", 'थ'),
    ("dh", 'ध'),
    ("ph", 'फ'),
    ("bh", 'भ'),
    ("k", 'क'),
    ("g", 'ग'),
    ("ṅ", 'ङ'),
    ("c", 'च'),
    ("j", 'ज'),
    ("ñ", 'ञ'),
    ("ṭ", 'ट'),
    ("ḍ", 'ड'),
    ("ṇ", 'ण'),
    ("t", 'त'),
    ("d", 'द'),
    ("n", 'न'),
    ("p", 'प'),
    ("b", 'ब'),
    ("m", 'म'),
    ("y", 'य'),
    ("r", 'र'),
    ("l", 'ल'),
    ("v", 'व'),
    ("ś", 'श'),
    ("ṣ", 'ष'),
    ("s", 'स'),
    ("h", 'ह'),
];

/// IAST vowel tokens: (roman, independent form, dependent sign).
/// The inherent `a` has no sign; diphthongs before their single-letter prefix.
const IAST_VOWELS: [(&str, char, Option<char>); 13] = [
    ("ai", 'ऐ', Some('ै')),
    ("au", 'औ', Some('ौ')),
    ("a", 'अ', None),
    ("ā", 'आ', Some('ा')),
    ("i", 'इ', Some('ि')),
    ("ī", 'ई', Some('ी')),
    ("u", 'उ', Some('ु')),
    ("ū", 'ऊ', Some('ू')),
    ("ṛ", 'ऋ', Some('ृ')),
    ("ṝ", 'ॠ', Some('ॄ')),
    ("ḷ", 'ऌ', Some('ॢ')),
    ("e", 'ए', Some('े')),
    ("o", 'ओ', Some('ो')),
];

impl Transliterate for SanskritTransliterator {
    fn to_iast(&self, text: &str) -> Result<String, TransliterationError> {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if let Some(roman) = consonant_to_iast(c) {
                out.push_str(roman);
                match chars.peek().copied() {
                    Some(VIRAMA) => {
                        chars.next();
                    }
                    Some(sign) if vowel_sign_to_iast(sign).is_some() => {
                        // Unwrap is guarded by the peek above
                        out.push_str(vowel_sign_to_iast(sign).expect("checked vowel sign"));
                        chars.next();
                    }
                    _ => out.push('a'),
                }
            } else if let Some(roman) = independent_vowel_to_iast(c) {
                out.push_str(roman);
            } else if vowel_sign_to_iast(c).is_some() {
                return Err(TransliterationError::OrphanVowelSign(c));
            } else {
                match c {
                    ANUSVARA_SIGN | CANDRABINDU => out.push('ṃ'),
                    VISARGA_SIGN => out.push('ḥ'),
                    AVAGRAHA => out.push('\''),
                    '।' => out.push('|'),
                    '॥' => out.push_str("||"),
                    '०'..='९' => {
                        // Devanagari digit to ASCII
                        let digit = (c as u32) - ('०' as u32);
                        out.push(char::from(b'0' + u8::try_from(digit).unwrap_or(0)));
                    }
                    // Already-roman text and punctuation pass through
                    other => out.push(other),
                }
            }
        }

        Ok(out)
    }

    fn to_devanagari(&self, text: &str) -> Result<String, TransliterationError> {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut last_was_consonant = false;
        let mut i = 0;

        while i < chars.len() {
            if let Some((len, deva)) = match_consonant(&chars[i..]) {
                // In a cluster the previous virama stands and joins the glyphs
                out.push(deva);
                out.push(VIRAMA);
                last_was_consonant = true;
                i += len;
                continue;
            }

            if let Some((len, independent, sign)) = match_vowel(&chars[i..]) {
                if last_was_consonant {
                    out.pop(); // drop the virama; the vowel closes the syllable
                    if let Some(sign) = sign {
                        out.push(sign);
                    }
                } else {
                    out.push(independent);
                }
                last_was_consonant = false;
                i += len;
                continue;
            }

            let c = chars[i];
            match c {
                'ṃ' => out.push(ANUSVARA_SIGN),
                'ḥ' => out.push(VISARGA_SIGN),
                '\'' => out.push(AVAGRAHA),
                '|' => {
                    // "||" is a double danda
                    if chars.get(i + 1) == Some(&'|') {
                        out.push('॥');
                        i += 2;
                        last_was_consonant = false;
                        continue;
                    }
                    out.push('।');
                }
                other => out.push(other),
            }
            last_was_consonant = false;
            i += 1;
        }

        Ok(out)
    }
}

fn match_consonant(rest: &[char]) -> Option<(usize, char)> {
    for (roman, deva) in IAST_CONSONANTS {
        let token: Vec<char> = roman.chars().collect();
        if rest.starts_with(&token) {
            return Some((token.len(), deva));
        }
    }
    None
}

fn match_vowel(rest: &[char]) -> Option<(usize, char, Option<char>)> {
    for (roman, independent, sign) in IAST_VOWELS {
        let token: Vec<char> = roman.chars().collect();
        if rest.starts_with(&token) {
            return Some((token.len(), independent, sign));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translit() -> SanskritTransliterator {
        SanskritTransliterator::new()
    }

    #[test]
    fn test_to_iast_basic_word() {
        assert_eq!(translit().to_iast("नमः").unwrap(), "namaḥ");
    }

    #[test]
    fn test_to_iast_conjuncts_and_vowel_signs() {
        assert_eq!(translit().to_iast("धर्मक्षेत्रे").unwrap(), "dharmakṣetre");
    }

    #[test]
    fn test_to_iast_independent_vowels_and_anusvara() {
        assert_eq!(translit().to_iast("अहिंसा").unwrap(), "ahiṃsā");
        assert_eq!(translit().to_iast("औषध").unwrap(), "auṣadha");
    }

    #[test]
    fn test_to_iast_final_virama() {
        assert_eq!(translit().to_iast("जगत्").unwrap(), "jagat");
    }

    #[test]
    fn test_to_iast_danda_and_digits() {
        assert_eq!(translit().to_iast("क। ख॥ १२").unwrap(), "ka| kha|| 12");
    }

    #[test]
    fn test_to_iast_passes_roman_through() {
        assert_eq!(
            translit().to_iast("dharmakṣetre kurukṣetre").unwrap(),
            "dharmakṣetre kurukṣetre"
        );
    }

    #[test]
    fn test_to_iast_orphan_vowel_sign_errors() {
        assert_eq!(
            translit().to_iast("ेक"),
            Err(TransliterationError::OrphanVowelSign('े'))
        );
    }

    #[test]
    fn test_to_devanagari_basic_word() {
        assert_eq!(translit().to_devanagari("namaḥ").unwrap(), "नमः");
    }

    #[test]
    fn test_to_devanagari_cluster_and_final_consonant() {
        assert_eq!(translit().to_devanagari("jagat").unwrap(), "जगत्");
        assert_eq!(translit().to_devanagari("satya").unwrap(), "सत्य");
    }

    #[test]
    fn test_to_devanagari_aspirates_use_longest_match() {
        // "dha" must become ध, not द + ह
        assert_eq!(translit().to_devanagari("dha").unwrap(), "ध");
    }

    #[test]
    fn test_to_devanagari_diphthongs() {
        assert_eq!(translit().to_devanagari("kau").unwrap(), "कौ");
        assert_eq!(translit().to_devanagari("ai").unwrap(), "ऐ");
    }

    #[test]
    fn test_to_devanagari_danda() {
        assert_eq!(translit().to_devanagari("ka | kha ||").unwrap(), "क । ख ॥");
    }

    #[test]
    fn test_roundtrip_devanagari_word() {
        let t = translit();
        let iast = t.to_iast("धर्मक्षेत्रे").unwrap();
        assert_eq!(t.to_devanagari(&iast).unwrap(), "धर्मक्षेत्रे");
    }
}
