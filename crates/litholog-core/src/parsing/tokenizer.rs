//! Lexer for BS 5930-style descriptions.
//!
//! Two passes: unrecognized words are first run through spelling
//! correction, then phrases are matched longest-first over the corrected
//! words. Correcting before phrase assembly lets a typo inside a
//! multi-word descriptor ("firm to stif") still lex as the full phrase.

use crate::model::{
    Color, Consistency, ConstituentAmount, Density, MoistureContent, ParticleSize,
    PlasticityIndex, RockStrength, RockStructure, RockType, SoilType, SpellingCorrection,
    WeatheringGrade,
};
use crate::parsing::fuzzy;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Consistency,
    ConsistencyRange,
    Density,
    DensityRange,
    RockStrength,
    SoilType,
    RockType,
    WeatheringGrade,
    RockStructure,
    Proportion,
    Adjective,
    Color,
    MoistureContent,
    PlasticityIndex,
    ParticleSize,
    Unknown,
}

/// One lexed span. `text` preserves the original casing; `start`/`end` are
/// byte offsets into the input.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Tokenizer output: the token sequence plus any corrections applied while
/// lexing, in application order.
#[derive(Debug, Default)]
pub struct TokenizedInput {
    pub tokens: Vec<Token>,
    pub corrections: Vec<SpellingCorrection>,
}

// Longest phrase in the vocabulary ("stiff to very stiff").
const MAX_PHRASE_WORDS: usize = 4;

/// Connectives that carry no descriptive content and lex to nothing.
fn is_stopword(word: &str) -> bool {
    matches!(word, "to" | "and" | "with" | "of")
}

/// The full phrase vocabulary, keyed by normalized lowercase phrase.
static VOCABULARY: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    for c in Consistency::ALL {
        let kind = if c.is_range() {
            TokenKind::ConsistencyRange
        } else {
            TokenKind::Consistency
        };
        m.insert(c.as_str(), kind);
    }
    for d in Density::ALL {
        let kind = if d.is_range() {
            TokenKind::DensityRange
        } else {
            TokenKind::Density
        };
        m.insert(d.as_str(), kind);
    }
    for r in RockStrength::ALL {
        m.insert(r.as_str(), TokenKind::RockStrength);
    }
    for t in SoilType::ALL {
        m.insert(t.as_str(), TokenKind::SoilType);
    }
    for t in SoilType::ALL {
        // "organic" stays a soil type; the map already holds it
        if t != SoilType::Organic {
            m.insert(t.adjective(), TokenKind::Adjective);
        }
    }
    for t in RockType::ALL {
        m.insert(t.as_str(), TokenKind::RockType);
    }
    for w in WeatheringGrade::ALL {
        m.insert(w.as_str(), TokenKind::WeatheringGrade);
    }
    for s in RockStructure::ALL {
        m.insert(s.as_str(), TokenKind::RockStructure);
    }
    for a in ConstituentAmount::ALL {
        m.insert(a.as_str(), TokenKind::Proportion);
    }
    for c in Color::ALL {
        m.insert(c.as_str(), TokenKind::Color);
    }
    // US spellings accepted on input
    m.insert("gray", TokenKind::Color);
    m.insert("dark gray", TokenKind::Color);
    m.insert("light gray", TokenKind::Color);
    for mo in MoistureContent::ALL {
        m.insert(mo.as_str(), TokenKind::MoistureContent);
    }
    for p in PlasticityIndex::ALL {
        m.insert(p.as_str(), TokenKind::PlasticityIndex);
    }
    for p in ParticleSize::ALL {
        m.insert(p.as_str(), TokenKind::ParticleSize);
    }

    m
});

/// Every word that occurs inside a multi-word phrase ("weathered",
/// "plasticity", "dark"...). Such words are left alone by the correction
/// pass so they can combine during phrase matching.
static PHRASE_COMPONENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    VOCABULARY
        .keys()
        .filter(|k| k.contains(' '))
        .flat_map(|k| k.split(' '))
        .collect()
});

/// Candidate set for edit-distance correction: single-word terms plus
/// phrase components.
static WORD_CANDIDATES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut terms: HashSet<&'static str> = VOCABULARY
        .keys()
        .copied()
        .filter(|k| !k.contains(' '))
        .collect();
    terms.extend(PHRASE_COMPONENTS.iter().copied());
    let mut terms: Vec<&'static str> = terms.into_iter().collect();
    terms.sort_unstable();
    terms
});

/// A word's trimmed byte span within the input.
struct Word<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

/// Split into whitespace-delimited words, trimming surrounding punctuation
/// from each (offsets track the trimmed span). Pure-punctuation words drop.
fn split_words(text: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    let mut push = |s: usize, e: usize| {
        let raw = &text[s..e];
        let trim_start = raw.len() - raw.trim_start_matches(is_trim_char).len();
        let trim_end = raw.len() - raw.trim_end_matches(is_trim_char).len();
        if trim_start + trim_end < raw.len() {
            words.push(Word {
                text: &text[s + trim_start..e - trim_end],
                start: s + trim_start,
                end: e - trim_end,
            });
        }
    };

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                push(s, i);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        push(s, text.len());
    }

    words
}

pub(crate) fn is_trim_char(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '(' | ')' | '[' | ']' | '\'' | '"')
}

/// Lex a description. Never fails: unrecognized words become `Unknown`
/// tokens, empty input yields an empty sequence.
pub fn tokenize(text: &str) -> TokenizedInput {
    let words = split_words(text);
    let mut out = TokenizedInput::default();

    // Pass 1: normalize each word, correcting spelling where the word is
    // neither a known term, a phrase component, nor a connective
    let mut normalized: Vec<String> = Vec::with_capacity(words.len());
    for word in &words {
        let lower = word.text.to_lowercase();
        let known = VOCABULARY.contains_key(lower.as_str())
            || PHRASE_COMPONENTS.contains(lower.as_str())
            || is_stopword(&lower);
        if known {
            normalized.push(lower);
            continue;
        }
        match fuzzy::correct(&lower, &WORD_CANDIDATES, fuzzy::SIMILARITY_THRESHOLD) {
            Some((corrected, score)) => {
                out.corrections.push(SpellingCorrection {
                    original: lower,
                    corrected: corrected.clone(),
                    similarity_score: score,
                });
                normalized.push(corrected);
            }
            None => normalized.push(lower),
        }
    }

    // Pass 2: longest phrase first over the normalized words
    let mut i = 0;
    while i < words.len() {
        let mut matched = false;

        let max_n = MAX_PHRASE_WORDS.min(words.len() - i);
        for n in (1..=max_n).rev() {
            let phrase = normalized[i..i + n].join(" ");
            if let Some(&kind) = VOCABULARY.get(phrase.as_str()) {
                let start = words[i].start;
                let end = words[i + n - 1].end;
                out.tokens.push(Token {
                    kind,
                    text: text[start..end].to_string(),
                    start,
                    end,
                });
                i += n;
                matched = true;
                break;
            }
        }
        if matched {
            continue;
        }

        if !is_stopword(&normalized[i]) {
            out.tokens.push(Token {
                kind: TokenKind::Unknown,
                text: words[i].text.to_string(),
                start: words[i].start,
                end: words[i].end,
            });
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokenize("").tokens.is_empty());
        assert!(tokenize("   \t ").tokens.is_empty());
    }

    #[test]
    fn test_simple_soil_description() {
        assert_eq!(
            kinds("Firm CLAY"),
            vec![TokenKind::Consistency, TokenKind::SoilType]
        );
    }

    #[test]
    fn test_longest_phrase_wins() {
        // "firm to stiff" must lex as one range token, not three words
        assert_eq!(
            kinds("Firm to stiff CLAY"),
            vec![TokenKind::ConsistencyRange, TokenKind::SoilType]
        );
        // "very soft" must not lex as proportion + unknown
        assert_eq!(
            kinds("Very soft CLAY"),
            vec![TokenKind::Consistency, TokenKind::SoilType]
        );
    }

    #[test]
    fn test_medium_dense_beats_particle_size() {
        assert_eq!(
            kinds("Medium dense SAND"),
            vec![TokenKind::Density, TokenKind::SoilType]
        );
        assert_eq!(
            kinds("Medium SAND"),
            vec![TokenKind::ParticleSize, TokenKind::SoilType]
        );
    }

    #[test]
    fn test_four_word_range_phrases() {
        assert_eq!(
            kinds("Stiff to very stiff CLAY"),
            vec![TokenKind::ConsistencyRange, TokenKind::SoilType]
        );
        assert_eq!(
            kinds("Loose to medium dense SAND"),
            vec![TokenKind::DensityRange, TokenKind::SoilType]
        );
    }

    #[test]
    fn test_original_casing_and_offsets_preserved() {
        let result = tokenize("Firm CLAY");
        assert_eq!(result.tokens[0].text, "Firm");
        assert_eq!(result.tokens[0].start, 0);
        assert_eq!(result.tokens[0].end, 4);
        assert_eq!(result.tokens[1].text, "CLAY");
        assert_eq!(result.tokens[1].start, 5);
        assert_eq!(result.tokens[1].end, 9);
    }

    #[test]
    fn test_punctuation_trimmed() {
        let result = tokenize("Firm, brown CLAY.");
        assert_eq!(result.tokens[0].text, "Firm");
        assert_eq!(result.tokens[1].kind, TokenKind::Color);
        assert_eq!(result.tokens[2].text, "CLAY");
    }

    #[test]
    fn test_misspelling_corrected_and_recorded() {
        let result = tokenize("Firm CLAI");
        assert_eq!(result.tokens[1].kind, TokenKind::SoilType);
        assert_eq!(result.tokens[1].text, "CLAI");
        assert_eq!(result.corrections.len(), 1);
        assert_eq!(result.corrections[0].original, "clai");
        assert_eq!(result.corrections[0].corrected, "clay");
        assert!(result.corrections[0].similarity_score > 0.7);
    }

    #[test]
    fn test_correction_inside_phrase_still_forms_phrase() {
        // "higly" corrects to "highly", which only exists inside the
        // phrase "highly weathered"
        let result = tokenize("Weak higly weathered MUDSTONE");
        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::RockStrength,
                TokenKind::WeatheringGrade,
                TokenKind::RockType
            ]
        );
        assert_eq!(result.corrections.len(), 1);
        assert_eq!(result.corrections[0].corrected, "highly");
    }

    #[test]
    fn test_correction_inside_range_phrase() {
        let result = tokenize("Firm to stif CLAY");
        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::ConsistencyRange, TokenKind::SoilType]
        );
        assert_eq!(result.corrections[0].original, "stif");
    }

    #[test]
    fn test_garbage_word_stays_unknown() {
        let result = tokenize("Strong XYZ");
        assert_eq!(result.tokens[0].kind, TokenKind::RockStrength);
        assert_eq!(result.tokens[1].kind, TokenKind::Unknown);
        assert!(result.corrections.is_empty());
    }

    #[test]
    fn test_proportion_and_adjective_tokens() {
        assert_eq!(
            kinds("slightly sandy CLAY"),
            vec![
                TokenKind::Proportion,
                TokenKind::Adjective,
                TokenKind::SoilType
            ]
        );
    }

    #[test]
    fn test_weathered_rock_phrases() {
        assert_eq!(
            kinds("Strong slightly weathered LIMESTONE"),
            vec![
                TokenKind::RockStrength,
                TokenKind::WeatheringGrade,
                TokenKind::RockType
            ]
        );
    }

    #[test]
    fn test_gray_spelling_lexes_as_color() {
        assert_eq!(
            kinds("dark gray CLAY"),
            vec![TokenKind::Color, TokenKind::SoilType]
        );
    }
}
