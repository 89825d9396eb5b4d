//! Edit-distance spelling correction for the fixed description vocabulary.
//!
//! Two tiers: a curated misspelling map for errors seen in real borehole
//! logs (authoritative, no threshold), then Levenshtein similarity against
//! the vocabulary with an inclusive 0.8 cutoff.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Minimum similarity for an edit-distance correction to be accepted.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

// Absorbs float rounding so the threshold stays inclusive at the exact
// boundary (e.g. distance 1 over length 5).
const THRESHOLD_TOLERANCE: f64 = 1e-9;

/// Standard Levenshtein distance (substitution, insertion, deletion all
/// cost 1). Case-sensitive; callers normalize case first.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity ratio in [0, 1]: `1 - distance / max(len)`. Identical
/// strings (including two empty strings) score 1.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Find the closest candidate to `word` with similarity >= `threshold`
/// (inclusive). Case-insensitive. Ties keep the earlier candidate.
pub fn fuzzy_match<'a>(word: &str, candidates: &[&'a str], threshold: f64) -> Option<&'a str> {
    let lower = word.to_lowercase();
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in candidates {
        let score = similarity_ratio(&lower, &candidate.to_lowercase());
        if score >= threshold - THRESHOLD_TOLERANCE && best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }

    best.map(|(c, _)| c)
}

/// Correct a single word against the vocabulary. The curated misspelling
/// map is consulted first and bypasses the threshold; its similarity is
/// still reported from the actual edit distance so callers can surface it.
pub fn correct(word: &str, candidates: &[&str], threshold: f64) -> Option<(String, f64)> {
    let lower = word.to_lowercase();

    if let Some(&canonical) = MISSPELLINGS.get(lower.as_str()) {
        return Some((canonical.to_string(), similarity_ratio(&lower, canonical)));
    }

    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let score = similarity_ratio(&lower, candidate);
        if score >= threshold - THRESHOLD_TOLERANCE && best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }

    best.map(|(c, s)| (c.to_string(), s))
}

/// Misspellings observed in field logs, keyed lowercase. Values are
/// canonical vocabulary terms.
static MISSPELLINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Soil types
        ("clai", "clay"),
        ("clayy", "clay"),
        ("caly", "clay"),
        ("cley", "clay"),
        ("klay", "clay"),
        ("cllay", "clay"),
        ("sitl", "silt"),
        ("silte", "silt"),
        ("siltt", "silt"),
        ("cilt", "silt"),
        ("snad", "sand"),
        ("sandd", "sand"),
        ("sadn", "sand"),
        ("gravell", "gravel"),
        ("gravle", "gravel"),
        ("grvel", "gravel"),
        ("grevel", "gravel"),
        ("pete", "peat"),
        ("peet", "peat"),
        ("paet", "peat"),
        ("orgnic", "organic"),
        ("organick", "organic"),
        // Constituent adjectives
        ("sandey", "sandy"),
        ("siltey", "silty"),
        ("clayed", "clayey"),
        ("gravely", "gravelly"),
        ("gravelley", "gravelly"),
        ("peatey", "peaty"),
        // Rock types
        ("limstone", "limestone"),
        ("limeston", "limestone"),
        ("limestne", "limestone"),
        ("sandston", "sandstone"),
        ("sandstne", "sandstone"),
        ("sanstone", "sandstone"),
        ("mudston", "mudstone"),
        ("mudstne", "mudstone"),
        ("shal", "shale"),
        ("shail", "shale"),
        ("granit", "granite"),
        ("grainte", "granite"),
        ("basallt", "basalt"),
        ("baslt", "basalt"),
        ("chalc", "chalk"),
        ("chaulk", "chalk"),
        ("dolomit", "dolomite"),
        ("dolamite", "dolomite"),
        ("quartzit", "quartzite"),
        ("quarzite", "quartzite"),
        ("slatte", "slate"),
        ("shist", "schist"),
        ("scist", "schist"),
        ("gniess", "gneiss"),
        ("gneis", "gneiss"),
        ("marbel", "marble"),
        ("marbl", "marble"),
        ("conglomerat", "conglomerate"),
        ("conglomarate", "conglomerate"),
        ("brecia", "breccia"),
        ("breccea", "breccia"),
        // Consistency / density / strength grades
        ("ferm", "firm"),
        ("frim", "firm"),
        ("stif", "stiff"),
        ("stiif", "stiff"),
        ("sofft", "soft"),
        ("dence", "dense"),
        ("desne", "dense"),
        ("denze", "dense"),
        ("lose", "loose"),
        ("looose", "loose"),
        ("mediun", "medium"),
        ("medum", "medium"),
        ("waek", "weak"),
        ("weeak", "weak"),
        ("strng", "strong"),
        ("stong", "strong"),
        ("storng", "strong"),
        // Qualifiers and weathering
        ("sligthly", "slightly"),
        ("slighlty", "slightly"),
        ("slightley", "slightly"),
        ("moderatly", "moderately"),
        ("moderatley", "moderately"),
        ("higly", "highly"),
        ("highley", "highly"),
        ("completly", "completely"),
        ("compleatly", "completely"),
        ("fersh", "fresh"),
        ("wethered", "weathered"),
        ("weatherd", "weathered"),
        ("weathred", "weathered"),
        ("wheathered", "weathered"),
        // Structure
        ("masive", "massive"),
        ("beded", "bedded"),
        ("jionted", "jointed"),
        ("fractered", "fractured"),
        ("folliated", "foliated"),
        ("lamenated", "laminated"),
        ("laminted", "laminated"),
        // Colors and moisture
        ("brwon", "brown"),
        ("broun", "brown"),
        ("balck", "black"),
        ("yelow", "yellow"),
        ("ornage", "orange"),
        ("whte", "white"),
        ("mosit", "moist"),
        ("saterated", "saturated"),
        ("saturted", "saturated"),
        // Particle size
        ("course", "coarse"),
        ("coars", "coarse"),
    ])
});
