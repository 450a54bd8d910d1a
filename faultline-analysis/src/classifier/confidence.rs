//! Per-match confidence estimation.
//!
//! Confidence starts from a fixed base and earns bonuses from the match
//! itself (longer matches are less likely to be coincidental) and from the
//! surrounding text (nearby correction vocabulary strengthens the signal).
//! All lengths and distances count characters, not bytes.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use faultline_core::constants::{
    BASE_CONFIDENCE, CONTEXT_BONUS_CAP, CONTEXT_KEYWORD_BONUS, CONTEXT_KEYWORDS,
    CONTEXT_WINDOW_CHARS, LONG_MATCH_BONUS, LONG_MATCH_CHARS, MEDIUM_MATCH_BONUS,
    MEDIUM_MATCH_CHARS,
};

/// Multi-needle matcher over the fixed context keywords. The keyword set
/// is static; a failed build degrades to a zero context bonus.
static CONTEXT_AUTOMATON: LazyLock<Option<AhoCorasick>> =
    LazyLock::new(|| AhoCorasick::new(CONTEXT_KEYWORDS).ok());

/// Confidence for one pattern match at byte span `start..end` of `text`.
///
/// Base 0.6, plus the highest applicable length tier (more than 50
/// characters: +0.2, more than 20: +0.1), plus 0.05 per distinct context
/// keyword found within 100 characters of the match (capped at +0.2),
/// clamped to 1.0.
pub(crate) fn pattern_confidence(text: &str, start: usize, end: usize) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    let match_chars = text[start..end].chars().count();
    if match_chars > LONG_MATCH_CHARS {
        confidence += LONG_MATCH_BONUS;
    } else if match_chars > MEDIUM_MATCH_CHARS {
        confidence += MEDIUM_MATCH_BONUS;
    }

    let window_start = step_back(text, start, CONTEXT_WINDOW_CHARS);
    let window_end = step_forward(text, end, CONTEXT_WINDOW_CHARS);
    let context = text[window_start..window_end].to_lowercase();
    let hits = distinct_keyword_hits(&context);
    confidence += CONTEXT_BONUS_CAP.min(hits as f64 * CONTEXT_KEYWORD_BONUS);

    confidence.min(1.0)
}

/// Count how many DISTINCT context keywords occur in the window. Repeats
/// of one keyword count once; overlapping occurrences of different
/// keywords each count.
fn distinct_keyword_hits(window: &str) -> usize {
    let Some(automaton) = CONTEXT_AUTOMATON.as_ref() else {
        return 0;
    };
    let mut seen = [false; CONTEXT_KEYWORDS.len()];
    for m in automaton.find_overlapping_iter(window) {
        seen[m.pattern().as_usize()] = true;
    }
    seen.iter().filter(|hit| **hit).count()
}

/// Walk `count` characters backwards from byte offset `from`, staying on
/// a character boundary. `from` must itself lie on a boundary.
fn step_back(text: &str, from: usize, count: usize) -> usize {
    text[..from]
        .char_indices()
        .rev()
        .take(count)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(from)
}

/// Walk `count` characters forwards from byte offset `from`, staying on
/// a character boundary. `from` must itself lie on a boundary.
fn step_forward(text: &str, from: usize, count: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(count)
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}
