//! Text normalization helpers shared by variant generation, candidate
//! extraction, and similarity scoring.

use unicode_normalization::UnicodeNormalization;

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip diacritical marks by NFKD decomposition and dropping combining
/// characters ("José" -> "Jose").
pub fn strip_diacritics(s: &str) -> String {
    s.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

fn is_combining_mark(c: char) -> bool {
    // Combining Diacritical Marks plus the supplement/extended blocks
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{1DC0}'..='\u{1DFF}' | '\u{20D0}'..='\u{20FF}' | '\u{FE20}'..='\u{FE2F}')
}

/// Full normalization for similarity comparison: lowercase, fold diacritics,
/// map punctuation to spaces, collapse whitespace.
pub fn normalize_for_match(s: &str) -> String {
    let folded = strip_diacritics(s).to_lowercase();
    let spaced: String = folded
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    squash_whitespace(&spaced)
}

/// Case-insensitive deduplication key for a surface form.
pub fn dedup_key(s: &str) -> String {
    squash_whitespace(s).to_lowercase()
}
