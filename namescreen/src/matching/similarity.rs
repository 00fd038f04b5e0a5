//! Fuzzy string similarity for name comparison.
//!
//! Combines a character-level measure (normalized Levenshtein) with a
//! token-set measure that is insensitive to word order and extra tokens.
//! Scores live in [0,100]; identical normalized strings score exactly 100,
//! and the measure is symmetric in its arguments.

use crate::text::normalize_for_match;
use std::collections::BTreeSet;

/// Similarity between two name strings, in [0,100].
pub fn similarity(a: &str, b: &str) -> f64 {
    let na = normalize_for_match(a);
    let nb = normalize_for_match(b);

    if na == nb {
        return 100.0;
    }
    if na.is_empty() || nb.is_empty() {
        return 0.0;
    }

    let char_score = strsim::normalized_levenshtein(&na, &nb) * 100.0;
    let token_score = token_set_ratio(&na, &nb);

    char_score.max(token_score).clamp(0.0, 100.0)
}

/// Token-set ratio: compare the shared-token core against each side's
/// remainder, insensitive to word order. Inputs are assumed normalized.
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let common: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let core = common.join(" ");
    let core_plus_a = join_nonempty(&core, &only_a.join(" "));
    let core_plus_b = join_nonempty(&core, &only_b.join(" "));

    indel_ratio(&core, &core_plus_a)
        .max(indel_ratio(&core, &core_plus_b))
        .max(indel_ratio(&core_plus_a, &core_plus_b))
}

fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{left} {right}"),
    }
}

/// Indel similarity: 2·LCS / (|a| + |b|), scaled to [0,100].
fn indel_ratio(a: &str, b: &str) -> f64 {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();
    let total = chars_a.len() + chars_b.len();
    if total == 0 {
        return 100.0;
    }

    let lcs = lcs_len(&chars_a, &chars_b);
    (2.0 * lcs as f64 / total as f64) * 100.0
}

/// Longest-common-subsequence length, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_normalized_strings_score_exactly_100() {
        assert_eq!(similarity("bill johnson", "Bill  Johnson"), 100.0);
        assert_eq!(similarity("José García", "jose garcia"), 100.0);
    }

    #[test]
    fn scores_are_bounded() {
        let pairs = [
            ("william johnson", "bill johnson"),
            ("a", "completely different name"),
            ("", ""),
            ("x", ""),
        ];
        for (a, b) in pairs {
            let s = similarity(a, b);
            assert!((0.0..=100.0).contains(&s), "{a} vs {b} scored {s}");
        }
    }

    #[test]
    fn similarity_is_symmetric() {
        let pairs = [
            ("michael brown", "michelle brown"),
            ("w. johnson", "william johnson"),
            ("james smith", "smith, james"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn token_reordering_scores_full_marks() {
        assert_eq!(similarity("johnson, william", "William Johnson"), 100.0);
    }

    #[test]
    fn near_miss_first_names_score_high_but_not_perfect() {
        let s = similarity("michael brown", "michelle brown");
        assert!((85.0..100.0).contains(&s), "scored {s}");
    }

    #[test]
    fn unrelated_names_score_low() {
        let s = similarity("maria garcia", "timothy oulton");
        assert!(s < 70.0, "scored {s}");
    }

    #[test]
    fn lcs_agrees_with_hand_computed_values() {
        let a: Vec<char> = "brown michael".chars().collect();
        let b: Vec<char> = "brown michelle".chars().collect();
        assert_eq!(lcs_len(&a, &b), 12);
    }
}
