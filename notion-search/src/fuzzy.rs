//! Weighted fuzzy string similarity on a `0..=100` scale.
//!
//! [`weighted_ratio`] combines a plain sequence ratio with partial
//! (best-window) and token-based variants so that substrings and reordered
//! words still score well. Sequence similarity comes from [`similar`]'s
//! character diff.

use std::collections::BTreeSet;

use similar::TextDiff;

/// Length ratio at which partial (windowed) matching kicks in.
const PARTIAL_THRESHOLD: f64 = 1.5;
/// Length ratio beyond which partial matches are discounted harder.
const LONG_PARTIAL_THRESHOLD: f64 = 8.0;
const PARTIAL_SCALE: f64 = 0.9;
const LONG_PARTIAL_SCALE: f64 = 0.6;
const TOKEN_SCALE: f64 = 0.95;

/// Lowercase, replace non-alphanumerics with spaces, and trim.
pub fn preprocess(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();
    cleaned.trim().to_owned()
}

/// Plain sequence similarity in `0.0..=100.0`.
pub fn ratio(a: &str, b: &str) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 100.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => f64::from(TextDiff::from_chars(a, b).ratio()) * 100.0,
    }
}

/// Best [`ratio`] of the shorter string against every equally long window
/// of the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    if short.is_empty() {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let long_chars: Vec<char> = long.chars().collect();
    let width = short.chars().count();
    let mut best: f64 = 0.0;
    for start in 0..=(long_chars.len() - width) {
        let window: String = long_chars[start..start + width].iter().collect();
        best = best.max(ratio(short, &window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

fn sorted_tokens(s: &str) -> String {
    let mut toks = tokens(s);
    toks.sort_unstable();
    toks.join(" ")
}

/// Similarity after sorting the words of both strings.
pub fn token_sort_ratio(a: &str, b: &str, partial: bool) -> f64 {
    let (sa, sb) = (sorted_tokens(a), sorted_tokens(b));
    if partial {
        partial_ratio(&sa, &sb)
    } else {
        ratio(&sa, &sb)
    }
}

/// Similarity over the shared and leftover word sets of both strings.
pub fn token_set_ratio(a: &str, b: &str, partial: bool) -> f64 {
    let set_a: BTreeSet<&str> = tokens(a).into_iter().collect();
    let set_b: BTreeSet<&str> = tokens(b).into_iter().collect();
    let common: Vec<&str> = set_a.intersection(&set_b).copied().collect();

    if partial && !common.is_empty() {
        return 100.0;
    }

    let only_a: Vec<&str> = set_a.difference(&set_b).copied().collect();
    let only_b: Vec<&str> = set_b.difference(&set_a).copied().collect();

    let base = common.join(" ");
    let with_a = join_nonempty(&base, &only_a.join(" "));
    let with_b = join_nonempty(&base, &only_b.join(" "));

    let score = |x: &str, y: &str| {
        if partial {
            partial_ratio(x, y)
        } else {
            ratio(x, y)
        }
    };

    if base.is_empty() {
        return score(&with_a, &with_b);
    }
    score(&base, &with_a)
        .max(score(&base, &with_b))
        .max(score(&with_a, &with_b))
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_owned(),
        (_, true) => head.to_owned(),
        _ => format!("{head} {tail}"),
    }
}

/// Weighted similarity of `a` and `b`, rounded to `0..=100`.
///
/// Both inputs are preprocessed (case-folded, punctuation stripped).
/// Either side being empty after preprocessing yields 0.
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    let (pa, pb) = (preprocess(a), preprocess(b));
    if pa.is_empty() || pb.is_empty() {
        return 0;
    }

    let base = ratio(&pa, &pb);
    let (len_a, len_b) = (pa.chars().count() as f64, pb.chars().count() as f64);
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let best = if len_ratio < PARTIAL_THRESHOLD {
        let sort = token_sort_ratio(&pa, &pb, false) * TOKEN_SCALE;
        let set = token_set_ratio(&pa, &pb, false) * TOKEN_SCALE;
        base.max(sort).max(set)
    } else {
        let scale = if len_ratio > LONG_PARTIAL_THRESHOLD {
            LONG_PARTIAL_SCALE
        } else {
            PARTIAL_SCALE
        };
        let partial = partial_ratio(&pa, &pb) * scale;
        let sort = token_sort_ratio(&pa, &pb, true) * TOKEN_SCALE * scale;
        let set = token_set_ratio(&pa, &pb, true) * TOKEN_SCALE * scale;
        base.max(partial).max(sort).max(set)
    };

    best.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(weighted_ratio("Roadmap", "roadmap"), 100);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(weighted_ratio("", "roadmap"), 0);
        assert_eq!(weighted_ratio("roadmap", "  "), 0);
        assert_eq!(weighted_ratio("!!!", "roadmap"), 0);
    }

    #[test]
    fn reordered_words_score_high() {
        assert_eq!(weighted_ratio("doc design", "design doc"), 95);
    }

    #[test]
    fn substring_scores_high() {
        let score = weighted_ratio("Product Roadmap 2026", "roadmap");
        assert!(score >= 90, "got {score}");
    }

    #[test]
    fn unrelated_scores_low() {
        let score = weighted_ratio("grocery list", "roadmap");
        assert!(score < 50, "got {score}");
    }

    #[test]
    fn closer_title_scores_higher() {
        let near = weighted_ratio("meeting notes", "meeting note");
        let far = weighted_ratio("weekly planning", "meeting note");
        assert!(near > far, "{near} <= {far}");
    }

    #[test]
    fn partial_ratio_finds_window() {
        assert!((partial_ratio("map", "roadmap") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_handles_empty() {
        assert!((ratio("", "") - 100.0).abs() < f64::EPSILON);
        assert!(ratio("", "a").abs() < f64::EPSILON);
    }

    #[test]
    fn preprocess_strips_punctuation_and_case() {
        assert_eq!(preprocess("  Q3-Plan! "), "q3 plan");
    }

    #[test]
    fn scoring_is_deterministic() {
        let first = weighted_ratio("Team Wiki", "wiki");
        let second = weighted_ratio("Team Wiki", "wiki");
        assert_eq!(first, second);
    }
}
