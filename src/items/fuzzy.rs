// src/items/fuzzy.rs
//! Approximate name matching.
//!
//! Scores are the Ratcliff/Obershelp ratio `2*M/T`, where `M` counts the
//! characters in matching blocks and `T` the characters in both strings.

use std::cmp::Ordering;

use difflib::sequencematcher::SequenceMatcher;

/// Similarity of `candidate` to `needle` in `[0, 1]`.
pub fn similarity(needle: &str, candidate: &str) -> f64 {
    let a: Vec<char> = candidate.chars().collect();
    let b: Vec<char> = needle.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let mut matcher = SequenceMatcher::new(&a, &b);
    let matched: usize = matcher.get_matching_blocks().iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total as f64
}

/// Higher score first; equal scores rank the larger name first.
fn rank(a: &(&str, f64), b: &(&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| b.0.cmp(a.0))
}

/// Best candidate scoring at least `cutoff`.
pub fn best_match<'a, I>(needle: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|c| (c, similarity(needle, c)))
        .filter(|&(_, s)| s >= cutoff)
        .min_by(rank)
        .map(|(c, _)| c)
}

/// Up to `n` candidates scoring at least `cutoff`, best first.
pub fn close_matches<'a, I>(needle: &str, candidates: I, n: usize, cutoff: f64) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(&str, f64)> = candidates
        .into_iter()
        .map(|c| (c, similarity(needle, c)))
        .filter(|&(_, s)| s >= cutoff)
        .collect();
    scored.sort_by(rank);
    scored.into_iter().take(n).map(|(c, _)| c).collect()
}
