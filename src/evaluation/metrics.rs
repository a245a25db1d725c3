//! Ranked-list metrics over assessment names.
//!
//! Relevance is binary: a name is relevant when it appears in the ground-truth set.

use std::collections::HashSet;

/// Recall@k: fraction of the ground truth found in the first `k` names.
///
/// ```text
/// Recall@k = |top_k ∩ truth| / |truth|
/// ```
///
/// Defined as `0.0` for empty ground truth.
pub fn recall_at_k(ranked: &[&str], truth: &HashSet<&str>, k: usize) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }

    let found: HashSet<&str> = ranked
        .iter()
        .take(k)
        .copied()
        .filter(|name| truth.contains(name))
        .collect();

    found.len() as f64 / truth.len() as f64
}

/// Average Precision@k.
///
/// Walks the first `k` names; at each relevant hit adds `hits / position`. The sum is
/// divided by `min(k, |truth|)`. No hits (or empty truth) yields `0.0`. A name counted
/// once is not counted again if it repeats.
pub fn average_precision_at_k(ranked: &[&str], truth: &HashSet<&str>, k: usize) -> f64 {
    if truth.is_empty() || k == 0 {
        return 0.0;
    }

    let mut seen = HashSet::new();
    let mut hits = 0usize;
    let mut sum = 0.0f64;

    for (i, name) in ranked.iter().take(k).enumerate() {
        if truth.contains(name) && seen.insert(*name) {
            hits += 1;
            sum += hits as f64 / (i + 1) as f64;
        }
    }

    if hits == 0 {
        0.0
    } else {
        sum / k.min(truth.len()) as f64
    }
}

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
