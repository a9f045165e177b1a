//! Ranking and reporting utilities.
//!
//! The engine returns scores indexed by node id and imposes no ordering;
//! everything order-related lives here. Sorting on scores is **stable**:
//! equal scores keep their node-id order, so reports are reproducible.

use crate::{Error, Result};
use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// All `(node, score)` pairs, sorted by descending score.
///
/// Ties keep ascending node-id order (stable sort).
pub fn rank_descending(scores: &[f64]) -> Vec<(usize, f64)> {
    let mut pairs: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    pairs
}

/// Pair labels with scores and sort by descending score.
///
/// Fails with `LabelCountMismatch` when the lengths differ. Ties keep
/// ascending node-id order.
pub fn rank_labels<'a, S: AsRef<str>>(
    labels: &'a [S],
    scores: &[f64],
) -> Result<Vec<(&'a str, f64)>> {
    if labels.len() != scores.len() {
        return Err(Error::LabelCountMismatch {
            labels: labels.len(),
            node_count: scores.len(),
        });
    }
    let mut pairs: Vec<(&str, f64)> = labels
        .iter()
        .map(AsRef::as_ref)
        .zip(scores.iter().copied())
        .collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    Ok(pairs)
}

/// Render ranked pairs as one `label: score` line each, scores to 4 decimals.
pub fn render_ranking(pairs: &[(&str, f64)]) -> String {
    let mut out = String::new();
    for (label, score) in pairs {
        out.push_str(&format!("{label}: {score:.4}\n"));
    }
    out
}

/// The `k` highest-scoring nodes, descending; ties keep ascending node id.
///
/// Non-finite and non-positive scores are skipped.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }
    // Min-heap of the best k seen so far; among equal scores the larger id is
    // evicted first, matching the stable-order result below.
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (i, &score) in scores.iter().enumerate() {
        if !score.is_finite() || score <= 0.0 {
            continue;
        }
        let s = NotNan::new(score).unwrap();
        let entry = Reverse((s, Reverse(i)));
        if heap.len() < k {
            heap.push(entry);
        } else if let Some(&Reverse(min)) = heap.peek() {
            if (s, Reverse(i)) > min {
                heap.pop();
                heap.push(entry);
            }
        }
    }
    let mut results: Vec<(usize, f64)> = heap
        .into_iter()
        .map(|Reverse((s, Reverse(i)))| (i, s.into_inner()))
        .collect();
    results.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0))
    });
    results
}

/// Scale scores in place so they sum to 1 (no-op when the sum is 0).
pub fn normalize(scores: &mut [f64]) {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for s in scores {
            *s /= sum;
        }
    }
}
