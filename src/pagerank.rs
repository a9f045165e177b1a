//! Weighted PageRank power iteration.
//!
//! Each round, a source with positive total outgoing weight distributes
//! `damping * rank` among its targets proportionally to edge weight:
//! \[
//!   P(u \to v) = \frac{w(u,v)}{\sum_x w(u,x)}
//! \]
//! A source with zero total outgoing weight (a dangling node) distributes
//! nothing: its mass is dropped for that round unless
//! [`PageRankConfig::redistribute_dangling`] is set, in which case the dropped
//! mass is spread uniformly over all nodes. Dropping is the default; under it,
//! total mass can sum to less than 1.

use crate::graph::WeightedEdges;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Probability of following an edge vs taking the uniform random jump.
    pub damping: f64,
    /// Number of power-iteration rounds. Zero returns the uniform vector.
    pub iterations: usize,
    /// Early-stop threshold on the L1 delta between successive rank vectors.
    /// `None` runs exactly [`iterations`](Self::iterations) rounds.
    pub tolerance: Option<f64>,
    /// Spread dangling-node mass uniformly instead of dropping it.
    pub redistribute_dangling: bool,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self { damping: 0.85, iterations: 100, tolerance: None, redistribute_dangling: false }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(Error::InvalidArgument(format!(
                "damping must be in [0, 1] (got {})",
                self.damping
            )));
        }
        if let Some(tol) = self.tolerance {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "tolerance must be finite and > 0 (got {tol})"
                )));
            }
        }
        Ok(())
    }
}

/// Statistics from one power-iteration run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankRun {
    /// Final scores, indexed by node id.
    pub scores: Vec<f64>,
    /// Rounds actually executed.
    pub iterations: usize,
    /// L1 delta of the last completed round (0.0 if no round ran).
    pub diff_l1: f64,
    /// Whether the tolerance stop fired before the iteration budget ran out.
    pub converged: bool,
}

/// Weighted PageRank scores, one per node id.
///
/// Unchecked fast path: an empty graph returns an empty vector, negative
/// weights are clamped to zero. Use [`pagerank_checked`] to reject bad input
/// instead.
pub fn pagerank<G: WeightedEdges>(graph: &G, config: PageRankConfig) -> Vec<f64> {
    pagerank_run(graph, config).scores
}

/// Validating entry point.
///
/// Rejects eagerly, before any iteration:
/// - an invalid config (see [`PageRankConfig::validate`])
/// - an empty graph (`InvalidArgument`)
/// - an edge target `>= node_count` (`InvalidNode`)
/// - a negative or non-finite edge weight (`InvalidArgument`)
pub fn pagerank_checked<G: WeightedEdges>(graph: &G, config: PageRankConfig) -> Result<Vec<f64>> {
    Ok(pagerank_checked_run(graph, config)?.scores)
}

pub fn pagerank_checked_run<G: WeightedEdges>(
    graph: &G,
    config: PageRankConfig,
) -> Result<PageRankRun> {
    config.validate()?;
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::InvalidArgument("node count must be > 0".to_string()));
    }
    for u in 0..n {
        for &(v, w) in graph.out_edges(u) {
            if v >= n {
                return Err(Error::InvalidNode { node: v, node_count: n });
            }
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "edge weight must be finite and non-negative (got {w} on {u} -> {v})"
                )));
            }
        }
    }
    Ok(pagerank_run(graph, config))
}

pub fn pagerank_run<G: WeightedEdges>(graph: &G, config: PageRankConfig) -> PageRankRun {
    let n = graph.node_count();
    if n == 0 {
        return PageRankRun { scores: Vec::new(), iterations: 0, diff_l1: 0.0, converged: false };
    }

    let n_f64 = n as f64;
    let mut scores = vec![1.0 / n_f64; n];
    let mut new_scores = vec![0.0; n];

    // Total outgoing weight per node, computed once; zero marks a dangling node.
    let out_wsum: Vec<f64> = (0..n)
        .map(|u| graph.out_edges(u).iter().map(|&(_, w)| w.max(0.0)).sum())
        .collect();

    let mut iterations = 0usize;
    let mut last_diff = 0.0f64;
    let mut converged = false;
    for _ in 0..config.iterations {
        iterations += 1;

        let teleport = (1.0 - config.damping) / n_f64;
        let base = if config.redistribute_dangling {
            let dangling_sum: f64 = out_wsum
                .iter()
                .enumerate()
                .filter(|(_, &ws)| ws == 0.0)
                .map(|(i, _)| scores[i])
                .sum();
            teleport + config.damping * dangling_sum / n_f64
        } else {
            teleport
        };
        new_scores.fill(base);

        for u in 0..n {
            let ws = out_wsum[u];
            if ws > 0.0 {
                for &(v, w) in graph.out_edges(u) {
                    if w > 0.0 {
                        new_scores[v] += config.damping * scores[u] * (w / ws);
                    }
                }
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();
        last_diff = diff;
        std::mem::swap(&mut scores, &mut new_scores);

        if let Some(tol) = config.tolerance {
            if diff < tol {
                converged = true;
                break;
            }
        }
    }

    PageRankRun { scores, iterations, diff_l1: last_diff, converged }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyList;

    #[test]
    fn weight_biases_toward_heavier_edge() {
        // 0 links to 1 twice as strongly as to 2, so 1 should rank >= 2.
        let g = AdjacencyList::from_edges(3, &[(0, 1, 2.0), (0, 2, 1.0)]).unwrap();
        let scores = pagerank(&g, PageRankConfig::default());
        assert!(scores[1] >= scores[2], "scores[1]={} scores[2]={}", scores[1], scores[2]);
    }

    #[test]
    fn zero_iterations_returns_uniform() {
        let g = AdjacencyList::from_edges(4, &[(0, 1, 1.0)]).unwrap();
        let cfg = PageRankConfig { iterations: 0, ..PageRankConfig::default() };
        let run = pagerank_run(&g, cfg);
        assert_eq!(run.scores, vec![0.25; 4]);
        assert_eq!(run.iterations, 0);
        assert_eq!(run.diff_l1, 0.0);
        assert!(!run.converged);
    }

    #[test]
    fn redistribution_restores_unit_mass() {
        // 0 -> 1 (2.0), 0 -> 2 (1.0), 1 -> 2 (1.0), 2 dangling.
        let g = AdjacencyList::from_edges(3, &[(0, 1, 2.0), (0, 2, 1.0), (1, 2, 1.0)]).unwrap();
        let cfg = PageRankConfig {
            tolerance: Some(1e-9),
            redistribute_dangling: true,
            ..PageRankConfig::default()
        };
        let scores = pagerank(&g, cfg);
        let total: f64 = scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-6, "sum={total}");
    }

    #[test]
    fn leak_semantics_drop_dangling_mass() {
        let g = AdjacencyList::from_edges(3, &[(0, 1, 2.0), (0, 2, 1.0), (1, 2, 1.0)]).unwrap();
        let cfg = PageRankConfig { iterations: 10, ..PageRankConfig::default() };
        let total: f64 = pagerank(&g, cfg).iter().sum();
        assert!(total < 1.0, "sum={total}");
    }

    #[test]
    fn tolerance_stop_reports_convergence() {
        // Pure cycle: the uniform vector is already stationary, so the first
        // round's delta is 0 and the tolerance stop fires immediately.
        let g = AdjacencyList::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]).unwrap();
        let cfg = PageRankConfig { tolerance: Some(1e-9), ..PageRankConfig::default() };
        let run = pagerank_run(&g, cfg);
        assert!(run.converged);
        assert_eq!(run.iterations, 1);
        for &x in &run.scores {
            assert!((x - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn checked_rejects_bad_damping() {
        let g = AdjacencyList::with_nodes(2);
        let cfg = PageRankConfig { damping: 1.5, ..PageRankConfig::default() };
        let err = pagerank_checked(&g, cfg).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "{err}");
    }

    #[test]
    fn checked_rejects_empty_graph() {
        let g = AdjacencyList::with_nodes(0);
        let err = pagerank_checked(&g, PageRankConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "{err}");
    }

    #[test]
    fn checked_rejects_out_of_range_target() {
        // Bypass AdjacencyList validation with a hand-rolled adapter.
        struct Raw(Vec<Vec<(usize, f64)>>);
        impl WeightedEdges for Raw {
            fn node_count(&self) -> usize {
                self.0.len()
            }
            fn out_edges(&self, node: usize) -> &[(usize, f64)] {
                &self.0[node]
            }
        }
        let g = Raw(vec![vec![(5, 1.0)], vec![]]);
        let err = pagerank_checked(&g, PageRankConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { node: 5, node_count: 2 }), "{err}");
    }
}
