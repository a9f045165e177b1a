//! `rankops`: weighted PageRank over directed graphs, plus ranking/report helpers.
//!
//! The crate has two layers, composed linearly:
//! - [`pagerank`]: the power-iteration engine, a pure function of
//!   (graph, config) → rank vector.
//! - [`report`]: pairs scores with caller-supplied labels, sorts, and renders.
//!
//! Public invariants (must not drift):
//! - **Node order**: outputs are indexed by node id \(0..n-1\) consistent with the
//!   input graph's adapter semantics.
//! - **Determinism**: identical inputs + configs produce bit-identical output.
//!   Iteration is by ascending node id; sorting in the reporter is stable.
//! - **No silent normalization**: by default a node with zero total outgoing
//!   weight drops its mass each round instead of redistributing it. Uniform
//!   redistribution is opt-in via [`PageRankConfig::redistribute_dangling`].
//!
//! Swappable (allowed to change without breaking the contract):
//! - internal buffer management (so long as outputs are unchanged)
//! - validation order within a checked entry point (so long as all listed
//!   conditions are still rejected before iteration)
//!
//! [`PageRankConfig::redistribute_dangling`]: pagerank::PageRankConfig

pub mod graph;
pub mod pagerank;
pub mod report;

pub use graph::{AdjacencyList, WeightedEdges};
pub use pagerank::{
    pagerank, pagerank_checked, pagerank_checked_run, pagerank_run, PageRankConfig, PageRankRun,
};
pub use report::{normalize, rank_descending, rank_labels, render_ranking, top_k};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("node {node} out of range (node_count={node_count})")]
    InvalidNode { node: usize, node_count: usize },
    #[error("label count {labels} does not match node count {node_count}")]
    LabelCountMismatch { labels: usize, node_count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
