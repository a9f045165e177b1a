//! Weighted directed graph adapter trait and the native adjacency-list type.

use crate::{Error, Result};

/// A weighted directed graph view that returns **borrowed** per-node edge slices.
///
/// Node ids are the contiguous range `0..node_count()`. Each edge is a
/// `(target, weight)` pair; weights are expected to be non-negative and finite
/// (checked entry points enforce this, unchecked ones clamp negatives to zero).
///
/// A node whose edge slice is empty, or whose weights sum to zero, is a
/// *dangling* node.
pub trait WeightedEdges {
    fn node_count(&self) -> usize;

    /// Outgoing `(target, weight)` pairs for a node.
    fn out_edges(&self, node: usize) -> &[(usize, f64)];

    fn out_degree(&self, node: usize) -> usize {
        self.out_edges(node).len()
    }
}

/// Owned adjacency-list graph, indexed directly by node id.
///
/// This is the native representation: a `Vec` of edge lists rather than a
/// hash-keyed map, so iteration order is the node-id order and lookups are
/// O(1). Duplicate edges between the same pair are allowed and accumulate
/// additively during ranking.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyList {
    out: Vec<Vec<(usize, f64)>>,
}

impl AdjacencyList {
    /// An edgeless graph with `node_count` nodes (all dangling).
    pub fn with_nodes(node_count: usize) -> Self {
        Self { out: vec![Vec::new(); node_count] }
    }

    /// Build from `(source, target, weight)` triples, validating every edge.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut g = Self::with_nodes(node_count);
        for &(source, target, weight) in edges {
            g.add_edge(source, target, weight)?;
        }
        Ok(g)
    }

    /// Add a directed edge, rejecting out-of-range endpoints and bad weights.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) -> Result<()> {
        let n = self.out.len();
        if source >= n {
            return Err(Error::InvalidNode { node: source, node_count: n });
        }
        if target >= n {
            return Err(Error::InvalidNode { node: target, node_count: n });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "edge weight must be finite and non-negative (got {weight})"
            )));
        }
        self.out[source].push((target, weight));
        Ok(())
    }

    /// Sum of outgoing edge weights for a node.
    pub fn out_weight(&self, node: usize) -> f64 {
        self.out.get(node).map_or(0.0, |es| es.iter().map(|&(_, w)| w).sum())
    }

    /// Convert from a directed petgraph with `f64` edge weights.
    ///
    /// Node ids follow `NodeIndex::index()`; parallel edges are kept.
    #[cfg(feature = "petgraph")]
    pub fn from_petgraph<N, Ix>(graph: &petgraph::Graph<N, f64, petgraph::Directed, Ix>) -> Self
    where
        Ix: petgraph::graph::IndexType,
    {
        use petgraph::visit::EdgeRef;
        let mut out = vec![Vec::new(); graph.node_count()];
        for e in graph.edge_references() {
            out[e.source().index()].push((e.target().index(), *e.weight()));
        }
        Self { out }
    }
}

impl WeightedEdges for AdjacencyList {
    fn node_count(&self) -> usize {
        self.out.len()
    }

    fn out_edges(&self, node: usize) -> &[(usize, f64)] {
        self.out.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}
