//! The adjacency graph built from an edge list.
//!
//! [`DiGraph`] stores outgoing edges in a [`HashMap`] and keeps a separate
//! vertex roster in first-seen order. The roster is what makes whole-graph
//! iteration deterministic: search results must not depend on hash ordering.
//!
//! # Invariants
//!
//! - Every vertex referenced by any edge endpoint has an adjacency entry,
//!   empty if it has no outgoing edges.
//! - Adjacency lists preserve the insertion order of the input edge list.
//! - The structure is never mutated after construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::edge::{Edge, VertexId};

/// One outgoing adjacency entry: destination plus edge weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutEdge {
    /// Destination vertex.
    pub to: VertexId,
    /// Edge weight.
    pub weight: f64,
}

/// An edge-weighted directed graph, read-only after construction.
#[derive(Clone, Debug, Default)]
pub struct DiGraph {
    /// Outgoing edges, keyed by source vertex.
    adjacency: HashMap<VertexId, Vec<OutEdge>>,
    /// All vertices in first-seen order.
    roster: Vec<VertexId>,
    /// Total number of edges, parallel edges and self-loops included.
    edge_count: usize,
}

impl DiGraph {
    /// Build a graph from parsed edge records.
    ///
    /// Parallel edges are kept as distinct adjacency entries. Vertices that
    /// only ever appear as destinations still get an (empty) adjacency entry
    /// and a roster slot.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::default();
        for edge in edges {
            graph.register(edge.from);
            graph.register(edge.to);
            graph
                .adjacency
                .get_mut(&edge.from)
                .expect("source registered above")
                .push(OutEdge {
                    to: edge.to,
                    weight: edge.weight,
                });
            graph.edge_count += 1;
        }
        debug!(
            vertices = graph.roster.len(),
            edges = graph.edge_count,
            "adjacency graph built"
        );
        graph
    }

    fn register(&mut self, vertex: VertexId) {
        if !self.adjacency.contains_key(&vertex) {
            self.adjacency.insert(vertex, Vec::new());
            self.roster.push(vertex);
        }
    }

    /// All vertices, in the order they were first referenced by the input.
    pub fn vertices(&self) -> &[VertexId] {
        &self.roster
    }

    /// Outgoing edges of `vertex`, in input order. Empty for unknown vertices.
    pub fn outgoing(&self, vertex: VertexId) -> &[OutEdge] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` if `vertex` appears anywhere in the input.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.roster.len()
    }

    /// Number of edges, counted with multiplicity.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// All edge weights, with multiplicity, in unspecified order.
    pub fn edge_weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.adjacency.values().flatten().map(|e| e.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiGraph {
        DiGraph::from_edges(vec![
            Edge::new(1, 2, 8.54),
            Edge::new(2, 3, 3.11),
            Edge::new(3, 1, 2.19),
            Edge::new(3, 4, 4.0),
            Edge::new(4, 1, 1.4),
        ])
    }

    #[test]
    fn roster_is_first_seen_order() {
        let graph = sample();
        let ids: Vec<i64> = graph.vertices().iter().map(|v| v.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn every_endpoint_appears_exactly_once() {
        let graph = DiGraph::from_edges(vec![
            Edge::new(1, 2, 1.0),
            Edge::new(2, 1, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(3, 2, 1.0),
        ]);
        let ids: Vec<i64> = graph.vertices().iter().map(|v| v.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn destination_only_vertex_gets_empty_entry() {
        let graph = DiGraph::from_edges(vec![Edge::new(1, 2, 5.0)]);
        assert!(graph.contains(VertexId(2)));
        assert!(graph.outgoing(VertexId(2)).is_empty());
    }

    #[test]
    fn adjacency_preserves_input_order() {
        let graph = DiGraph::from_edges(vec![
            Edge::new(1, 3, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(1, 3, 3.0),
        ]);
        let targets: Vec<i64> = graph.outgoing(VertexId(1)).iter().map(|e| e.to.0).collect();
        assert_eq!(targets, vec![3, 2, 3]);
    }

    #[test]
    fn parallel_edges_and_self_loops_are_counted() {
        let graph = DiGraph::from_edges(vec![
            Edge::new(1, 2, 1.0),
            Edge::new(1, 2, 1.0),
            Edge::new(2, 2, 9.0),
        ]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.outgoing(VertexId(1)).len(), 2);
        assert_eq!(graph.outgoing(VertexId(2)).len(), 1);
    }

    #[test]
    fn unknown_vertex_has_no_edges() {
        let graph = sample();
        assert!(!graph.contains(VertexId(99)));
        assert!(graph.outgoing(VertexId(99)).is_empty());
    }

    #[test]
    fn empty_graph() {
        let graph = DiGraph::from_edges(Vec::new());
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edge_weights_cover_multiplicity() {
        let graph = DiGraph::from_edges(vec![Edge::new(1, 2, 2.0), Edge::new(1, 2, 2.0)]);
        let mut weights: Vec<f64> = graph.edge_weights().collect();
        weights.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(weights, vec![2.0, 2.0]);
    }
}
