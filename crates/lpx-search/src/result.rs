//! Search results and statistics.

use serde::{Deserialize, Serialize};

use lpx_graph::{DiGraph, VertexId};

/// The longest simple path found by a search: total distance plus the
/// vertex sequence that achieves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestPath {
    /// Sum of the traversed edge weights.
    pub distance: f64,
    /// The path's vertices, in walk order. All distinct.
    pub vertices: Vec<VertexId>,
}

impl BestPath {
    /// Render the vertex sequence as CRLF-joined integer ids, no trailing
    /// separator: the path `1 -> 2` renders as `"1\r\n2"`.
    pub fn render(&self) -> String {
        self.vertices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\r\n")
    }

    /// Re-derive the distance by walking the path against the graph.
    ///
    /// For each consecutive pair the heaviest matching edge is taken, which
    /// is the traversal option the search's own maximum ends up using when
    /// parallel edges exist. Returns `None` if some pair has no edge at all.
    /// The closing edge of a closed-tour result is not part of the vertex
    /// sequence and is not recounted here.
    pub fn recompute_distance(&self, graph: &DiGraph) -> Option<f64> {
        let mut total = 0.0;
        for pair in self.vertices.windows(2) {
            let weight = graph
                .outgoing(pair[0])
                .iter()
                .filter(|e| e.to == pair[1])
                .map(|e| e.weight)
                .max_by(f64::total_cmp)?;
            total += weight;
        }
        Some(total)
    }
}

/// Counters describing one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Start vertices tried.
    pub starts: u64,
    /// DFS nodes expanded.
    pub expanded: u64,
    /// Subtrees abandoned by the upper-bound prune.
    pub pruned: u64,
    /// Times the best path was replaced.
    pub improved: u64,
}

/// The complete result of a search: the best path (if the graph had any
/// vertices at all) and the run's statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The longest path found, `None` only for an empty graph.
    pub best: Option<BestPath>,
    /// Counters from the run.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Render the best path per [`BestPath::render`], or the empty string
    /// when the graph was empty.
    pub fn render(&self) -> String {
        self.best.as_ref().map(BestPath::render).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpx_graph::Edge;

    #[test]
    fn render_joins_with_crlf() {
        let best = BestPath {
            distance: 5.0,
            vertices: vec![VertexId(1), VertexId(2)],
        };
        assert_eq!(best.render(), "1\r\n2");
    }

    #[test]
    fn render_single_vertex_has_no_separator() {
        let best = BestPath {
            distance: 0.0,
            vertices: vec![VertexId(7)],
        };
        assert_eq!(best.render(), "7");
    }

    #[test]
    fn empty_outcome_renders_nothing() {
        let outcome = SearchOutcome {
            best: None,
            stats: SearchStats::default(),
        };
        assert_eq!(outcome.render(), "");
    }

    #[test]
    fn recompute_walks_the_graph() {
        let graph = DiGraph::from_edges(vec![Edge::new(1, 2, 8.54), Edge::new(2, 3, 3.11)]);
        let best = BestPath {
            distance: 11.65,
            vertices: vec![VertexId(1), VertexId(2), VertexId(3)],
        };
        let recomputed = best.recompute_distance(&graph).unwrap();
        assert!((recomputed - 11.65).abs() < 1e-9);
    }

    #[test]
    fn recompute_prefers_heaviest_parallel_edge() {
        let graph = DiGraph::from_edges(vec![Edge::new(1, 2, 3.0), Edge::new(1, 2, 5.0)]);
        let best = BestPath {
            distance: 5.0,
            vertices: vec![VertexId(1), VertexId(2)],
        };
        assert_eq!(best.recompute_distance(&graph), Some(5.0));
    }

    #[test]
    fn recompute_rejects_disconnected_pair() {
        let graph = DiGraph::from_edges(vec![Edge::new(1, 2, 1.0)]);
        let best = BestPath {
            distance: 1.0,
            vertices: vec![VertexId(2), VertexId(1)],
        };
        assert_eq!(best.recompute_distance(&graph), None);
    }

    #[test]
    fn best_path_serializes_to_plain_json() {
        let best = BestPath {
            distance: 15.65,
            vertices: vec![VertexId(1), VertexId(2)],
        };
        let json = serde_json::to_value(&best).unwrap();
        assert_eq!(json["distance"], 15.65);
        assert_eq!(json["vertices"][0], 1);
    }
}
