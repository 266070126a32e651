//! Branch-and-bound depth-first search over simple paths.
//!
//! Every vertex of the graph is taken as a start; from each start the search
//! enumerates all maximal simple directed paths, pruning any partial path
//! whose accumulated distance plus the [`WeightBound`] estimate cannot beat
//! the best complete path found so far.
//!
//! # Invariants
//!
//! - The visited set contains a vertex iff it is on the current path buffer;
//!   both are restored exactly on every exit from a recursive call,
//!   including the prune early-return.
//! - The best path is replaced only on a strictly greater distance, so of
//!   two equal-distance paths the one enumerated first is kept (start
//!   vertices in roster order, then adjacency order at each branch).

use std::collections::HashSet;

use tracing::debug;

use lpx_graph::{DiGraph, VertexId};

use crate::bound::WeightBound;
use crate::result::{BestPath, SearchOutcome, SearchStats};

/// When a partial path counts as a complete candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClosingPolicy {
    /// Only at a dead end: every outgoing edge of the frontier leads to an
    /// already-visited vertex, or there are no outgoing edges.
    #[default]
    DeadEnd,
    /// Dead ends, plus closed tours: an edge from the frontier back to the
    /// start vertex submits the current path with the closing edge's weight
    /// added. The start vertex is not repeated in the recorded sequence.
    ClosedTour,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Candidate-completion rule.
    pub closing: ClosingPolicy,
    /// Upper-bound pruning. Disabling it turns the search into a brute-force
    /// enumeration that must reach the same result, only slower.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            closing: ClosingPolicy::DeadEnd,
            pruning: true,
        }
    }
}

/// Find a longest simple path in `graph`.
///
/// Returns `best: None` only when the graph has no vertices. A vertex with
/// no usable outgoing edges is itself a complete (single-vertex, distance
/// zero) candidate, so any non-empty graph produces a path.
pub fn longest_path(graph: &DiGraph, config: &SearchConfig) -> SearchOutcome {
    let mut searcher = Searcher {
        graph,
        bound: WeightBound::from_graph(graph),
        config: *config,
        visited: HashSet::with_capacity(graph.vertex_count()),
        path: Vec::with_capacity(graph.vertex_count()),
        best_distance: f64::NEG_INFINITY,
        best: None,
        stats: SearchStats::default(),
    };

    for &start in graph.vertices() {
        searcher.stats.starts += 1;
        searcher.visited.insert(start);
        searcher.path.push(start);
        searcher.dfs(start, start, 0.0);
        searcher.path.pop();
        searcher.visited.remove(&start);
    }

    debug!(
        starts = searcher.stats.starts,
        expanded = searcher.stats.expanded,
        pruned = searcher.stats.pruned,
        improved = searcher.stats.improved,
        "search complete"
    );

    SearchOutcome {
        best: searcher.best,
        stats: searcher.stats,
    }
}

struct Searcher<'a> {
    graph: &'a DiGraph,
    bound: WeightBound,
    config: SearchConfig,
    visited: HashSet<VertexId>,
    path: Vec<VertexId>,
    best_distance: f64,
    best: Option<BestPath>,
    stats: SearchStats,
}

impl Searcher<'_> {
    fn dfs(&mut self, start: VertexId, current: VertexId, distance: f64) {
        self.stats.expanded += 1;

        if self.config.pruning {
            // A simple path can use at most one edge per unvisited vertex;
            // a closed tour gets one extra hop for the closing edge.
            let mut hops = self.graph.vertex_count() - self.visited.len();
            if self.config.closing == ClosingPolicy::ClosedTour {
                hops += 1;
            }
            if distance + self.bound.upper_bound(hops) <= self.best_distance {
                self.stats.pruned += 1;
                return;
            }
        }

        let graph = self.graph;
        let mut extended = false;
        for out in graph.outgoing(current) {
            if self.config.closing == ClosingPolicy::ClosedTour
                && out.to == start
                && self.path.len() > 1
            {
                self.try_improve(distance + out.weight);
            }
            if self.visited.contains(&out.to) {
                continue;
            }
            extended = true;
            self.visited.insert(out.to);
            self.path.push(out.to);
            self.dfs(start, out.to, distance + out.weight);
            self.path.pop();
            self.visited.remove(&out.to);
        }

        if !extended {
            self.try_improve(distance);
        }
    }

    fn try_improve(&mut self, distance: f64) {
        if distance > self.best_distance {
            self.best_distance = distance;
            self.stats.improved += 1;
            debug!(distance, length = self.path.len(), "best path improved");
            self.best = Some(BestPath {
                distance,
                vertices: self.path.clone(),
            });
        }
    }
}
