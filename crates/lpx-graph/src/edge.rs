//! Vertex and edge types.
//!
//! A [`VertexId`] is identity only — vertices carry no payload and come into
//! existence the first time any edge record references them. An [`Edge`] is an
//! ordered pair of endpoints plus a weight; parallel edges between the same
//! pair are distinct traversal options and are never merged.

use serde::{Deserialize, Serialize};

/// Integer identifier of a graph vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub i64);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VertexId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A weighted directed edge.
///
/// Self-loops (`from == to`) are admitted as ordinary edges; a simple path can
/// never traverse one, so they contribute nothing beyond their entry in the
/// weight table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex.
    pub from: VertexId,
    /// Destination vertex.
    pub to: VertexId,
    /// Edge weight (finite; enforced at parse time).
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: impl Into<VertexId>, to: impl Into<VertexId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_id_display_is_bare_integer() {
        assert_eq!(VertexId(42).to_string(), "42");
        assert_eq!(VertexId(-7).to_string(), "-7");
    }

    #[test]
    fn self_loop_detection() {
        assert!(Edge::new(3, 3, 1.0).is_self_loop());
        assert!(!Edge::new(3, 4, 1.0).is_self_loop());
    }

    #[test]
    fn vertex_id_serializes_transparently() {
        let json = serde_json::to_string(&VertexId(5)).unwrap();
        assert_eq!(json, "5");
        let back: VertexId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VertexId(5));
    }
}
