//! Weighted edges as they arrive from ingestion.

use serde::{Deserialize, Serialize};

use crate::NodeId;

/// A directed, weighted association from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<N> {
    pub start: N,
    pub end: N,
    /// Association weight. Zero means "no edge".
    pub weight: f64,
}

impl<N: NodeId> Edge<N> {
    /// Create a new edge.
    pub fn new(start: N, end: N, weight: f64) -> Self {
        Self { start, end, weight }
    }

    /// Split into a `(start, end, weight)` triple.
    pub fn into_parts(self) -> (N, N, f64) {
        (self.start, self.end, self.weight)
    }
}

impl<N: NodeId> From<(N, N, f64)> for Edge<N> {
    fn from((start, end, weight): (N, N, f64)) -> Self {
        Self::new(start, end, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_from_triple() {
        let edge: Edge<&str> = ("A", "B", 5.0).into();
        assert_eq!(edge.start, "A");
        assert_eq!(edge.end, "B");
        assert_eq!(edge.weight, 5.0);
    }

    #[test]
    fn test_into_parts() {
        let (start, end, weight) = Edge::new(1u32, 2u32, -0.5).into_parts();
        assert_eq!((start, end, weight), (1, 2, -0.5));
    }
}
