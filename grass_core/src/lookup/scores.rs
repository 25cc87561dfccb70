//! Score accumulation for multi-seed lookups.

use std::collections::HashMap;

use grass_model::NodeId;

/// Running totals of association scores, keyed by candidate node.
#[derive(Debug, Clone)]
pub struct ScoreBoard<N: NodeId> {
    scores: HashMap<N, f64>,
}

impl<N: NodeId> Default for ScoreBoard<N> {
    fn default() -> Self {
        Self {
            scores: HashMap::new(),
        }
    }
}

impl<N: NodeId> ScoreBoard<N> {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to a node's score (accumulates with existing score).
    pub fn add(&mut self, node: N, score: f64) {
        *self.scores.entry(node).or_insert(0.0) += score;
    }

    /// Get a node's score, zero if it was never touched.
    pub fn get(&self, node: &N) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Whether the node received any contribution.
    pub fn contains(&self, node: &N) -> bool {
        self.scores.contains_key(node)
    }

    /// Drop the given nodes from the board.
    pub fn exclude<'a, I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        for node in nodes {
            self.scores.remove(node);
        }
    }

    /// The top `limit` nodes by score, highest first.
    ///
    /// Equal scores are ordered by ascending node.
    pub fn ranked(self, limit: usize) -> Vec<(N, f64)> {
        let mut ranked: Vec<_> = self.scores.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
