//! Associative Graph - the core data structure.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use grass_model::{Edge, GraphConfig, LookupConfig, NodeId};
use tracing::{debug, warn};

use super::{AdjacencyEntry, AdjacencyList};
use crate::error::{GraphError, GraphResult};
use crate::lookup::LookupEngine;

/// A weighted associative graph.
///
/// Each node owns a list of `(negated weight, neighbor)` entries kept sorted
/// strongest-first. A connected set records which directed pairs are
/// present so that [`set_weight`](Self::set_weight) replaces rather than
/// duplicates.
///
/// Decay is lazy: [`decay`](Self::decay) only updates a scalar. New edges
/// are scaled by that scalar when stored and lookup divides it back out, so
/// entries already in storage are never rewritten.
///
/// Equality compares stored state only; the lookup settings are not part of it.
#[derive(Debug, Clone)]
pub struct AssociativeGraph<N: NodeId> {
    pub(crate) bidirectional: bool,

    /// Cumulative decay. Never zero.
    pub(crate) decay_factor: f64,

    /// Node -> neighbors, strongest first.
    pub(crate) adjacency: HashMap<N, AdjacencyList<N>>,

    /// Directed pairs currently present in `adjacency`.
    pub(crate) connected: HashSet<(N, N)>,

    /// Settings used by [`lookup`](Self::lookup). Not persisted.
    pub(crate) lookup: LookupConfig,
}

impl<N: NodeId> PartialEq for AssociativeGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.bidirectional == other.bidirectional
            && self.decay_factor == other.decay_factor
            && self.adjacency == other.adjacency
            && self.connected == other.connected
    }
}

impl<N: NodeId> AssociativeGraph<N> {
    /// Build a graph from an initial edge list.
    ///
    /// Edges are applied in order through [`set_weight`](Self::set_weight),
    /// so a repeated `(start, end)` pair keeps only its last weight.
    pub fn new<I, E>(edges: I, bidirectional: bool) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<N>>,
    {
        let mut graph = Self::empty(bidirectional);
        graph.extend(edges);
        graph
    }

    /// Create a graph with no edges.
    pub fn empty(bidirectional: bool) -> Self {
        Self {
            bidirectional,
            decay_factor: 1.0,
            adjacency: HashMap::new(),
            connected: HashSet::new(),
            lookup: LookupConfig::default(),
        }
    }

    /// Build a graph with the bidirectionality and lookup settings of a
    /// configuration.
    pub fn from_config<I, E>(config: &GraphConfig, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<N>>,
    {
        Self::new(edges, config.bidirectional).with_lookup_config(config.lookup)
    }

    /// Same graph, answering [`lookup`](Self::lookup) with other settings.
    pub fn with_lookup_config(mut self, config: LookupConfig) -> Self {
        self.lookup = config;
        self
    }

    /// Settings used by [`lookup`](Self::lookup).
    pub fn lookup_config(&self) -> &LookupConfig {
        &self.lookup
    }

    /// Build a graph using a TOML configuration file.
    pub fn from_config_path<I, E>(path: impl AsRef<Path>, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<N>>,
    {
        let config = GraphConfig::from_path(path)?;
        Ok(Self::from_config(&config, edges))
    }

    /// Apply more edges through [`set_weight`](Self::set_weight), in order.
    pub fn extend<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<N>>,
    {
        for edge in edges {
            let (start, end, weight) = edge.into().into_parts();
            self.set_weight(start, end, weight);
        }
    }

    /// Whether mutations are mirrored onto the reversed pair.
    pub fn bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Current cumulative decay factor.
    pub fn decay_factor(&self) -> f64 {
        self.decay_factor
    }

    /// Insert an edge without checking for an existing one.
    ///
    /// Calling this twice for the same pair stores two entries. Use
    /// [`set_weight`](Self::set_weight) to replace instead.
    pub fn add_edge(&mut self, start: N, end: N, weight: f64) {
        if self.bidirectional {
            self.insert_directed(end.clone(), start.clone(), weight);
        }
        self.insert_directed(start, end, weight);
    }

    /// Set the weight of an edge, replacing any existing entries for the pair.
    ///
    /// A weight of zero removes the edge.
    pub fn set_weight(&mut self, start: N, end: N, weight: f64) {
        if self.bidirectional {
            self.set_directed(end.clone(), start.clone(), weight);
        }
        self.set_directed(start, end, weight);
    }

    /// Remove every entry for the pair. Missing edges are a no-op.
    pub fn remove_edge(&mut self, start: &N, end: &N) {
        self.remove_directed(start, end);
        if self.bidirectional {
            self.remove_directed(end, start);
        }
    }

    /// Node removal is not supported.
    ///
    /// Dropping a node from every other node's list would mean scanning the
    /// whole graph. The intended approach is a tombstone set filtered at
    /// lookup time, which is not built yet.
    pub fn remove_node(&mut self, node: &N) -> GraphResult<()> {
        warn!(node = ?node, "rejected node removal");
        Err(GraphError::NodeRemovalUnsupported {
            node: format!("{:?}", node),
        })
    }

    /// Age the graph by multiplying the cumulative decay factor by `factor`.
    ///
    /// Returns the new cumulative factor. Fails, leaving the graph untouched,
    /// if the result would be exactly zero, infinite or NaN. Negative factors
    /// are accepted and flip the sign of weights stored afterwards.
    pub fn decay(&mut self, factor: f64) -> GraphResult<f64> {
        let next = self.decay_factor * factor;
        if next == 0.0 {
            warn!(current = self.decay_factor, factor, "rejected decay to zero");
            return Err(GraphError::ZeroDecayFactor {
                current: self.decay_factor,
                factor,
            });
        }
        if !next.is_finite() {
            warn!(current = self.decay_factor, factor, "rejected non-finite decay");
            return Err(GraphError::NonFiniteDecayFactor {
                current: self.decay_factor,
                factor,
            });
        }

        debug!(from = self.decay_factor, to = next, "applied decay");
        self.decay_factor = next;
        Ok(next)
    }

    /// Neighbors of `node`, strongest first. Unknown nodes have none.
    pub fn neighbors(&self, node: &N) -> &[AdjacencyEntry<N>] {
        self.adjacency
            .get(node)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Weight of the strongest entry for the pair, in current-epoch units.
    pub fn weight(&self, start: &N, end: &N) -> Option<f64> {
        self.adjacency
            .get(start)?
            .find(end)
            .map(|entry| entry.weight() / self.decay_factor)
    }

    /// Whether the directed pair is present.
    pub fn is_connected(&self, start: &N, end: &N) -> bool {
        self.connected.contains(&(start.clone(), end.clone()))
    }

    /// Nodes with at least one outgoing entry.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Number of nodes with at least one outgoing entry.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of stored entries, duplicates and mirrors included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(AdjacencyList::len).sum()
    }

    /// Top related nodes for the given seeds, each seed weighted 1.
    ///
    /// Uses the graph's lookup settings, depth 100, limit 10 and 3 decimals
    /// unless configured otherwise.
    pub fn lookup(&self, seeds: &[N]) -> Vec<(N, f64)> {
        LookupEngine::new(self.lookup).lookup(self, seeds)
    }

    /// Top related nodes for weighted seeds, visiting at most `depth`
    /// entries per seed. Limit and rounding come from the graph's settings.
    pub fn lookup_weighted(&self, seeds: &[(N, f64)], depth: usize) -> Vec<(N, f64)> {
        let config = self.lookup.with_depth(depth);
        LookupEngine::new(config).lookup_weighted(self, seeds)
    }

    fn insert_directed(&mut self, start: N, end: N, weight: f64) {
        let stored = weight * self.decay_factor;
        self.connected.insert((start.clone(), end.clone()));
        self.adjacency
            .entry(start)
            .or_default()
            .insert(AdjacencyEntry::new(stored, end));
    }

    fn set_directed(&mut self, start: N, end: N, weight: f64) {
        if self.is_connected(&start, &end) {
            self.remove_directed(&start, &end);
        }

        if weight != 0.0 {
            self.insert_directed(start, end, weight);
        } else {
            debug!(start = ?start, end = ?end, "edge cleared by zero weight");
        }
    }

    fn remove_directed(&mut self, start: &N, end: &N) {
        if let Some(list) = self.adjacency.get_mut(start) {
            let removed = list.remove_neighbor(end);
            if removed > 0 {
                debug!(start = ?start, end = ?end, removed, "edge removed");
            }
            if list.is_empty() {
                self.adjacency.remove(start);
            }
        }
        self.connected.remove(&(start.clone(), end.clone()));
    }
}
