//! Sorted adjacency lists - the per-node ranked neighbor collections.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;

use grass_model::NodeId;

/// One stored association: a neighbor and its negated weight.
///
/// Weights are stored negated so that ascending order is strongest-first.
/// Entries with equal weight are ordered by neighbor. Persisted as a
/// `[negated_weight, neighbor]` pair.
#[derive(Debug, Clone)]
pub struct AdjacencyEntry<N> {
    pub neg_weight: f64,
    pub neighbor: N,
}

impl<N> AdjacencyEntry<N> {
    /// Create an entry from a stored (already decay-scaled) weight.
    pub fn new(weight: f64, neighbor: N) -> Self {
        Self {
            neg_weight: -weight,
            neighbor,
        }
    }

    /// The stored weight with its sign restored.
    pub fn weight(&self) -> f64 {
        -self.neg_weight
    }
}

impl<N: Ord> PartialEq for AdjacencyEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for AdjacencyEntry<N> {}

impl<N: Ord> PartialOrd for AdjacencyEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> Ord for AdjacencyEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.neg_weight
            .total_cmp(&other.neg_weight)
            .then_with(|| self.neighbor.cmp(&other.neighbor))
    }
}

impl<N: Serialize> Serialize for AdjacencyEntry<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.neg_weight, &self.neighbor).serialize(serializer)
    }
}

impl<'de, N: Deserialize<'de>> Deserialize<'de> for AdjacencyEntry<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (neg_weight, neighbor) = <(f64, N)>::deserialize(deserializer)?;
        Ok(Self {
            neg_weight,
            neighbor,
        })
    }
}

/// A node's neighbors, always sorted strongest-first.
#[derive(Debug, Clone)]
pub struct AdjacencyList<N> {
    entries: Vec<AdjacencyEntry<N>>,
}

impl<N: Ord> PartialEq for AdjacencyList<N> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<N: Ord> Eq for AdjacencyList<N> {}

impl<N> Default for AdjacencyList<N> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<N: NodeId> AdjacencyList<N> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from entries that are already sorted.
    ///
    /// Returns `None` if the entries are out of order.
    pub fn from_sorted(entries: Vec<AdjacencyEntry<N>>) -> Option<Self> {
        let list = Self { entries };
        list.is_sorted().then_some(list)
    }

    /// Insert an entry at its sorted position.
    ///
    /// Equal entries are placed after existing ones, so duplicates pile up
    /// rather than replacing each other.
    pub fn insert(&mut self, entry: AdjacencyEntry<N>) {
        let index = self.entries.partition_point(|existing| existing <= &entry);
        self.entries.insert(index, entry);
    }

    /// Drop every entry pointing at `neighbor`. Returns how many were dropped.
    pub fn remove_neighbor(&mut self, neighbor: &N) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.neighbor != neighbor);
        before - self.entries.len()
    }

    /// First (strongest) entry pointing at `neighbor`.
    pub fn find(&self, neighbor: &N) -> Option<&AdjacencyEntry<N>> {
        self.entries.iter().find(|entry| &entry.neighbor == neighbor)
    }

    /// Check the strongest-first ordering.
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|pair| pair[0] <= pair[1])
    }

    pub fn as_slice(&self) -> &[AdjacencyEntry<N>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdjacencyEntry<N>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
