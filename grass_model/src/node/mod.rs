//! Node identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// Anything that can name a node in the graph.
///
/// The graph never looks inside an identifier. It only hashes it, compares
/// it for equality, and orders it. Ordering is what keeps equal-weight
/// adjacency entries and equal-score lookup results in a stable order.
///
/// Implemented for every type with the required bounds, so `String`, `&str`,
/// integers and UUIDs all work out of the box.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug {}
