//! # Grass Core
//!
//! An in-memory weighted associative graph. Every node keeps a list of its
//! neighbors sorted by association weight, strongest first, and the graph
//! answers "what is most related to these seeds?" by summing the top of
//! each seed's list.
//!
//! ## Core Components
//!
//! - **store**: Sorted adjacency lists, idempotent edge mutation and lazy decay
//! - **lookup**: Multi-seed weighted aggregation with deterministic ranking
//! - **snapshot**: Whole-graph persistence to JSON or a binary encoding
//!
//! ## Example
//!
//! ```
//! use grass_core::AssociativeGraph;
//!
//! let graph = AssociativeGraph::new(vec![("A", "B", 5.0), ("A", "C", 3.0)], false);
//! assert_eq!(graph.lookup(&["A"]), vec![("B", 5.0), ("C", 3.0)]);
//! ```

pub mod error;
pub mod lookup;
pub mod snapshot;
pub mod store;

pub use error::*;
pub use lookup::*;
pub use snapshot::*;
pub use store::*;

pub use grass_model::{Edge, GraphConfig, LookupConfig, NodeId};
