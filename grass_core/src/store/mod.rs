//! Store module - adjacency storage and edge mutation.
//!
//! The store consists of:
//! - **Adjacency lists**: Per-node neighbor entries kept sorted by weight
//! - **Connected set**: The directed pairs currently present in storage
//! - **Decay factor**: Cumulative aging applied lazily at insert and lookup time

mod adjacency;
mod graph;

pub use adjacency::*;
pub use graph::*;
