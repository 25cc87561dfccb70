//! # Grass Model
//!
//! Foundational types shared by the associative graph engine: node
//! identifiers, weighted edges and configuration. This crate holds no graph
//! state and performs no traversal.

pub mod config;
pub mod edge;
pub mod node;

pub use config::*;
pub use edge::*;
pub use node::*;
