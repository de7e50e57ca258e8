//! # simple-graph
//!
//! A minimal undirected, unweighted graph container for concurrent use.
//!
//! ## Features
//!
//! - **Caller-owned identity**: any type implementing [`Identifier`] is a vertex
//! - **Symmetric adjacency**: every edge is recorded on both endpoints
//! - **Reader/writer locking**: queries share the lock, insertions take it exclusively
//! - **Add-only**: vertices and edges are never removed
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_graph::{Error, SimpleGraph, Vertex};
//!
//! fn main() -> Result<(), Error> {
//!     let graph = SimpleGraph::new();
//!     let ids: Vec<Vertex> = ["id_1", "id_2", "id_3", "id_4"]
//!         .into_iter()
//!         .map(Vertex::new)
//!         .collect();
//!     for v in &ids {
//!         graph.add_vertex(v.clone())?;
//!     }
//!
//!     graph.add_edge(&ids[0], &ids[1])?;
//!     graph.add_edge(&ids[2], &ids[1])?;
//!
//!     assert_eq!(graph.neighbors(&ids[1])?, vec![ids[0].clone(), ids[2].clone()]);
//!     assert!(matches!(
//!         graph.neighbors(&Vertex::new("id_5")),
//!         Err(Error::MissingVertex(_))
//!     ));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::manual_assert))]

pub mod config;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;
mod sync;

pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Identifier, SimpleGraph, Vertex};
