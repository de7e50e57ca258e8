//! In-memory undirected graph module.
//!
//! Provides the vertex identity contract and the lock-guarded graph
//! container. There are no traversal algorithms here; callers build those on
//! top of [`SimpleGraph::neighbors`].
//!
//! # Example
//!
//! ```rust
//! use simple_graph::graph::SimpleGraph;
//!
//! let graph: SimpleGraph<String> = SimpleGraph::new();
//! graph.add_vertex("id_1".to_string()).unwrap();
//! graph.add_vertex("id_2".to_string()).unwrap();
//! graph.add_edge(&"id_1".to_string(), &"id_2".to_string()).unwrap();
//!
//! assert!(graph.is_neighbor("id_2", "id_1").unwrap());
//! assert_eq!(graph.neighbors("id_1").unwrap(), vec!["id_2".to_string()]);
//! ```

mod simple;
mod types;


pub use simple::SimpleGraph;
pub use types::{Identifier, Vertex};
