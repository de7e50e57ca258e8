//! Undirected, unweighted graph container behind a single reader/writer lock.
//!
//! Vertices and edges are only ever added. Every edge is stored on both
//! endpoints, so adjacency is symmetric by construction.
//!
//! # Locking
//!
//! | Operation | Lock |
//! |-----------|------|
//! | `add_vertex`, `add_edge` | exclusive |
//! | everything else | shared |
//!
//! Each operation holds its guard for its whole duration and validates before
//! it mutates, so a failed call leaves the graph untouched.

use std::fmt;

use indexmap::IndexMap;

use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::sync::RwLock;

use super::types::Identifier;

/// A registered vertex and its adjacency list.
struct Slot<V> {
    vertex: V,
    neighbors: Vec<V>,
}

struct Inner<V> {
    /// Vertex ID -> slot, in registration order.
    slots: IndexMap<String, Slot<V>>,
    /// Successful `add_edge` calls.
    edge_count: usize,
    /// Capacity reserved for each new adjacency list.
    neighbor_capacity: usize,
}

impl<V: Identifier> Inner<V> {
    fn index_of<Q: Identifier + ?Sized>(&self, vertex: &Q) -> Result<usize> {
        self.slots
            .get_index_of(vertex.id())
            .ok_or_else(|| Error::MissingVertex(vertex.id().to_string()))
    }

    fn slot<Q: Identifier + ?Sized>(&self, vertex: &Q) -> Result<&Slot<V>> {
        self.slots
            .get(vertex.id())
            .ok_or_else(|| Error::MissingVertex(vertex.id().to_string()))
    }
}

/// Thread-safe undirected graph with insertion-ordered adjacency lists.
///
/// Duplicate edges are kept: adding the same edge twice lists each endpoint
/// twice in the other's adjacency list. A self-loop lists the vertex twice in
/// its own adjacency list.
///
/// # Example
///
/// ```rust
/// use simple_graph::graph::{SimpleGraph, Vertex};
///
/// let graph = SimpleGraph::new();
/// let (a, b, c) = (Vertex::new("id_1"), Vertex::new("id_2"), Vertex::new("id_3"));
/// graph.add_vertex(a.clone()).unwrap();
/// graph.add_vertex(b.clone()).unwrap();
/// graph.add_vertex(c.clone()).unwrap();
///
/// graph.add_edge(&a, &b).unwrap();
/// graph.add_edge(&c, &b).unwrap();
///
/// assert!(graph.is_neighbor(&b, &a).unwrap());
/// assert!(!graph.is_neighbor(&a, &c).unwrap());
/// assert_eq!(graph.neighbors(&b).unwrap(), vec![a, c]);
/// ```
pub struct SimpleGraph<V> {
    inner: RwLock<Inner<V>>,
}

impl<V: Identifier + Clone> SimpleGraph<V> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacities(0, 0)
    }

    /// Creates an empty graph with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self::with_capacities(vertices, 0)
    }

    /// Creates an empty graph pre-sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `config` fails [`GraphConfig::validate`].
    /// Nothing is allocated in that case.
    pub fn from_config(config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            vertex_capacity = config.initial_vertex_capacity,
            neighbor_capacity = config.initial_neighbor_capacity,
            "Creating graph from config"
        );
        Ok(Self::with_capacities(
            config.initial_vertex_capacity,
            config.initial_neighbor_capacity,
        ))
    }

    fn with_capacities(vertices: usize, neighbors: usize) -> Self {
        Self {
            inner: RwLock::new(Inner {
                slots: IndexMap::with_capacity(vertices),
                edge_count: 0,
                neighbor_capacity: neighbors,
            }),
        }
    }

    // ── Mutation (exclusive lock) ──────────────────────────────────────

    /// Registers a vertex with an empty adjacency list.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateVertex` if a vertex with the same ID exists.
    pub fn add_vertex(&self, vertex: V) -> Result<()> {
        let mut inner = self.inner.write();
        let id = vertex.id();
        if inner.slots.contains_key(id) {
            return Err(Error::DuplicateVertex(id.to_string()));
        }
        let id = id.to_string();
        tracing::trace!(vertex = %id, "Vertex added");

        let neighbors = Vec::with_capacity(inner.neighbor_capacity);
        inner.slots.insert(id, Slot { vertex, neighbors });
        Ok(())
    }

    /// Adds an undirected edge between two registered vertices.
    ///
    /// `v2` is appended to `v1`'s adjacency list and `v1` to `v2`'s. Nothing
    /// is deduplicated and self-loops are accepted.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingVertex` naming the first of `v1`, `v2` that is
    /// not registered. The graph is unchanged in that case.
    pub fn add_edge(&self, v1: &V, v2: &V) -> Result<()> {
        let mut inner = self.inner.write();
        let first = inner.index_of(v1)?;
        let second = inner.index_of(v2)?;

        inner.slots[first].neighbors.push(v2.clone());
        inner.slots[second].neighbors.push(v1.clone());
        inner.edge_count += 1;

        tracing::trace!(from = v1.id(), to = v2.id(), "Edge added");
        Ok(())
    }

    // ── Queries (shared lock) ──────────────────────────────────────────

    /// Returns true if `v2` is in `v1`'s adjacency list.
    ///
    /// Only `v1`'s list is scanned; symmetric storage makes the answer the
    /// same either way round.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingVertex` if either vertex is not registered.
    pub fn is_neighbor<A, B>(&self, v1: &A, v2: &B) -> Result<bool>
    where
        A: Identifier + ?Sized,
        B: Identifier + ?Sized,
    {
        let inner = self.inner.read();
        let slot = inner.slot(v1)?;
        inner.index_of(v2)?;
        let target = v2.id();
        Ok(slot.neighbors.iter().any(|n| n.id() == target))
    }

    /// Returns a snapshot of `vertex`'s neighbors in edge insertion order.
    ///
    /// A registered vertex without edges yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingVertex` if the vertex is not registered.
    pub fn neighbors<Q: Identifier + ?Sized>(&self, vertex: &Q) -> Result<Vec<V>> {
        self.with_neighbors(vertex, <[V]>::to_vec)
    }

    /// Runs `f` over `vertex`'s adjacency list while holding the shared lock.
    ///
    /// Avoids the clone done by [`neighbors`](Self::neighbors). Writers are
    /// blocked until `f` returns, so keep it short.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingVertex` if the vertex is not registered.
    pub fn with_neighbors<Q, R>(&self, vertex: &Q, f: impl FnOnce(&[V]) -> R) -> Result<R>
    where
        Q: Identifier + ?Sized,
    {
        let inner = self.inner.read();
        let slot = inner.slot(vertex)?;
        Ok(f(&slot.neighbors))
    }

    /// Returns the length of `vertex`'s adjacency list.
    ///
    /// Duplicate edges count every time; a self-loop counts twice.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingVertex` if the vertex is not registered.
    pub fn degree<Q: Identifier + ?Sized>(&self, vertex: &Q) -> Result<usize> {
        self.with_neighbors(vertex, <[V]>::len)
    }

    /// Returns true if a vertex with this ID is registered.
    #[must_use]
    pub fn contains_vertex<Q: Identifier + ?Sized>(&self, vertex: &Q) -> bool {
        self.inner.read().slots.contains_key(vertex.id())
    }

    /// Returns a snapshot of all registered vertices in registration order.
    #[must_use]
    pub fn vertices(&self) -> Vec<V> {
        self.inner
            .read()
            .slots
            .values()
            .map(|slot| slot.vertex.clone())
            .collect()
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inner.read().slots.len()
    }

    /// Returns the number of edges added, duplicates and self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.read().edge_count
    }

    /// Returns true if no vertex has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().slots.is_empty()
    }
}

impl<V: Identifier + Clone> Default for SimpleGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Identifier + Clone> fmt::Debug for SimpleGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("SimpleGraph")
            .field("vertices", &inner.slots.len())
            .field("edges", &inner.edge_count)
            .finish()
    }
}

// Compile-time check: SimpleGraph must be Send + Sync for shareable vertices
#[allow(dead_code)]
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SimpleGraph<String>>();
    assert_send_sync::<SimpleGraph<super::types::Vertex>>();
};
