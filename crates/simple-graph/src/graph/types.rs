//! Vertex identity for the graph container.
//!
//! The container never generates identities: anything that can hand out a
//! stable string ID can be stored as a vertex.

use std::fmt;
use std::sync::Arc;

/// A value exposing a stable, unique string identifier.
///
/// Two values with equal IDs are the same vertex as far as the graph is
/// concerned, whatever else they carry.
///
/// # Example
///
/// ```rust
/// use simple_graph::graph::Identifier;
///
/// struct Tile {
///     name: String,
///     owner: u8,
/// }
///
/// impl Identifier for Tile {
///     fn id(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let tile = Tile { name: "north_sea".to_string(), owner: 2 };
/// assert_eq!(tile.id(), "north_sea");
/// ```
pub trait Identifier {
    /// Returns the vertex ID.
    fn id(&self) -> &str;
}

impl Identifier for str {
    fn id(&self) -> &str {
        self
    }
}

impl Identifier for &str {
    fn id(&self) -> &str {
        self
    }
}

impl Identifier for String {
    fn id(&self) -> &str {
        self.as_str()
    }
}

impl<T: Identifier + ?Sized> Identifier for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Identifier + ?Sized> Identifier for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// A plain vertex carrying nothing but its ID.
///
/// # Example
///
/// ```rust
/// use simple_graph::graph::{Identifier, Vertex};
///
/// let v = Vertex::new("id_1");
/// assert_eq!(v.id(), "id_1");
/// assert_eq!(v.to_string(), "id_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    id: String,
}

impl Vertex {
    /// Creates a vertex with the given ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Consumes the vertex and returns its ID.
    #[must_use]
    pub fn into_id(self) -> String {
        self.id
    }
}

impl Identifier for Vertex {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for Vertex {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Vertex {
    fn from(id: String) -> Self {
        Self { id }
    }
}
