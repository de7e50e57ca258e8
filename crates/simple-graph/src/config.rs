//! Construction-time tuning for the graph container.
//!
//! Values are layered with `figment`, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`simple-graph.toml` by default)
//! 3. Environment variables prefixed with `SIMPLE_GRAPH_`
//!
//! ```toml
//! initial_vertex_capacity = 4096
//! initial_neighbor_capacity = 6
//! ```
//!
//! Capacities are allocation hints only. They never change how the graph
//! behaves, only how often its storage reallocates while it grows.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Config file read by [`GraphConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "simple-graph.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SIMPLE_GRAPH_";

/// Upper bound accepted for the vertex capacity hint.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Upper bound accepted for the neighbor capacity hint.
///
/// Reserved again for every vertex added, so it stays far below
/// [`MAX_INITIAL_CAPACITY`].
pub const MAX_INITIAL_NEIGHBOR_CAPACITY: usize = 1 << 12;

/// Pre-allocation settings for a [`SimpleGraph`](crate::graph::SimpleGraph).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of vertices to reserve room for up front.
    pub initial_vertex_capacity: usize,
    /// Adjacency list capacity reserved for each newly added vertex.
    pub initial_neighbor_capacity: usize,
}

impl GraphConfig {
    /// Returns the defaults-only figment that every loader starts from.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    /// Loads configuration from `simple-graph.toml` in the working directory
    /// (if present) and `SIMPLE_GRAPH_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_figment(
            &Self::figment()
                .merge(Toml::file(DEFAULT_CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Loads configuration from the given TOML file, then applies
    /// environment overrides. A missing file yields the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_figment(
            &Self::figment()
                .merge(Toml::file(path.as_ref()))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Parses configuration from a TOML string, ignoring the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::from_figment(&Self::figment().merge(Toml::string(toml)))
    }

    /// Extracts and validates a configuration from any figment.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the vertex hint against [`MAX_INITIAL_CAPACITY`] and the
    /// neighbor hint against [`MAX_INITIAL_NEIGHBOR_CAPACITY`].
    pub fn validate(&self) -> Result<()> {
        if self.initial_vertex_capacity > MAX_INITIAL_CAPACITY {
            return Err(Error::Config(format!(
                "initial_vertex_capacity {} exceeds maximum {}",
                self.initial_vertex_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        if self.initial_neighbor_capacity > MAX_INITIAL_NEIGHBOR_CAPACITY {
            return Err(Error::Config(format!(
                "initial_neighbor_capacity {} exceeds maximum {}",
                self.initial_neighbor_capacity, MAX_INITIAL_NEIGHBOR_CAPACITY
            )));
        }
        Ok(())
    }

    /// Sets the vertex capacity hint (builder pattern).
    #[must_use]
    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.initial_vertex_capacity = capacity;
        self
    }

    /// Sets the per-vertex neighbor capacity hint (builder pattern).
    #[must_use]
    pub fn with_neighbor_capacity(mut self, capacity: usize) -> Self {
        self.initial_neighbor_capacity = capacity;
        self
    }
}
