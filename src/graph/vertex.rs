//! Graph vertices.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// A vertex: a positive integer, identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vertex(u32);

impl Vertex {
    /// Construct a vertex. Requires `n >= 1`.
    pub fn new(n: u32) -> Result<Self> {
        if n == 0 {
            return Err(CoreError::ZeroValue { kind: "vertex" });
        }
        Ok(Self(n))
    }

    /// The underlying positive integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Construct a [`Vertex`]. Idempotent: `vertex(vertex(n).get()) == vertex(n)`.
pub fn vertex(n: u32) -> Result<Vertex> {
    Vertex::new(n)
}

#[cfg(test)]
#[path = "../unit_tests/graph/vertex.rs"]
mod tests;
