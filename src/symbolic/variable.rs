//! Propositional variables.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// A propositional variable: a positive integer, identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable(u32);

impl Variable {
    /// Construct a variable. Requires `n >= 1`.
    pub fn new(n: u32) -> Result<Self> {
        if n == 0 {
            return Err(CoreError::ZeroValue { kind: "variable" });
        }
        Ok(Self(n))
    }

    /// The underlying positive integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Construct a [`Variable`]. Idempotent: `variable(variable(n).get()) == variable(n)`.
pub fn variable(n: u32) -> Result<Variable> {
    Variable::new(n)
}

#[cfg(test)]
#[path = "../unit_tests/symbolic/variable.rs"]
mod tests;
