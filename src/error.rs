//! Error types for the mhgraph-sat library.

use thiserror::Error;

/// Errors that can occur while constructing or reducing the core value types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A constructor was given an empty collection where a non-empty one is required.
    #[error("empty {kind}: constructors reject empty collections")]
    EmptyCollection {
        /// Name of the thing that was empty (e.g. "clause", "hyperedge").
        kind: &'static str,
    },

    /// A literal or vertex was built from the integer zero.
    #[error("zero is not a valid {kind}")]
    ZeroValue {
        /// Name of the thing that rejects zero (e.g. "literal", "vertex").
        kind: &'static str,
    },

    /// A vertex, variable, or multiplicity was non-positive.
    #[error("{kind} must be a positive integer, got {value}")]
    NonPositive {
        /// Name of the quantity.
        kind: &'static str,
        /// The offending value.
        value: i64,
    },

    /// `neg`/`absolute_value` was asked to do something undefined on a `Bool`.
    #[error("{op} is undefined on Bool constants")]
    UndefinedOnBool {
        /// Name of the operation (e.g. "neg").
        op: &'static str,
    },

    /// `mhgraph_from_cnf` was given a CNF that tautologically reduces to a constant.
    #[error("cannot derive an MHGraph from a CNF that reduces to a constant")]
    ConstantCnf,

    /// An explicit CNF enumeration was asked for a multiplicity outside `[1, 2^k]`.
    #[error("multiplicity {multiplicity} out of range [1, {max}] for an edge of size {size}")]
    MultiplicityOutOfRange {
        /// Requested multiplicity.
        multiplicity: usize,
        /// `2^size`, the largest valid multiplicity.
        max: usize,
        /// Edge size.
        size: usize,
    },

    /// A value violated a structural restriction of the type being built into (e.g. an
    /// `Edge` capped at cardinality 2, or an `HGraph`/`Graph` conversion that requires
    /// multiplicity 1), as opposed to being merely non-positive or empty.
    #[error("{kind} must be at most {limit}, got {value}")]
    StructuralRestriction {
        /// Name of the restricted quantity (e.g. "edge cardinality").
        kind: &'static str,
        /// The restriction's upper bound.
        limit: usize,
        /// The offending value.
        value: usize,
    },
}

/// Result type alias for mhgraph-sat operations.
pub type Result<T> = std::result::Result<T, CoreError>;
