//! The symbolic propositional core: variables, literals, clauses, CNFs, and assignments.
//!
//! Every type here is a plain value type with a constructor that normalizes its input
//! (`variable`, `lit`, `clause`, `cnf`) and, for `Clause`/`Cnf`, a `tautologically_reduce`
//! that folds Boolean constants out of the formula via a small fixed set of rewrite rules.

pub mod assignment;
pub mod clause;
pub mod cnf;
pub mod literal;
pub mod variable;

pub use assignment::{assign, assign_in_clause, assign_in_cnf, assign_in_lit, Assignment};
pub use clause::{clause, Clause};
pub use cnf::{cnf, Cnf};
pub use literal::{absolute_value, lit, neg, Bool, IntoLiteral, Literal};
pub use variable::{variable, Variable};
