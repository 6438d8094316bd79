//! A backtracking constraint satisfaction solver.
//!
//! Problems consist of variables with finite domains, binary constraints and
//! all-distinct groups. The solver only checks a candidate value against
//! variables that are already bound; there is no propagation.

pub use problem::{AllDistinct, BinaryConstraint, Problem, Variable};
pub use solver::Assignment;

mod problem;
mod solver;
