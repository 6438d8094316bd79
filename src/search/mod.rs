//! A generic backtracking search.

pub use backtrack::{Backtrack, BacktrackState, Strategy};

mod backtrack;
