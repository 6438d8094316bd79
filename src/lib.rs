//! Graph pattern matching on graphs and typed graphs.

pub mod csp;
pub mod front_end;
pub mod graph;
pub mod matching;
pub mod search;
pub mod types;
