//! Graph pattern matching.
//!
//! Untyped matching is either formulated as a constraint satisfaction problem
//! or handed to the legacy backtracker. Typed matching restricts the
//! candidates through the pullback of the two typings.

pub use formulate::{formulate, formulate_typed, End, Incidence, MatchProblem, MatchVar};
pub use legacy::{find_first_match, find_matches, Binding, LegacyState};
pub use matcher::{Engine, GraphMatcher, MatcherConfig, UnknownEngine};
pub use reconstruct::{reconstruct, NameGenerator};

mod formulate;
pub mod legacy;
mod matcher;
mod reconstruct;
