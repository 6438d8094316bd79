//! Graphs, triples and graph morphisms.

pub use error::GraphError;
pub use graph::{Graph, GraphBuilder};
pub use morphism::Morphism;
pub use triple::Triple;

mod error;
mod graph;
mod morphism;
mod triple;
