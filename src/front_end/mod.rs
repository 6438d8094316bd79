//! A small s-expression language for graphs and morphisms.
//!
//! ```text
//! (graph G (nodes A B) (edges (A f B)))
//! (morphism m (from G) (to T) (map (A X) (B X) (f g)))
//! ```

pub use ast::{Document, GraphDef, MorphismDef};
pub use error::Error;
pub use parser::parse;

pub(crate) use parser::GispRule;

pub mod error;

mod ast;
mod parser;
