use super::GispRule;
use crate::{graph::GraphError, types::Name};
use derive_more::Display;

pub type Result<T> = std::result::Result<T, pest::error::Error<GispRule>>;

/// Failures when building graphs and morphisms out of a parsed document.
#[derive(Debug, Display, PartialEq)]
pub enum Error {
    #[display(fmt = "no graph named {}", _0)]
    UnknownGraph(Name),
    #[display(fmt = "no morphism named {}", _0)]
    UnknownMorphism(Name),
    Graph(GraphError),
}

impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        Error::Graph(err)
    }
}

impl std::error::Error for Error {}
