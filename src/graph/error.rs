//! Error management.

use crate::{graph::Triple, types::Name};
use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum GraphError {
    #[display(fmt = "edge {} of graph {} has no node {}", edge, graph, endpoint)]
    DanglingEdge {
        graph: Name,
        edge: Name,
        endpoint: Name,
    },
    #[display(fmt = "label {} occurs twice in graph {}", label, graph)]
    DuplicateLabel { graph: Name, label: Name },
    #[display(fmt = "triple {} in graph {} is neither node nor edge", triple, graph)]
    MalformedTriple { graph: Name, triple: Triple },
    #[display(fmt = "morphism {} maps {} which is not in its domain", morphism, label)]
    UnknownElement { morphism: Name, label: Name },
    #[display(fmt = "morphism {} maps {} to two different elements", morphism, label)]
    ConflictingImages { morphism: Name, label: Name },
    #[display(fmt = "morphism {} does not map {}", morphism, label)]
    NotTotal { morphism: Name, label: Name },
    #[display(fmt = "morphism {} maps {} to {} which is not in its codomain", morphism, label, image)]
    UnknownImage {
        morphism: Name,
        label: Name,
        image: Name,
    },
    #[display(fmt = "morphism {} maps {} to an element of the other kind", morphism, label)]
    KindMismatch { morphism: Name, label: Name },
    #[display(fmt = "morphism {} does not preserve the endpoints of {}", morphism, edge)]
    IncidenceViolated { morphism: Name, edge: Name },
    #[display(fmt = "morphisms {} and {} have different codomains", left, right)]
    CodomainMismatch { left: Name, right: Name },
}

impl std::error::Error for GraphError {}
