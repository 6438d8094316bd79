use crate::{
    graph::{GraphError, Triple},
    types::Name,
};
use itertools::Itertools;
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::Arc,
};

/// An immutable named set of triples.
///
/// Elements are indexed by label, so iteration order is stable. Cloning a
/// graph only bumps a reference count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    name: Name,
    elements: Arc<BTreeMap<Name, Triple>>,
}

impl Graph {
    /// Create a graph, checking that every triple is a node or an edge, that
    /// labels are unique and that edges only point to nodes of this graph.
    pub fn new<I>(name: impl Into<Name>, triples: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Triple>,
    {
        let name = name.into();
        let triples: BTreeSet<Triple> = triples.into_iter().collect();
        let mut elements = BTreeMap::new();
        for triple in triples {
            if !triple.is_node() && !triple.is_edge() {
                return Err(GraphError::MalformedTriple {
                    graph: name,
                    triple,
                });
            }
            if elements.contains_key(triple.label()) {
                return Err(GraphError::DuplicateLabel {
                    graph: name,
                    label: triple.label().clone(),
                });
            }
            elements.insert(triple.label().clone(), triple);
        }
        for edge in elements.values().filter(|t| t.is_edge()) {
            for endpoint in &[edge.source(), edge.target()] {
                if !elements.get(*endpoint).map_or(false, Triple::is_node) {
                    return Err(GraphError::DanglingEdge {
                        graph: name,
                        edge: edge.label().clone(),
                        endpoint: (*endpoint).clone(),
                    });
                }
            }
        }
        Ok(Self {
            name,
            elements: Arc::new(elements),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn elements(&self) -> impl Iterator<Item = &Triple> + Clone {
        self.elements.values()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Triple> {
        self.elements().filter(|t| t.is_node())
    }

    pub fn edges(&self) -> impl Iterator<Item = &Triple> {
        self.elements().filter(|t| t.is_edge())
    }

    pub fn get(&self, label: &Name) -> Option<&Triple> {
        self.elements.get(label)
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.elements.get(triple.label()) == Some(triple)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{{}}}", self.name, self.elements().join(", "))
    }
}

/// Collects nodes and edges before creating a [`Graph`].
///
/// Endpoints of an edge are added as nodes implicitly.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    triples: Vec<Triple>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, label: impl Into<Name>) -> Self {
        self.triples.push(Triple::node(label));
        self
    }

    pub fn edge(
        mut self,
        source: impl Into<Name>,
        label: impl Into<Name>,
        target: impl Into<Name>,
    ) -> Self {
        let edge = Triple::new(source, label, target);
        self.triples.push(Triple::node(edge.source()));
        self.triples.push(Triple::node(edge.target()));
        self.triples.push(edge);
        self
    }

    pub fn graph(self, name: impl Into<Name>) -> Result<Graph, GraphError> {
        Graph::new(name, self.triples)
    }
}
