use super::error::Error;
use crate::{
    graph::{Graph, GraphBuilder, Morphism},
    types::Name,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GraphDef {
    name: Name,
    nodes: Vec<Name>,
    edges: Vec<(Name, Name, Name)>,
}

impl GraphDef {
    pub fn new(name: Name, nodes: Vec<Name>, edges: Vec<(Name, Name, Name)>) -> Self {
        Self { name, nodes, edges }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn nodes(&self) -> &[Name] {
        &self.nodes
    }

    /// `(source, label, target)`
    pub fn edges(&self) -> &[(Name, Name, Name)] {
        &self.edges
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MorphismDef {
    name: Name,
    from: Name,
    to: Name,
    map: Vec<(Name, Name)>,
}

impl MorphismDef {
    pub fn new(name: Name, from: Name, to: Name, map: Vec<(Name, Name)>) -> Self {
        Self {
            name,
            from,
            to,
            map,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn from(&self) -> &Name {
        &self.from
    }

    pub fn to(&self) -> &Name {
        &self.to
    }

    pub fn map(&self) -> &[(Name, Name)] {
        &self.map
    }
}

/// The definitions of one input file, in order of appearance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    graphs: Vec<GraphDef>,
    morphisms: Vec<MorphismDef>,
}

impl Document {
    pub fn new(graphs: Vec<GraphDef>, morphisms: Vec<MorphismDef>) -> Self {
        Self { graphs, morphisms }
    }

    pub fn push_graph(&mut self, graph: GraphDef) {
        self.graphs.push(graph);
    }

    pub fn push_morphism(&mut self, morphism: MorphismDef) {
        self.morphisms.push(morphism);
    }

    pub fn graphs(&self) -> &[GraphDef] {
        &self.graphs
    }

    pub fn morphisms(&self) -> &[MorphismDef] {
        &self.morphisms
    }

    /// Whether a graph or a morphism is called `name`.
    pub fn defines(&self, name: &Name) -> bool {
        self.graphs.iter().any(|g| &g.name == name)
            || self.morphisms.iter().any(|m| &m.name == name)
    }

    /// Build the graph called `name`.
    pub fn graph(&self, name: &str) -> Result<Graph, Error> {
        let def = self
            .graphs
            .iter()
            .find(|g| g.name.as_str() == name)
            .ok_or_else(|| Error::UnknownGraph(Name::from(name)))?;
        let builder = def
            .nodes
            .iter()
            .fold(GraphBuilder::new(), |b, node| b.node(node));
        Ok(def
            .edges
            .iter()
            .fold(builder, |b, (source, label, target)| {
                b.edge(source, label, target)
            })
            .graph(&def.name)?)
    }

    /// Build the morphism called `name` together with its domain and codomain.
    pub fn morphism(&self, name: &str) -> Result<Morphism, Error> {
        let def = self
            .morphisms
            .iter()
            .find(|m| m.name.as_str() == name)
            .ok_or_else(|| Error::UnknownMorphism(Name::from(name)))?;
        Ok(Morphism::new(
            &def.name,
            self.graph(def.from.as_str())?,
            self.graph(def.to.as_str())?,
            def.map.iter().cloned(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphError, Triple};

    fn create_document() -> Document {
        Document::new(
            vec![
                GraphDef::new(
                    Name::from("H"),
                    vec![Name::from("z")],
                    vec![(Name::from("a"), Name::from("1"), Name::from("b"))],
                ),
                GraphDef::new(Name::from("T"), vec![Name::from("t")], vec![]),
            ],
            vec![
                MorphismDef::new(
                    Name::from("h"),
                    Name::from("H"),
                    Name::from("T"),
                    vec![
                        (Name::from("a"), Name::from("t")),
                        (Name::from("b"), Name::from("t")),
                        (Name::from("z"), Name::from("t")),
                    ],
                ),
                MorphismDef::new(Name::from("bad"), Name::from("H"), Name::from("X"), vec![]),
            ],
        )
    }

    #[test]
    fn test_graph() {
        let g = create_document().graph("H").unwrap();
        assert_eq!(g.name(), &Name::from("H"));
        assert_eq!(g.nodes().count(), 3);
        assert!(g.contains(&Triple::new("a", "1", "b")));
        assert_eq!(
            create_document().graph("G"),
            Err(Error::UnknownGraph(Name::from("G")))
        );
    }

    #[test]
    fn test_morphism() {
        let doc = create_document();
        assert!(doc.defines(&Name::from("h")));
        assert!(!doc.defines(&Name::from("t")));
        // 1 is an edge but T has no edges
        assert_eq!(
            doc.morphism("h"),
            Err(Error::Graph(GraphError::NotTotal {
                morphism: Name::from("h"),
                label: Name::from("1"),
            }))
        );
        assert_eq!(
            doc.morphism("bad"),
            Err(Error::UnknownGraph(Name::from("X")))
        );
        assert_eq!(
            doc.morphism("g"),
            Err(Error::UnknownMorphism(Name::from("g")))
        );
    }
}
