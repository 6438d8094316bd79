use crate::{
    graph::{Graph, GraphError, Triple},
    types::Name,
};
use itertools::Itertools;
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

/// A structure preserving map between two graphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morphism {
    name: Name,
    domain: Graph,
    codomain: Graph,
    mapping: BTreeMap<Name, Name>,
}

impl Morphism {
    /// Create a morphism from a label mapping.
    ///
    /// The mapping must be total on the domain, send nodes to nodes and edges
    /// to edges of the codomain, and commute with source and target.
    pub fn new<I, A, B>(
        name: impl Into<Name>,
        domain: Graph,
        codomain: Graph,
        mapping: I,
    ) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<Name>,
        B: Into<Name>,
    {
        let name = name.into();
        let mut entries = BTreeMap::new();
        for (from, to) in mapping {
            let (from, to): (Name, Name) = (from.into(), to.into());
            match entries.get(&from) {
                Some(image) if image != &to => {
                    return Err(GraphError::ConflictingImages {
                        morphism: name,
                        label: from,
                    })
                }
                Some(_) => {}
                None => {
                    entries.insert(from, to);
                }
            }
        }
        let mapping = entries;
        if let Some(label) = mapping.keys().find(|l| domain.get(l).is_none()) {
            return Err(GraphError::UnknownElement {
                morphism: name,
                label: label.clone(),
            });
        }
        for triple in domain.elements() {
            let image = match mapping.get(triple.label()) {
                Some(image) => image,
                None => {
                    return Err(GraphError::NotTotal {
                        morphism: name,
                        label: triple.label().clone(),
                    })
                }
            };
            let image = match codomain.get(image) {
                Some(image) => image,
                None => {
                    return Err(GraphError::UnknownImage {
                        morphism: name,
                        label: triple.label().clone(),
                        image: image.clone(),
                    })
                }
            };
            if triple.is_node() != image.is_node() {
                return Err(GraphError::KindMismatch {
                    morphism: name,
                    label: triple.label().clone(),
                });
            }
            if triple.is_edge()
                && (mapping.get(triple.source()) != Some(image.source())
                    || mapping.get(triple.target()) != Some(image.target()))
            {
                return Err(GraphError::IncidenceViolated {
                    morphism: name,
                    edge: triple.label().clone(),
                });
            }
        }
        Ok(Self {
            name,
            domain,
            codomain,
            mapping,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn domain(&self) -> &Graph {
        &self.domain
    }

    pub fn codomain(&self) -> &Graph {
        &self.codomain
    }

    pub fn mapping(&self) -> &BTreeMap<Name, Name> {
        &self.mapping
    }

    pub fn apply(&self, label: &Name) -> Option<&Name> {
        self.mapping.get(label)
    }

    /// The codomain element a domain element is sent to.
    pub fn image(&self, triple: &Triple) -> Option<&Triple> {
        if self.domain.contains(triple) {
            self.apply(triple.label())
                .and_then(|image| self.codomain.get(image))
        } else {
            None
        }
    }

    /// All domain nodes sent to the codomain node `node`.
    pub fn all_node_instances<'a>(&'a self, node: &'a Name) -> impl Iterator<Item = &'a Triple> {
        self.domain
            .nodes()
            .filter(move |t| self.apply(t.label()) == Some(node))
    }

    /// All domain edges sent to the codomain edge `edge`.
    pub fn all_instances<'a>(&'a self, edge: &'a Triple) -> impl Iterator<Item = &'a Triple> {
        self.domain
            .edges()
            .filter(move |t| self.apply(t.label()) == Some(edge.label()))
    }

    /// Pullback of `self: A -> C` along `other: B -> C`.
    ///
    /// Returns the two projections `P -> A` and `P -> B`, where `P` holds the
    /// pairs `(a,b)` of same-kind elements with equal images in `C`.
    pub fn pullback(&self, other: &Morphism) -> Result<(Morphism, Morphism), GraphError> {
        if self.codomain != other.codomain {
            return Err(GraphError::CodomainMismatch {
                left: self.name.clone(),
                right: other.name.clone(),
            });
        }
        let object_name = Name::new(format!("{}*{}", self.domain.name(), other.domain.name()));
        let mut labels = BTreeSet::new();
        let mut triples = vec![];
        let mut first = vec![];
        let mut second = vec![];
        for (a, b) in self.domain.elements().cartesian_product(other.domain.elements()) {
            if a.is_node() != b.is_node() || self.apply(a.label()) != other.apply(b.label()) {
                continue;
            }
            let label = Name::pair(a.label(), b.label());
            if !labels.insert(label.clone()) {
                return Err(GraphError::DuplicateLabel {
                    graph: object_name,
                    label,
                });
            }
            triples.push(Triple::new(
                Name::pair(a.source(), b.source()),
                label.clone(),
                Name::pair(a.target(), b.target()),
            ));
            first.push((label.clone(), a.label().clone()));
            second.push((label, b.label().clone()));
        }
        let object = Graph::new(object_name, triples)?;
        Ok((
            Morphism::new(
                format!("{}*{}_1", self.name, other.name),
                object.clone(),
                self.domain.clone(),
                first,
            )?,
            Morphism::new(
                format!("{}*{}_2", self.name, other.name),
                object,
                other.domain.clone(),
                second,
            )?,
        ))
    }
}

impl fmt::Display for Morphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} {{{}}}",
            self.name,
            self.domain.name(),
            self.codomain.name(),
            self.mapping
                .iter()
                .map(|(from, to)| format!("{} |-> {}", from, to))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn create_type() -> Graph {
        GraphBuilder::new()
            .edge("1", "12", "2")
            .edge("2", "22", "2")
            .graph("G_0")
            .unwrap()
    }

    fn create_instance() -> Graph {
        GraphBuilder::new()
            .edge("A", "a", "B")
            .edge("A'", "a'", "B")
            .edge("B", "b", "C")
            .edge("B", "b'", "C'")
            .graph("G_1")
            .unwrap()
    }

    fn create_typing() -> Morphism {
        Morphism::new(
            "m1",
            create_instance(),
            create_type(),
            vec![
                ("A", "1"),
                ("A'", "1"),
                ("B", "2"),
                ("C", "2"),
                ("C'", "2"),
                ("a", "12"),
                ("a'", "12"),
                ("b", "22"),
                ("b'", "22"),
            ],
        )
        .unwrap()
    }

    fn create_pattern_typing() -> Morphism {
        let pattern = GraphBuilder::new()
            .edge("X", "xy", "Y")
            .graph("G_0Sub1")
            .unwrap();
        Morphism::new(
            "m0Sub1",
            pattern,
            create_type(),
            vec![("X", "1"), ("xy", "12"), ("Y", "2")],
        )
        .unwrap()
    }

    #[test]
    fn test_typing() {
        let m = create_typing();
        assert_eq!(m.apply(&Name::from("A'")), Some(&Name::from("1")));
        assert_eq!(
            m.image(&Triple::new("B", "b'", "C'")),
            Some(&Triple::new("2", "22", "2"))
        );
        assert_eq!(m.image(&Triple::new("B", "b'", "C")), None);
        assert_eq!(
            m.all_node_instances(&Name::from("2"))
                .map(|t| t.label().as_str())
                .collect::<Vec<_>>(),
            vec!["B", "C", "C'"]
        );
        let loop_edge = Triple::new("2", "22", "2");
        assert_eq!(
            m.all_instances(&loop_edge)
                .map(|t| t.label().as_str())
                .collect::<Vec<_>>(),
            vec!["b", "b'"]
        );
    }

    #[test]
    fn test_invalid_morphisms() {
        let instance = create_instance();
        let ty = create_type();
        assert_eq!(
            Morphism::new("m", instance.clone(), ty.clone(), vec![("A", "1")]),
            Err(GraphError::NotTotal {
                morphism: Name::from("m"),
                label: Name::from("A'"),
            })
        );
        let small = GraphBuilder::new().edge("X", "xy", "Y").graph("S").unwrap();
        assert_eq!(
            Morphism::new(
                "m",
                small.clone(),
                ty.clone(),
                vec![("X", "2"), ("xy", "12"), ("Y", "2")]
            ),
            Err(GraphError::IncidenceViolated {
                morphism: Name::from("m"),
                edge: Name::from("xy"),
            })
        );
        assert_eq!(
            Morphism::new(
                "m",
                small.clone(),
                ty.clone(),
                vec![("X", "1"), ("xy", "2"), ("Y", "2")]
            ),
            Err(GraphError::KindMismatch {
                morphism: Name::from("m"),
                label: Name::from("xy"),
            })
        );
        assert_eq!(
            Morphism::new(
                "m",
                small.clone(),
                ty.clone(),
                vec![("X", "1"), ("xy", "12"), ("Y", "3")]
            ),
            Err(GraphError::UnknownImage {
                morphism: Name::from("m"),
                label: Name::from("Y"),
                image: Name::from("3"),
            })
        );
        assert_eq!(
            Morphism::new(
                "m",
                small,
                ty,
                vec![("X", "1"), ("xy", "12"), ("Y", "2"), ("Z", "2")]
            ),
            Err(GraphError::UnknownElement {
                morphism: Name::from("m"),
                label: Name::from("Z"),
            })
        );
    }

    #[test]
    fn test_pullback() {
        let (p1, p2) = create_pattern_typing().pullback(&create_typing()).unwrap();
        assert_eq!(p1.codomain().name(), &Name::from("G_0Sub1"));
        assert_eq!(p2.codomain().name(), &Name::from("G_1"));
        assert_eq!(p1.domain(), p2.domain());
        // X over A, A'; Y over B, C, C'; xy over a, a'.
        assert_eq!(p1.domain().nodes().count(), 5);
        assert_eq!(
            p1.domain().edges().cloned().collect::<Vec<_>>(),
            vec![
                Triple::new("(X,A')", "(xy,a')", "(Y,B)"),
                Triple::new("(X,A)", "(xy,a)", "(Y,B)"),
            ]
        );
        let xy = Triple::new("X", "xy", "Y");
        assert_eq!(p1.all_instances(&xy).count(), 2);
        assert_eq!(
            p1.all_instances(&xy)
                .filter_map(|t| p2.image(t))
                .map(|t| t.label().as_str())
                .collect::<Vec<_>>(),
            vec!["a'", "a"]
        );
    }

    #[test]
    fn test_conflicting_images() {
        let small = GraphBuilder::new().node("X").graph("S").unwrap();
        assert_eq!(
            Morphism::new("m", small.clone(), create_type(), vec![("X", "1"), ("X", "2")]),
            Err(GraphError::ConflictingImages {
                morphism: Name::from("m"),
                label: Name::from("X"),
            })
        );
        let repeated =
            Morphism::new("m", small, create_type(), vec![("X", "1"), ("X", "1")]).unwrap();
        assert_eq!(repeated.mapping().len(), 1);
    }

    #[test]
    fn test_pullback_with_separators_in_labels() {
        let ty = GraphBuilder::new().node("t").graph("T").unwrap();
        let left = Morphism::new(
            "l",
            GraphBuilder::new().node("x").node("x,y").graph("L").unwrap(),
            ty.clone(),
            vec![("x", "t"), ("x,y", "t")],
        )
        .unwrap();
        let right = Morphism::new(
            "r",
            GraphBuilder::new().node("y,z").node("z").graph("R").unwrap(),
            ty,
            vec![("y,z", "t"), ("z", "t")],
        )
        .unwrap();
        let (p1, p2) = left.pullback(&right).unwrap();
        assert_eq!(p1.domain().len(), 4);
        assert_eq!(p1.all_node_instances(&Name::from("x")).count(), 2);
        assert_eq!(p1.all_node_instances(&Name::from("x,y")).count(), 2);
        assert_eq!(p2.all_node_instances(&Name::from("z")).count(), 2);
    }

    #[test]
    fn test_pullback_codomain_mismatch() {
        let other_type = GraphBuilder::new().node("1").graph("T").unwrap();
        let pattern = GraphBuilder::new().node("X").graph("P").unwrap();
        let typed = Morphism::new("t", pattern, other_type, vec![("X", "1")]).unwrap();
        assert_eq!(
            typed.pullback(&create_typing()),
            Err(GraphError::CodomainMismatch {
                left: Name::from("t"),
                right: Name::from("m1"),
            })
        );
    }
}
