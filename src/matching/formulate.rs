//! Translation of matching problems into constraint satisfaction problems.

use crate::{
    csp::{AllDistinct, BinaryConstraint, Problem, Variable},
    graph::{Graph, Morphism, Triple},
    types::Name,
};
use itertools::Itertools;
use log::debug;

/// A matching variable, one per pattern element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchVar {
    Node(Name),
    Edge(Name),
}

impl MatchVar {
    pub fn name(&self) -> &Name {
        match self {
            MatchVar::Node(name) | MatchVar::Edge(name) => name,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, MatchVar::Node(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Source,
    Target,
}

/// The edge candidate's `end` must be the node candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Incidence {
    edge: MatchVar,
    node: MatchVar,
    end: End,
}

impl Incidence {
    pub fn new(edge: MatchVar, node: MatchVar, end: End) -> Self {
        Self { edge, node, end }
    }

    pub fn end(&self) -> End {
        self.end
    }
}

impl BinaryConstraint<MatchVar, Triple> for Incidence {
    fn lhs(&self) -> &MatchVar {
        &self.edge
    }

    fn rhs(&self) -> &MatchVar {
        &self.node
    }

    fn satisfied(&self, edge: &Triple, node: &Triple) -> bool {
        match self.end {
            End::Source => edge.source() == node.label(),
            End::Target => edge.target() == node.label(),
        }
    }
}

pub type MatchProblem = Problem<MatchVar, Triple, Incidence>;

/// Every pattern node may go to every host node, every pattern edge to every
/// host edge.
pub fn formulate(pattern: &Graph, host: &Graph, injective: bool) -> MatchProblem {
    let host_nodes: Vec<Triple> = host.nodes().cloned().collect();
    let host_edges: Vec<Triple> = host.edges().cloned().collect();
    build(
        pattern.nodes().map(|n| (n, host_nodes.clone())),
        pattern.edges().map(|e| (e, host_edges.clone())),
        injective,
    )
}

/// Candidates come from the relevant morphism `P -> pattern` of a pullback:
/// the instances of a pattern element in `P`, sent into the host by
/// `projection: P -> host`.
pub fn formulate_typed(relevant: &Morphism, projection: &Morphism, injective: bool) -> MatchProblem {
    let pattern = relevant.codomain();
    build(
        pattern.nodes().map(|n| {
            let instances = relevant.all_node_instances(n.label());
            (n, lift(instances, projection))
        }),
        pattern
            .edges()
            .map(|e| (e, lift(relevant.all_instances(e), projection))),
        injective,
    )
}

fn lift<'a>(instances: impl Iterator<Item = &'a Triple>, projection: &Morphism) -> Vec<Triple> {
    instances
        .filter_map(|t| projection.image(t))
        .unique()
        .cloned()
        .collect()
}

fn build<'a, N, E>(nodes: N, edges: E, injective: bool) -> MatchProblem
where
    N: Iterator<Item = (&'a Triple, Vec<Triple>)>,
    E: Iterator<Item = (&'a Triple, Vec<Triple>)>,
{
    let mut variables = vec![];
    let mut node_vars = vec![];
    let mut edge_vars = vec![];
    let mut incidences = vec![];
    for (node, candidates) in nodes {
        let var = MatchVar::Node(node.label().clone());
        node_vars.push(var.clone());
        variables.push(Variable::new(var, candidates));
    }
    for (edge, candidates) in edges {
        let var = MatchVar::Edge(edge.label().clone());
        incidences.push(Incidence::new(
            var.clone(),
            MatchVar::Node(edge.source().clone()),
            End::Source,
        ));
        incidences.push(Incidence::new(
            var.clone(),
            MatchVar::Node(edge.target().clone()),
            End::Target,
        ));
        edge_vars.push(var.clone());
        variables.push(Variable::new(var, candidates));
    }
    let mut problem = Problem::new(variables);
    for incidence in incidences {
        problem.add_constraint(incidence);
    }
    if injective {
        problem.add_all_distinct(AllDistinct::new(node_vars));
        problem.add_all_distinct(AllDistinct::new(edge_vars));
    }
    debug!(
        "formulated {} variables, {} incidences, injective: {}",
        problem.variables().len(),
        problem.num_constraints(),
        injective
    );
    problem
}
