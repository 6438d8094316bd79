use crate::{
    csp::Assignment,
    graph::{Graph, GraphError, Morphism, Triple},
    matching::MatchVar,
    types::Name,
};

/// Hands out `prefix0`, `prefix1`, ... for the morphisms of one matcher.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    prefix: String,
    counter: usize,
}

impl NameGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    pub fn fresh(&mut self) -> Name {
        let name = Name::new(format!("{}{}", self.prefix, self.counter));
        self.counter += 1;
        name
    }
}

/// Turn a satisfying assignment into a morphism `domain -> codomain`.
///
/// Errors of the morphism constructor are passed on as they are.
pub fn reconstruct(
    assignment: &Assignment<MatchVar, Triple>,
    domain: &Graph,
    codomain: &Graph,
    names: &mut NameGenerator,
) -> Result<Morphism, GraphError> {
    Morphism::new(
        names.fresh(),
        domain.clone(),
        codomain.clone(),
        assignment
            .iter()
            .map(|(var, value)| (var.name().clone(), value.label().clone())),
    )
}
