//! A matcher that grows partial bindings edge by edge.
//!
//! Each step pairs one unmatched pattern triple with one host triple. Edges
//! are matched first; isolated nodes are only considered once no pattern edge
//! is left, since every other node gets bound through an incident edge.

use crate::{
    graph::{Graph, Triple},
    search::{Backtrack, BacktrackState, Strategy},
    types::Name,
};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Pattern label to host label.
pub type Binding = BTreeMap<Name, Name>;

/// Pair a pattern triple with a host triple.
pub type Choice = (Triple, Triple);

#[derive(Debug, Clone)]
pub struct LegacyState<'h> {
    host: &'h Graph,
    binding: Binding,
    used: BTreeSet<Name>,
    unmatched: BTreeSet<Triple>,
    injective: bool,
}

impl<'h> LegacyState<'h> {
    pub fn new(pattern: &Graph, host: &'h Graph, injective: bool) -> Self {
        Self {
            host,
            binding: Binding::new(),
            used: BTreeSet::new(),
            unmatched: pattern.elements().cloned().collect(),
            injective,
        }
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    pub fn unmatched(&self) -> &BTreeSet<Triple> {
        &self.unmatched
    }

    fn bind(&mut self, from: &Name, to: &Name) {
        self.binding.insert(from.clone(), to.clone());
        self.used.insert(to.clone());
    }

    fn usable(&self, host: &Triple) -> bool {
        !self.injective || !self.used.contains(host.label())
    }

    fn successors(&self) -> Vec<Choice> {
        let mut choices = vec![];
        let mut edges = self.unmatched.iter().filter(|t| t.is_edge()).peekable();
        if edges.peek().is_some() {
            for pattern in edges {
                for host in self.host.edges().filter(|h| self.usable(h)) {
                    choices.push((pattern.clone(), host.clone()));
                }
            }
        } else {
            for pattern in self.unmatched.iter().filter(|t| t.is_node()) {
                for host in self.host.nodes().filter(|h| self.usable(h)) {
                    choices.push((pattern.clone(), host.clone()));
                }
            }
        }
        choices
    }
}

impl<'h> BacktrackState for LegacyState<'h> {
    type Choice = Choice;
    type Key = (BTreeSet<Triple>, Binding);
    type Output = Binding;

    fn can_apply(&self, (pattern, host): &Choice) -> bool {
        if !self.unmatched.contains(pattern)
            || !self.host.contains(host)
            || pattern.is_node() != host.is_node()
            || self.binding.contains_key(pattern.label())
            || !self.usable(host)
        {
            return false;
        }
        if pattern.source() == pattern.target() && host.source() != host.target() {
            return false;
        }
        for &(end, image) in &[
            (pattern.source(), host.source()),
            (pattern.target(), host.target()),
        ] {
            match self.binding.get(end) {
                Some(bound) if bound != image => return false,
                None if self.injective && self.used.contains(image) => return false,
                _ => {}
            }
        }
        // two distinct pattern nodes must not both land on a loop's only node
        !(self.injective
            && pattern.source() != pattern.target()
            && host.source() == host.target()
            && !self.binding.contains_key(pattern.source())
            && !self.binding.contains_key(pattern.target()))
    }

    fn apply(&self, (pattern, host): &Choice) -> (Vec<Choice>, Self) {
        let mut next = self.clone();
        next.bind(pattern.source(), host.source());
        next.bind(pattern.label(), host.label());
        next.bind(pattern.target(), host.target());
        next.unmatched.remove(pattern);
        let binding = &next.binding;
        next.unmatched
            .retain(|t| !(t.is_node() && binding.contains_key(t.label())));
        (next.successors(), next)
    }

    fn is_done(&self) -> bool {
        self.unmatched.is_empty()
    }

    fn key(&self) -> Self::Key {
        (self.unmatched.clone(), self.binding.clone())
    }

    fn result(&self) -> Binding {
        self.binding.clone()
    }
}

/// The initial choices: the first pattern edge, or the first pattern node if
/// there are no edges, against every host element of the same kind.
fn seed(pattern: &Graph, host: &Graph) -> Vec<Choice> {
    match pattern.edges().next().or_else(|| pattern.nodes().next()) {
        Some(first) => host
            .elements()
            .filter(|h| h.is_node() == first.is_node())
            .map(|h| (first.clone(), h.clone()))
            .collect(),
        None => vec![],
    }
}

fn backtrack<'h>(state_hashing: bool) -> Backtrack<LegacyState<'h>> {
    if state_hashing {
        Backtrack::new().strategy(Strategy::StateHashing)
    } else {
        Backtrack::new()
    }
}

/// All bindings of `pattern` into `host`. An empty pattern has none.
pub fn find_matches(
    pattern: &Graph,
    host: &Graph,
    injective: bool,
    state_hashing: bool,
) -> Vec<Binding> {
    let choices = seed(pattern, host);
    if choices.is_empty() {
        return vec![];
    }
    let mut backtrack = backtrack(state_hashing);
    let results = backtrack.all_results(LegacyState::new(pattern, host, injective), choices);
    debug!(
        "{} bindings of {} into {}, {} states",
        results.len(),
        pattern.name(),
        host.name(),
        backtrack.num_states()
    );
    results
}

pub fn find_first_match(
    pattern: &Graph,
    host: &Graph,
    injective: bool,
    state_hashing: bool,
) -> Option<Binding> {
    let choices = seed(pattern, host);
    if choices.is_empty() {
        return None;
    }
    backtrack(state_hashing).first_result(LegacyState::new(pattern, host, injective), choices)
}
