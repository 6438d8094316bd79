use log::trace;
use std::{collections::HashSet, hash::Hash, ops::ControlFlow};

/// Heuristics a [`Backtrack`] run may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Skip states whose key has been visited before.
    StateHashing,
}

/// The domain specific part of a backtracking run.
///
/// States are values: applying a choice yields a new state together with the
/// choices available in it, the old state is left untouched.
pub trait BacktrackState: Sized {
    type Choice;
    type Key: Hash + Eq;
    type Output: Hash + Eq + Clone;

    fn can_apply(&self, choice: &Self::Choice) -> bool;

    fn apply(&self, choice: &Self::Choice) -> (Vec<Self::Choice>, Self);

    fn is_done(&self) -> bool;

    /// Two states with the same key lead to the same results.
    fn key(&self) -> Self::Key;

    /// Only called on states for which `is_done` holds.
    fn result(&self) -> Self::Output;
}

/// A depth-first driver over [`BacktrackState`]s.
pub struct Backtrack<S: BacktrackState> {
    strategies: HashSet<Strategy>,
    visited: HashSet<S::Key>,
    num_states: usize,
}

impl<S: BacktrackState> Backtrack<S> {
    pub fn new() -> Self {
        Self {
            strategies: HashSet::new(),
            visited: HashSet::new(),
            num_states: 0,
        }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategies.insert(strategy);
        self
    }

    /// The number of states expanded so far.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// All distinct results reachable from `start`, in discovery order.
    pub fn all_results(&mut self, start: S, choices: Vec<S::Choice>) -> Vec<S::Output> {
        let mut seen = HashSet::new();
        let mut results = vec![];
        self.run(start, choices, |result| {
            if seen.insert(result.clone()) {
                results.push(result);
            }
            ControlFlow::Continue(())
        });
        results
    }

    pub fn first_result(&mut self, start: S, choices: Vec<S::Choice>) -> Option<S::Output> {
        let mut first = None;
        self.run(start, choices, |result| {
            first = Some(result);
            ControlFlow::Break(())
        });
        first
    }

    fn run<F>(&mut self, start: S, choices: Vec<S::Choice>, mut visit: F)
    where
        F: FnMut(S::Output) -> ControlFlow<()>,
    {
        let state_hashing = self.strategies.contains(&Strategy::StateHashing);
        let mut frontier = vec![(start, choices)];
        while let Some((state, choices)) = frontier.pop() {
            if state_hashing && !self.visited.insert(state.key()) {
                continue;
            }
            self.num_states += 1;
            if state.is_done() {
                if let ControlFlow::Break(()) = visit(state.result()) {
                    break;
                }
                continue;
            }
            let depth = frontier.len();
            for choice in choices.iter().rev() {
                if state.can_apply(choice) {
                    let (next_choices, next) = state.apply(choice);
                    frontier.push((next, next_choices));
                }
            }
            trace!("expanded state into {} successors", frontier.len() - depth);
        }
    }
}

impl<S: BacktrackState> Default for Backtrack<S> {
    fn default() -> Self {
        Self::new()
    }
}
