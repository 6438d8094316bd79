use crate::csp::{BinaryConstraint, Problem};
use itertools::Itertools;
use log::{debug, trace};
use std::{collections::HashMap, fmt::Debug, hash::Hash, ops::ControlFlow};

/// A complete assignment of values to variables.
pub type Assignment<K, D> = HashMap<K, D>;

impl<K, D, C> Problem<K, D, C>
where
    K: Clone + Eq + Hash + Debug,
    D: Clone + Eq,
    C: BinaryConstraint<K, D>,
{
    /// Enumerate every satisfying assignment.
    ///
    /// Isolated variables are left out of the search and combined with its
    /// solutions afterwards. The order of the solutions is unspecified.
    pub fn solve_all(&self) -> Vec<Assignment<K, D>> {
        let mut solutions = vec![];
        let mut search = Search::new(self);
        search.run(&mut |search: &Search<'_, K, D, C>| {
            solutions.push(search.assignment());
            ControlFlow::Continue(())
        });
        debug!(
            "{} partial solutions, {} nodes visited",
            solutions.len(),
            search.num_nodes
        );
        for var in self.isolated() {
            let variable = &self.variables[var];
            solutions = solutions
                .into_iter()
                .cartesian_product(variable.domain().iter())
                .map(|(mut solution, value)| {
                    solution.insert(variable.id().clone(), value.clone());
                    solution
                })
                .collect();
        }
        solutions
    }

    /// The first satisfying assignment found, if any.
    pub fn solve_one(&self) -> Option<Assignment<K, D>> {
        let mut solution = None;
        let mut search = Search::new(self);
        search.run(&mut |search: &Search<'_, K, D, C>| {
            solution = Some(search.assignment());
            ControlFlow::Break(())
        });
        debug!(
            "solution found: {}, {} nodes visited",
            solution.is_some(),
            search.num_nodes
        );
        let mut solution = solution?;
        for var in self.isolated() {
            let variable = &self.variables[var];
            solution.insert(variable.id().clone(), variable.domain().first()?.clone());
        }
        Some(solution)
    }
}

/// Depth-first search state: one optional domain position per variable.
struct Search<'p, K, D, C> {
    problem: &'p Problem<K, D, C>,
    values: Vec<Option<usize>>,
    skip: Vec<bool>,
    num_nodes: usize,
}

impl<'p, K, D, C> Search<'p, K, D, C>
where
    K: Clone + Eq + Hash + Debug,
    D: Clone + Eq,
    C: BinaryConstraint<K, D>,
{
    fn new(problem: &'p Problem<K, D, C>) -> Self {
        let mut skip = vec![false; problem.variables.len()];
        for var in problem.isolated() {
            skip[var] = true;
        }
        Self {
            problem,
            values: vec![None; problem.variables.len()],
            skip,
            num_nodes: 0,
        }
    }

    fn value(&self, var: usize) -> Option<&'p D> {
        let problem = self.problem;
        self.values[var].map(|i| &problem.variables[var].domain()[i])
    }

    /// Check `value` for `var` against every constraint whose other side is
    /// already bound.
    fn consistent(&self, var: usize, value: &D) -> bool {
        for &c in &self.problem.subject_to[var] {
            let (constraint, lhs, rhs) = &self.problem.constraints[c];
            let ok = if *lhs == var && *rhs == var {
                constraint.satisfied(value, value)
            } else if *lhs == var {
                self.value(*rhs)
                    .map_or(true, |other| constraint.satisfied(value, other))
            } else {
                self.value(*lhs)
                    .map_or(true, |other| constraint.satisfied(other, value))
            };
            if !ok {
                return false;
            }
        }
        self.problem.member_of[var].iter().all(|&g| {
            self.problem.groups[g]
                .iter()
                .all(|&m| m == var || self.value(m) != Some(value))
        })
    }

    /// The unassigned variable with the fewest consistent values, together
    /// with those values. `None` once every variable is assigned.
    fn select(&self) -> Option<(usize, Vec<usize>)> {
        let mut best: Option<(usize, Vec<usize>)> = None;
        for var in (0..self.values.len()).filter(|&v| self.values[v].is_none() && !self.skip[v]) {
            let candidates: Vec<usize> = self.problem.variables[var]
                .domain()
                .iter()
                .enumerate()
                .filter(|(_, value)| self.consistent(var, value))
                .map(|(i, _)| i)
                .collect();
            if candidates.is_empty() {
                return Some((var, candidates));
            }
            if best.as_ref().map_or(true, |(_, b)| candidates.len() < b.len()) {
                best = Some((var, candidates));
            }
        }
        best
    }

    fn run(&mut self, visit: &mut dyn FnMut(&Search<'p, K, D, C>) -> ControlFlow<()>) {
        if let ControlFlow::Break(()) = self.descend(visit) {
            trace!("search stopped after {} nodes", self.num_nodes);
        }
    }

    fn descend(
        &mut self,
        visit: &mut dyn FnMut(&Search<'p, K, D, C>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        self.num_nodes += 1;
        let (var, candidates) = match self.select() {
            Some(selected) => selected,
            None => return visit(self),
        };
        if candidates.is_empty() {
            trace!("dead end at {:?}", self.problem.variables[var].id());
        }
        for i in candidates {
            self.values[var] = Some(i);
            if let ControlFlow::Break(()) = self.descend(visit) {
                self.values[var] = None;
                return ControlFlow::Break(());
            }
        }
        self.values[var] = None;
        ControlFlow::Continue(())
    }

    fn assignment(&self) -> Assignment<K, D> {
        self.problem
            .variables
            .iter()
            .enumerate()
            .filter_map(|(var, v)| self.value(var).map(|d| (v.id().clone(), d.clone())))
            .collect()
    }
}
