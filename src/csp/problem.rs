use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// A constraint between the values of two variables.
pub trait BinaryConstraint<K, D> {
    fn lhs(&self) -> &K;

    fn rhs(&self) -> &K;

    fn satisfied(&self, lhs: &D, rhs: &D) -> bool;
}

/// A variable with a finite domain of candidate values.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable<K, D> {
    id: K,
    domain: Vec<D>,
}

impl<K, D> Variable<K, D> {
    pub fn new(id: K, domain: impl IntoIterator<Item = D>) -> Self {
        Self {
            id,
            domain: domain.into_iter().collect(),
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn domain(&self) -> &[D] {
        &self.domain
    }
}

/// The values of a group of variables must be pairwise distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct AllDistinct<K> {
    variables: Vec<K>,
}

impl<K> AllDistinct<K> {
    pub fn new(variables: impl IntoIterator<Item = K>) -> Self {
        Self {
            variables: variables.into_iter().collect(),
        }
    }

    pub fn variables(&self) -> &[K] {
        &self.variables
    }
}

/// A constraint satisfaction problem.
///
/// Constraints are resolved to variable positions when they are added;
/// referring to a variable that was not declared is a programming error and
/// panics.
pub struct Problem<K, D, C> {
    pub(super) variables: Vec<Variable<K, D>>,
    index: HashMap<K, usize>,
    pub(super) constraints: Vec<(C, usize, usize)>,
    pub(super) subject_to: Vec<Vec<usize>>,
    pub(super) groups: Vec<Vec<usize>>,
    pub(super) member_of: Vec<Vec<usize>>,
}

impl<K, D, C> Problem<K, D, C>
where
    K: Clone + Eq + Hash + Debug,
    D: Clone + Eq,
    C: BinaryConstraint<K, D>,
{
    pub fn new(variables: impl IntoIterator<Item = Variable<K, D>>) -> Self {
        let variables: Vec<_> = variables.into_iter().collect();
        let mut index = HashMap::with_capacity(variables.len());
        for (i, var) in variables.iter().enumerate() {
            if index.insert(var.id.clone(), i).is_some() {
                panic!("variable {:?} is declared twice", var.id);
            }
        }
        let num_vars = variables.len();
        Self {
            variables,
            index,
            constraints: vec![],
            subject_to: vec![vec![]; num_vars],
            groups: vec![],
            member_of: vec![vec![]; num_vars],
        }
    }

    pub fn add_constraint(&mut self, constraint: C) {
        let (lhs, rhs) = (self.position(constraint.lhs()), self.position(constraint.rhs()));
        let c = self.constraints.len();
        self.subject_to[lhs].push(c);
        if rhs != lhs {
            self.subject_to[rhs].push(c);
        }
        self.constraints.push((constraint, lhs, rhs));
    }

    pub fn add_all_distinct(&mut self, group: AllDistinct<K>) {
        let g = self.groups.len();
        let members: Vec<usize> = group.variables.iter().map(|v| self.position(v)).collect();
        for &m in &members {
            self.member_of[m].push(g);
        }
        self.groups.push(members);
    }

    pub fn variables(&self) -> &[Variable<K, D>] {
        &self.variables
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_all_distinct(&self) -> usize {
        self.groups.len()
    }

    /// Positions of the variables that take part in no constraint and no
    /// all-distinct group.
    pub(super) fn isolated(&self) -> Vec<usize> {
        (0..self.variables.len())
            .filter(|&v| self.subject_to[v].is_empty() && self.member_of[v].is_empty())
            .collect()
    }

    fn position(&self, id: &K) -> usize {
        match self.index.get(id) {
            Some(&i) => i,
            None => panic!("constraint refers to undeclared variable {:?}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Differ(&'static str, &'static str);

    impl BinaryConstraint<&'static str, u8> for Differ {
        fn lhs(&self) -> &&'static str {
            &self.0
        }

        fn rhs(&self) -> &&'static str {
            &self.1
        }

        fn satisfied(&self, lhs: &u8, rhs: &u8) -> bool {
            lhs != rhs
        }
    }

    fn create_problem() -> Problem<&'static str, u8, Differ> {
        Problem::new(vec![
            Variable::new("x", 0..2),
            Variable::new("y", 0..2),
            Variable::new("z", 0..3),
        ])
    }

    #[test]
    fn test_indices() {
        let mut p = create_problem();
        p.add_constraint(Differ("x", "y"));
        p.add_constraint(Differ("y", "z"));
        p.add_all_distinct(AllDistinct::new(vec!["x", "z"]));
        assert_eq!(p.num_constraints(), 2);
        assert_eq!(p.num_all_distinct(), 1);
        assert_eq!(p.subject_to, vec![vec![0], vec![0, 1], vec![1]]);
        assert_eq!(p.member_of, vec![vec![0], vec![], vec![0]]);
        assert_eq!(p.variables()[2].domain(), &[0, 1, 2]);
        assert!(p.isolated().is_empty());
    }

    #[test]
    fn test_isolated() {
        let mut p = create_problem();
        assert_eq!(p.isolated(), vec![0, 1, 2]);
        p.add_constraint(Differ("x", "y"));
        assert_eq!(p.isolated(), vec![2]);
        p.add_all_distinct(AllDistinct::new(vec!["z"]));
        assert!(p.isolated().is_empty());
    }

    #[test]
    #[should_panic(expected = "undeclared variable")]
    fn test_undeclared_variable() {
        create_problem().add_constraint(Differ("x", "w"));
    }

    #[test]
    #[should_panic(expected = "undeclared variable")]
    fn test_undeclared_all_distinct() {
        create_problem().add_all_distinct(AllDistinct::new(vec!["x", "w"]));
    }
}
