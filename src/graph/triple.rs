use crate::types::Name;
use std::fmt;

/// The uniform representation of graph elements.
///
/// A node is a triple whose label equals both its source and its target, an
/// edge is a triple whose label differs from both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    source: Name,
    label: Name,
    target: Name,
}

impl Triple {
    pub fn new(source: impl Into<Name>, label: impl Into<Name>, target: impl Into<Name>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            target: target.into(),
        }
    }

    pub fn node(label: impl Into<Name>) -> Self {
        let label = label.into();
        Self {
            source: label.clone(),
            label: label.clone(),
            target: label,
        }
    }

    pub fn source(&self) -> &Name {
        &self.source
    }

    pub fn label(&self) -> &Name {
        &self.label
    }

    pub fn target(&self) -> &Name {
        &self.target
    }

    pub fn is_node(&self) -> bool {
        self.label == self.source && self.label == self.target
    }

    pub fn is_edge(&self) -> bool {
        self.label != self.source && self.label != self.target
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_node() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}: {} -> {}", self.label, self.source, self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_and_edge() {
        let a = Triple::node("a");
        assert!(a.is_node());
        assert!(!a.is_edge());
        assert_eq!(a, Triple::new("a", "a", "a"));

        let loop_edge = Triple::new("a", "1", "a");
        assert!(loop_edge.is_edge());
        assert!(!loop_edge.is_node());

        let half = Triple::new("a", "a", "b");
        assert!(!half.is_node());
        assert!(!half.is_edge());
    }

    #[test]
    fn test_display() {
        assert_eq!(Triple::node("a").to_string(), "a");
        assert_eq!(Triple::new("a", "1", "b").to_string(), "1: a -> b");
    }
}
