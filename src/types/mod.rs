//! Various types related to graph matching.

use derive_more::{Display, From};

/// An identifier drawn from the single global naming space shared by nodes,
/// edges, graphs and morphisms.
#[derive(Debug, Display, From, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name of an element of a pullback object, built from its two
    /// components.
    ///
    /// Separators inside the components are escaped with a backslash, so distinct
    /// pairs always get distinct names.
    pub fn pair(first: &Name, second: &Name) -> Self {
        Self(format!("({},{})", first.escaped(), second.escaped()))
    }

    fn escaped(&self) -> String {
        let mut escaped = String::with_capacity(self.0.len());
        for c in self.0.chars() {
            if matches!(c, '\\' | ',' | '(' | ')') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self(String::from(name))
    }
}

impl From<&Name> for Name {
    fn from(name: &Name) -> Self {
        name.clone()
    }
}
