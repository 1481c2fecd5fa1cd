//! Dense indexing of grammar symbol names.
//!
//! Nonterminals and terminals each get their own [`Names`] table; a
//! [`Symbol`](super::Symbol) then refers to a name by its position.

use indexmap::IndexSet;

/// Names in first-seen order, each mapped to its position.
#[derive(Default, Debug, Clone)]
pub struct Names {
    set: IndexSet<String>,
}

impl Names {
    /// Returns the index of `name` and whether it was newly added.
    pub fn intern(&mut self, name: &str) -> (usize, bool) {
        match self.set.get_index_of(name) {
            Some(i) => (i, false),
            None => self.set.insert_full(name.to_owned()),
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.set.get_index_of(name)
    }

    pub fn name(&self, i: usize) -> Option<&str> {
        self.set.get_index(i).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.set.iter().map(String::as_str)
    }
}
