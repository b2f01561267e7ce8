//! Toggle-only selection membership.

use indexmap::IndexSet;

/// Identifiers currently selected, in the order they were selected.
///
/// Independent of the tag collection: clearing tags leaves selection intact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: IndexSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `identifier` and returns the new membership.
    pub fn toggle(&mut self, identifier: &str) -> bool {
        if self.selected.shift_remove(identifier) {
            false
        } else {
            self.selected.insert(identifier.to_owned());
            true
        }
    }

    pub fn is_selected(&self, identifier: &str) -> bool {
        self.selected.contains(identifier)
    }

    /// Selected identifiers in selection order.
    pub fn selected(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.selected.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
