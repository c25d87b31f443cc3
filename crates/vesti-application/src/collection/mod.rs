//! Collection view models and their shared local state types.

use std::collections::BTreeSet;

pub mod outfits;
pub mod wardrobe;

pub use outfits::OutfitCollection;
pub use wardrobe::WardrobeCollection;

/// Which loading indicator a collection is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    /// Full-screen spinner for the first load.
    Initial,
    /// Pull-to-refresh indicator.
    Refresh,
}

impl LoadPhase {
    pub fn is_loading(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Multi-select state for a collection screen.
///
/// Pure set semantics: toggling a not-yet-selected id adds it, toggling a
/// selected id removes it, exiting clears everything unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    active: bool,
    ids: BTreeSet<String>,
}

impl Selection {
    /// Enters selection mode with the long-pressed id as the seed.
    pub fn enter(&mut self, seed: &str) {
        self.active = true;
        self.ids.insert(seed.to_string());
    }

    /// Flips membership of `id` in the selection set.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Leaves selection mode, clearing the set.
    pub fn exit(&mut self) {
        self.active = false;
        self.ids.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns the selected ids as an owned list for a batch call.
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_parity() {
        let mut selection = Selection::default();
        selection.enter("a");
        selection.toggle("b");
        selection.toggle("c");
        selection.toggle("b");
        assert!(selection.is_selected("a"));
        assert!(!selection.is_selected("b"));
        assert!(selection.is_selected("c"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_exit_clears_unconditionally() {
        let mut selection = Selection::default();
        selection.enter("a");
        selection.toggle("b");
        selection.exit();
        assert!(!selection.is_active());
        assert!(selection.is_empty());

        // Exiting an already-idle selection is a no-op.
        selection.exit();
        assert!(!selection.is_active());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_last_id_leaves_mode_active() {
        let mut selection = Selection::default();
        selection.enter("a");
        selection.toggle("a");
        assert!(selection.is_active());
        assert!(selection.is_empty());
    }
}
