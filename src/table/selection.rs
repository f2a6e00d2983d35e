use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The set of transaction ids currently marked for bulk action.
///
/// Scoped to the currently visible page: the owning session clears it on
/// every filter or page change, so a selection never silently spans two
/// differing result sets. Bulk deletion itself is an external
/// collaborator's job; the UI hands it [`SelectionSet::ids`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<Uuid>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it if present. Toggling twice is a
    /// no-op.
    pub fn toggle(&mut self, id: Uuid) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// The select-all checkbox: when the selection is already exactly the
    /// page's id set the result is empty, otherwise the selection becomes
    /// exactly the page's id set. A partial selection counts as "not all
    /// selected" and is overwritten, not unioned.
    pub fn toggle_all_on_page(&mut self, page_ids: &[Uuid]) {
        let page_set: HashSet<Uuid> = page_ids.iter().copied().collect();
        if self.ids == page_set {
            self.ids.clear();
        } else {
            self.ids = page_set;
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops ids that no longer exist in the ledger, e.g. after an
    /// external deletion. Stale ids disappear silently; they are never an
    /// error.
    pub fn reconcile(&mut self, current_valid_ids: &[Uuid]) {
        let valid: HashSet<Uuid> = current_valid_ids.iter().copied().collect();
        self.ids.retain(|id| valid.contains(id));
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The selected ids, for handing to the bulk-delete collaborator.
    pub fn ids(&self) -> Vec<Uuid> {
        self.ids.iter().copied().collect()
    }
}
