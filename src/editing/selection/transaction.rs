//! Scoped change bracket around selection edits
//!
//! Edits are staged on a copy of the selection and only swapped into the
//! layer on [`SelectionTransaction::commit`]. The layer's change bracket
//! is closed when the transaction is dropped, committed or not, so an
//! early return through `?` leaves the selection exactly as it was.

use super::state::Selection;
use crate::core::state::outline::{ElementId, GlyphLayer};

/// What a committed operation changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SelectionDelta {
    pub added: usize,
    pub removed: usize,
}

impl SelectionDelta {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

pub struct SelectionTransaction<'a> {
    layer: &'a mut GlyphLayer,
    staged: Selection,
    delta: SelectionDelta,
}

impl<'a> SelectionTransaction<'a> {
    pub fn begin(layer: &'a mut GlyphLayer) -> Self {
        layer.begin_changes();
        let staged = layer.selection().clone();
        Self {
            layer,
            staged,
            delta: SelectionDelta::default(),
        }
    }

    /// Read access to the layer being edited
    pub fn layer(&self) -> &GlyphLayer {
        self.layer
    }

    /// The selection as it will be after commit
    pub fn staged(&self) -> &Selection {
        &self.staged
    }

    pub fn select(&mut self, element: ElementId) {
        if self.staged.insert(element) {
            self.delta.added += 1;
        }
    }

    pub fn deselect(&mut self, element: ElementId) {
        if self.staged.remove(&element) {
            self.delta.removed += 1;
        }
    }

    /// Deselect everything `keep` rejects
    pub fn retain(&mut self, keep: impl FnMut(&ElementId) -> bool) {
        let before = self.staged.len();
        self.staged.retain(keep);
        self.delta.removed += before - self.staged.len();
    }

    /// Publish the staged selection
    pub fn commit(mut self) -> SelectionDelta {
        let staged = std::mem::take(&mut self.staged);
        self.layer.replace_selection(staged);
        tracing::debug!(
            "Committed selection change: +{} -{}",
            self.delta.added,
            self.delta.removed
        );
        self.delta
    }
}

impl Drop for SelectionTransaction<'_> {
    fn drop(&mut self) {
        self.layer.end_changes();
    }
}
