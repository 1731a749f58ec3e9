// SPDX-License-Identifier: MPL-2.0
//! Undo/redo over the snapshot history.

use crate::editor::{Event, State};

impl State {
    /// Restores the previous snapshot. No-op at the oldest snapshot.
    pub(crate) fn undo(&mut self) -> Event {
        match self.history.undo() {
            Some(layers) => self.layers = layers.to_vec(),
            None => return Event::None,
        }
        self.gesture = None;
        self.prune_selection();
        tracing::debug!(index = self.history.index(), "undo");
        Event::HistoryMoved(self.history.index())
    }

    /// Restores the next snapshot. No-op at the newest snapshot.
    pub(crate) fn redo(&mut self) -> Event {
        match self.history.redo() {
            Some(layers) => self.layers = layers.to_vec(),
            None => return Event::None,
        }
        self.gesture = None;
        self.prune_selection();
        tracing::debug!(index = self.history.index(), "redo");
        Event::HistoryMoved(self.history.index())
    }

    /// Drops uncommitted edits by reloading the snapshot under the cursor.
    pub(crate) fn restore_current_snapshot(&mut self) {
        if self.has_pending_changes() {
            self.layers = self.history.current_layers().to_vec();
            self.prune_selection();
            tracing::trace!("discarded uncommitted changes");
        }
    }
}
