// SPDX-License-Identifier: MPL-2.0
//! Snapshot history (undo/redo).
//!
//! The history always holds at least one snapshot: the state the session
//! started from. `index` points at the snapshot matching the committed
//! layers. Recording a new snapshot discards everything after the cursor;
//! once the configured limit is reached the oldest snapshot is dropped.

use crate::buffer::CircularBuffer;
use crate::domain::editing::HistoryLimit;
use crate::domain::layer::Layer;
use chrono::{DateTime, Utc};

/// Full copy of the layer collection at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub layers: Vec<Layer>,
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    fn new(layers: Vec<Layer>) -> Self {
        Self {
            layers,
            timestamp: Utc::now(),
        }
    }
}

/// Bounded linear undo stack.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: CircularBuffer<Snapshot>,
    index: usize,
}

impl History {
    /// Creates a history whose only snapshot is `initial`.
    #[must_use]
    pub fn new(initial: Vec<Layer>, limit: HistoryLimit) -> Self {
        let mut snapshots = CircularBuffer::new(limit.value());
        snapshots.push(Snapshot::new(initial));
        Self {
            snapshots,
            index: 0,
        }
    }

    /// Appends a snapshot after the cursor, discarding any redo entries.
    pub fn record(&mut self, layers: Vec<Layer>) {
        self.snapshots.truncate(self.index + 1);
        if self.snapshots.push(Snapshot::new(layers)).is_some() {
            tracing::trace!(limit = self.snapshots.capacity(), "dropped oldest snapshot");
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Moves the cursor back and returns the layers to restore.
    pub fn undo(&mut self) -> Option<&[Layer]> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current_layers())
    }

    /// Moves the cursor forward and returns the layers to restore.
    pub fn redo(&mut self) -> Option<&[Layer]> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current_layers())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.index)
    }

    /// Layers of the snapshot under the cursor.
    #[must_use]
    pub fn current_layers(&self) -> &[Layer] {
        self.current().map_or(&[][..], |snapshot| snapshot.layers.as_slice())
    }

    /// Cursor position; always `< len()`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.snapshots.capacity()
    }

    /// Snapshots oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}
