// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::domain::layer::{LayerDraft, LayerId, LayerPatch};
use crate::editor::{Key, Modifiers, Tool};
use kurbo::{Point, Vec2};
use std::fmt;

/// Whether an update is a live preview or a finished edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Applied immediately without a history snapshot.
    Transient,
    /// Applied and snapshotted.
    #[default]
    Commit,
}

/// Actions accepted by [`State::update`](crate::editor::State::update).
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    AddLayer(LayerDraft),
    UpdateLayer {
        id: LayerId,
        patch: LayerPatch,
        mode: UpdateMode,
    },
    /// Snapshot pending transient updates, if any.
    CommitTransient,
    DeleteLayers(Vec<LayerId>),
    SelectLayers(Vec<LayerId>),
    ToggleSelect(LayerId),
    ClearSelection,
    SelectAll,
    GroupLayers(Vec<LayerId>),
    Ungroup(LayerId),
    Duplicate(Vec<LayerId>),
    /// Move the selection by a canvas offset.
    Nudge(Vec2),
    BringToFront(Vec<LayerId>),
    SendToBack(Vec<LayerId>),
    Undo,
    Redo,
    SetZoom(f64),
    ZoomIn,
    ZoomOut,
    /// Zoom to `zoom` keeping the canvas point under `position` (screen space) fixed.
    ZoomAt {
        position: Point,
        zoom: f64,
    },
    SetPan(Vec2),
    SetTool(Tool),
    /// Pointer pressed at a screen position.
    PointerDown {
        position: Point,
        shift: bool,
    },
    PointerMoved {
        position: Point,
    },
    PointerUp {
        position: Point,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
}

/// Outcome of a message, for the host and for tests.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A layer was created and selected.
    LayerAdded(LayerId),
    /// A group was created around the given layers.
    GroupCreated(LayerId),
    /// Copies were created; ids of the new top-level layers.
    LayersDuplicated(Vec<LayerId>),
    /// A history snapshot was recorded.
    Committed,
    /// Undo or redo moved the history cursor to this index.
    HistoryMoved(usize),
    /// The message was absorbed without effect.
    Ignored(Refusal),
}

/// Why a message was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    UnknownLayer(LayerId),
    NotAGroup(LayerId),
    /// Grouping needs at least two distinct layers.
    TooFewLayers,
    /// The layer is an ancestor of another requested layer.
    WouldCycle(LayerId),
    /// Patches cannot change grouping structure.
    HierarchyChange(LayerId),
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::UnknownLayer(id) => write!(f, "unknown layer {}", id),
            Refusal::NotAGroup(id) => write!(f, "layer {} is not a group", id),
            Refusal::TooFewLayers => write!(f, "grouping needs at least two layers"),
            Refusal::WouldCycle(id) => write!(f, "layer {} would become its own ancestor", id),
            Refusal::HierarchyChange(id) => {
                write!(f, "patch would change the hierarchy of layer {}", id)
            }
        }
    }
}

impl Event {
    /// Logs the refusal and wraps it.
    pub(crate) fn ignored(refusal: Refusal) -> Self {
        tracing::warn!(reason = %refusal, "ignored editor message");
        Event::Ignored(refusal)
    }
}
