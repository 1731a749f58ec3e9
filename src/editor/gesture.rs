// SPDX-License-Identifier: MPL-2.0
//! In-flight pointer gestures.
//!
//! A gesture starts on pointer down and ends on pointer up. Everything it does
//! in between is transient: the layers are edited live but no snapshot is
//! taken until release.

use crate::domain::layer::{LayerId, LayerKind};
use crate::geometry::{Guide, HandlePosition};
use kurbo::{Point, Rect, Vec2};

/// Pointer interaction currently in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Dragging the selection.
    Move {
        /// Pointer position at press, in canvas space.
        origin: Point,
        /// Position of every moved layer at press.
        starts: Vec<(LayerId, Point)>,
        /// Union of the moved layers' bounds at press.
        start_bounds: Rect,
        /// Layers that may not act as snap targets.
        exclude: Vec<LayerId>,
        /// Alignment guides matched by the last move.
        guides: Vec<Guide>,
    },
    /// Dragging a resize handle of a single layer.
    Resize {
        id: LayerId,
        handle: HandlePosition,
        origin: Point,
        start: Rect,
        /// The resized layer and its ancestors.
        exclude: Vec<LayerId>,
        guides: Vec<Guide>,
    },
    /// Dragging out the rectangle of a new layer.
    Create {
        kind: LayerKind,
        origin: Point,
        current: Point,
    },
    /// Panning the viewport. Positions are in screen space.
    Pan { origin: Point, start_pan: Vec2 },
}

impl Gesture {
    /// Rectangle a creation gesture would place, normalised.
    #[must_use]
    pub fn preview_rect(&self) -> Option<Rect> {
        match self {
            Gesture::Create {
                origin, current, ..
            } => Some(Rect::from_points(*origin, *current)),
            _ => None,
        }
    }

    /// Guides to display for this gesture.
    #[must_use]
    pub fn guides(&self) -> &[Guide] {
        match self {
            Gesture::Move { guides, .. } | Gesture::Resize { guides, .. } => guides,
            _ => &[],
        }
    }

    /// Whether the gesture edits layers (and so needs a rollback on cancel).
    #[must_use]
    pub fn edits_layers(&self) -> bool {
        matches!(self, Gesture::Move { .. } | Gesture::Resize { .. })
    }
}
