// SPDX-License-Identifier: MPL-2.0
//! Tool modes and the pointer interaction each one drives.

use crate::domain::layer::LayerKind;

/// The active canvas tool. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Select,
    Text,
    Image,
    Video,
    Shape,
    Hand,
}

/// What a pointer drag does under a given tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Pick layers; drag moves the selection or resizes through a handle.
    Transform,
    /// Drag out a rectangle that becomes a new layer of this kind.
    Create(LayerKind),
    /// Drag pans the viewport.
    Pan,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Select,
        Tool::Text,
        Tool::Image,
        Tool::Video,
        Tool::Shape,
        Tool::Hand,
    ];

    #[must_use]
    pub fn interaction(self) -> Interaction {
        match self {
            Tool::Select => Interaction::Transform,
            Tool::Text => Interaction::Create(LayerKind::Text),
            Tool::Image => Interaction::Create(LayerKind::Image),
            Tool::Video => Interaction::Create(LayerKind::Video),
            Tool::Shape => Interaction::Create(LayerKind::Shape),
            Tool::Hand => Interaction::Pan,
        }
    }

    /// Kind of layer this tool places, if it is a creation tool.
    #[must_use]
    pub fn creates(self) -> Option<LayerKind> {
        match self.interaction() {
            Interaction::Create(kind) => Some(kind),
            _ => None,
        }
    }
}
