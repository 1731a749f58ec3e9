// SPDX-License-Identifier: MPL-2.0
//! Type-specific layer payloads.

use super::LayerId;
use serde::{Deserialize, Serialize};

/// Discriminant of a layer's content, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Text,
    Image,
    Video,
    Shape,
    Container,
}

/// Geometric primitive drawn by a shape layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
    Triangle,
    Line,
}

/// Content carried by a layer.
///
/// Image and video layers only store the asset reference; bytes are never
/// fetched or validated here. A container holds the ordered ids of its
/// children, which is the only place hierarchy is recorded besides each
/// child's `group_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerContent {
    Text {
        text: String,
    },
    Image {
        src: String,
    },
    Video {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poster: Option<String>,
    },
    Shape {
        #[serde(default)]
        shape: ShapeKind,
    },
    Container {
        #[serde(default)]
        children: Vec<LayerId>,
    },
}

impl LayerContent {
    /// Placeholder payload for a freshly placed layer of the given kind.
    #[must_use]
    pub fn placeholder(kind: LayerKind) -> Self {
        match kind {
            LayerKind::Text => LayerContent::Text {
                text: String::from("Text"),
            },
            LayerKind::Image => LayerContent::Image { src: String::new() },
            LayerKind::Video => LayerContent::Video {
                src: String::new(),
                poster: None,
            },
            LayerKind::Shape => LayerContent::Shape {
                shape: ShapeKind::default(),
            },
            LayerKind::Container => LayerContent::Container {
                children: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> LayerKind {
        match self {
            LayerContent::Text { .. } => LayerKind::Text,
            LayerContent::Image { .. } => LayerKind::Image,
            LayerContent::Video { .. } => LayerKind::Video,
            LayerContent::Shape { .. } => LayerKind::Shape,
            LayerContent::Container { .. } => LayerKind::Container,
        }
    }

    /// Asset URL for image and video layers.
    #[must_use]
    pub fn asset_src(&self) -> Option<&str> {
        match self {
            LayerContent::Image { src } | LayerContent::Video { src, .. } => Some(src),
            _ => None,
        }
    }
}
