// SPDX-License-Identifier: MPL-2.0
//! Layer model: a single positioned visual element or group on the canvas.
//!
//! Geometry is expressed in canvas space. A layer is created from a
//! [`LayerDraft`], edited through [`LayerPatch`]es, and its hierarchy
//! (`group_id` / container children) is only ever changed by the editor's
//! grouping operations.

mod content;
mod id;
mod style;

pub use content::{LayerContent, LayerKind, ShapeKind};
pub use id::LayerId;
pub use style::{Style, TextAlign};

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

// =============================================================================
// Opacity
// =============================================================================

/// Layer opacity, guaranteed to be within 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Opacity(f32);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(1.0);

    /// Creates a new opacity, clamping to 0.0–1.0. NaN maps to opaque.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::OPAQUE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl From<f32> for Opacity {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Opacity> for f32 {
    fn from(value: Opacity) -> Self {
        value.0
    }
}

// =============================================================================
// BlurRadius
// =============================================================================

/// Maximum blur radius in canvas pixels.
pub const MAX_BLUR_RADIUS: f32 = 100.0;

/// Gaussian blur radius in canvas pixels (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct BlurRadius(f32);

impl BlurRadius {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(0.0, MAX_BLUR_RADIUS))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for BlurRadius {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<BlurRadius> for f32 {
    fn from(value: BlurRadius) -> Self {
        value.0
    }
}

// =============================================================================
// Layer
// =============================================================================

/// A visual element placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: LayerId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees, clockwise, around the layer centre.
    #[serde(default)]
    pub rotation: f64,
    /// Authoritative paint order; higher paints later.
    #[serde(default)]
    pub z_index: i32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub opacity: Opacity,
    #[serde(default)]
    pub blur: BlurRadius,
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    /// Parent group, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<LayerId>,
    pub content: LayerContent,
}

impl Layer {
    /// Axis-aligned bounds, ignoring rotation.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    #[must_use]
    pub fn kind(&self) -> LayerKind {
        self.content.kind()
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self.content, LayerContent::Container { .. })
    }

    /// Child ids of a group layer; empty for every other kind.
    #[must_use]
    pub fn children(&self) -> &[LayerId] {
        match &self.content {
            LayerContent::Container { children } => children,
            _ => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<LayerId>> {
        match &mut self.content {
            LayerContent::Container { children } => Some(children),
            _ => None,
        }
    }

    pub(crate) fn set_bounds(&mut self, rect: Rect) {
        self.x = rect.x0;
        self.y = rect.y0;
        self.width = rect.width();
        self.height = rect.height();
    }
}

// =============================================================================
// LayerDraft
// =============================================================================

/// Everything needed to create a layer except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDraft {
    pub content: LayerContent,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    /// Explicit paint order; `None` places the layer above everything else.
    pub z_index: Option<i32>,
    pub locked: bool,
    pub hidden: bool,
    pub opacity: Opacity,
    pub blur: BlurRadius,
    pub style: Style,
}

impl LayerDraft {
    /// Draft occupying `rect`; a rect with negative extent is normalised.
    #[must_use]
    pub fn new(content: LayerContent, rect: Rect) -> Self {
        let rect = rect.abs();
        Self {
            content,
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            rotation: 0.0,
            z_index: None,
            locked: false,
            hidden: false,
            opacity: Opacity::default(),
            blur: BlurRadius::default(),
            style: Style::default(),
        }
    }

    #[must_use]
    pub fn shape(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            LayerContent::placeholder(LayerKind::Shape),
            Rect::new(x, y, x + width, y + height),
        )
    }

    #[must_use]
    pub fn text(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            LayerContent::Text { text: text.into() },
            Rect::new(x, y, x + width, y + height),
        )
    }

    #[must_use]
    pub fn image(src: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            LayerContent::Image { src: src.into() },
            Rect::new(x, y, x + width, y + height),
        )
    }

    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub(crate) fn into_layer(self, id: LayerId, z_index: i32) -> Layer {
        Layer {
            id,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            z_index,
            locked: self.locked,
            hidden: self.hidden,
            opacity: self.opacity,
            blur: self.blur,
            style: self.style,
            group_id: None,
            content: self.content,
        }
    }
}

// =============================================================================
// LayerPatch
// =============================================================================

/// Partial change to a layer. Unset fields are left untouched; the style is
/// merged additively.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub z_index: Option<i32>,
    pub locked: Option<bool>,
    pub hidden: Option<bool>,
    pub opacity: Option<Opacity>,
    pub blur: Option<BlurRadius>,
    pub style: Option<Style>,
    pub content: Option<LayerContent>,
}

impl LayerPatch {
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bounds(rect: Rect) -> Self {
        Self {
            x: Some(rect.x0),
            y: Some(rect.y0),
            width: Some(rect.width()),
            height: Some(rect.height()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn style(style: Style) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    /// Applies the patch, returning whether the layer changed.
    ///
    /// Hierarchy is never touched here; callers reject content patches that
    /// would turn a layer into or out of a container.
    pub(crate) fn apply(&self, layer: &mut Layer) -> bool {
        let before = layer.clone();

        if let Some(x) = self.x {
            layer.x = x;
        }
        if let Some(y) = self.y {
            layer.y = y;
        }
        if let Some(width) = self.width {
            layer.width = width.max(0.0);
        }
        if let Some(height) = self.height {
            layer.height = height.max(0.0);
        }
        if let Some(rotation) = self.rotation {
            layer.rotation = rotation;
        }
        if let Some(z_index) = self.z_index {
            layer.z_index = z_index;
        }
        if let Some(locked) = self.locked {
            layer.locked = locked;
        }
        if let Some(hidden) = self.hidden {
            layer.hidden = hidden;
        }
        if let Some(opacity) = self.opacity {
            layer.opacity = opacity;
        }
        if let Some(blur) = self.blur {
            layer.blur = blur;
        }
        if let Some(style) = &self.style {
            layer.style.merge(style);
        }
        if let Some(content) = &self.content {
            layer.content = content.clone();
        }

        *layer != before
    }
}
