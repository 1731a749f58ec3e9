// SPDX-License-Identifier: MPL-2.0
//! Viewport state: zoom factor and pan offset.

use crate::config::defaults;
use crate::domain::editing::{ZoomRange, ZoomStep};
use crate::geometry::{self, to_canvas, to_screen};
use kurbo::{Point, Rect, Size, Vec2};

/// Zoom and pan applied to the canvas. Zoom is always inside `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: Vec2,
    range: ZoomRange,
}

impl Viewport {
    #[must_use]
    pub fn new(range: ZoomRange) -> Self {
        Self {
            zoom: range.clamp(defaults::DEFAULT_ZOOM),
            pan: Vec2::ZERO,
            range,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    #[must_use]
    pub fn range(&self) -> ZoomRange {
        self.range
    }

    /// Sets the zoom, clamped to the range. Returns the applied value.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.zoom = self.range.clamp(zoom);
        self.zoom
    }

    /// Sets the pan offset. Non-finite components are ignored.
    pub fn set_pan(&mut self, pan: Vec2) {
        if pan.is_finite() {
            self.pan = pan;
        }
    }

    pub fn zoom_in(&mut self, step: ZoomStep) -> f64 {
        self.set_zoom(self.zoom * step.value())
    }

    pub fn zoom_out(&mut self, step: ZoomStep) -> f64 {
        self.set_zoom(self.zoom / step.value())
    }

    /// Zooms while keeping the canvas point under `anchor` (screen space) fixed.
    pub fn zoom_at(&mut self, anchor: Point, zoom: f64) -> f64 {
        let fixed = self.to_canvas(anchor);
        let applied = self.set_zoom(zoom);
        self.pan = anchor.to_vec2() - fixed.to_vec2() * applied;
        applied
    }

    #[must_use]
    pub fn to_screen(&self, point: Point) -> Point {
        to_screen(point, self.zoom, self.pan)
    }

    #[must_use]
    pub fn to_canvas(&self, point: Point) -> Point {
        to_canvas(point, self.zoom, self.pan)
    }

    #[must_use]
    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        geometry::rect_to_screen(rect, self.zoom, self.pan)
    }

    /// Canvas area visible in a screen of `screen_size`.
    #[must_use]
    pub fn visible_canvas(&self, screen_size: Size) -> Rect {
        geometry::rect_to_canvas(screen_size.to_rect(), self.zoom, self.pan)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomRange::default())
    }
}
