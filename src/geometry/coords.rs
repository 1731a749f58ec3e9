// SPDX-License-Identifier: MPL-2.0
//! Screen ↔ canvas coordinate mapping.
//!
//! `screen = canvas * zoom + pan`. Callers always map from canonical canvas
//! coordinates; never derive a new screen position from a previous one.
//! `zoom` must be positive, which [`Viewport`](crate::editor::Viewport) guarantees.

use kurbo::{Point, Rect, Vec2};

/// Maps a canvas point to screen space.
#[must_use]
pub fn to_screen(point: Point, zoom: f64, pan: Vec2) -> Point {
    Point::new(point.x * zoom + pan.x, point.y * zoom + pan.y)
}

/// Maps a screen point back to canvas space.
#[must_use]
pub fn to_canvas(point: Point, zoom: f64, pan: Vec2) -> Point {
    Point::new((point.x - pan.x) / zoom, (point.y - pan.y) / zoom)
}

/// Maps a canvas rectangle to screen space.
#[must_use]
pub fn rect_to_screen(rect: Rect, zoom: f64, pan: Vec2) -> Rect {
    Rect::from_points(
        to_screen(Point::new(rect.x0, rect.y0), zoom, pan),
        to_screen(Point::new(rect.x1, rect.y1), zoom, pan),
    )
}

/// Maps a screen rectangle (e.g. the visible window) to canvas space.
#[must_use]
pub fn rect_to_canvas(rect: Rect, zoom: f64, pan: Vec2) -> Rect {
    Rect::from_points(
        to_canvas(Point::new(rect.x0, rect.y0), zoom, pan),
        to_canvas(Point::new(rect.x1, rect.y1), zoom, pan),
    )
}
