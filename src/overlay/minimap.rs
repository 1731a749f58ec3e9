// SPDX-License-Identifier: MPL-2.0
//! Minimap: a scaled-down view of the whole canvas and the visible window.

use crate::domain::layer::{Layer, LayerId};
use crate::editor::Viewport;
use crate::geometry::union_bounds;
use kurbo::{Point, Rect, Size, Vec2};

/// Minimap geometry, in minimap-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MiniMap {
    /// Minimap pixels per canvas unit.
    scale: f64,
    /// Canvas area shown by the minimap.
    content: Rect,
    /// Offset centring the content inside the minimap box.
    offset: Vec2,
    zoom: f64,
    screen_size: Size,
    layers: Vec<(LayerId, Rect)>,
    viewport: Rect,
}

impl MiniMap {
    /// Fits the visible layers and the on-screen canvas area into `minimap_size`.
    #[must_use]
    pub fn compute(
        layers: &[Layer],
        viewport: &Viewport,
        screen_size: Size,
        minimap_size: Size,
    ) -> Self {
        let visible_area = viewport.visible_canvas(screen_size);
        let content = union_bounds(layers.iter().filter(|layer| !layer.hidden && !layer.is_group()))
            .map_or(visible_area, |bounds| bounds.union(visible_area));

        let fit = |available: f64, extent: f64| {
            if extent > 0.0 {
                available / extent
            } else {
                f64::INFINITY
            }
        };
        let mut scale = fit(minimap_size.width, content.width()).min(fit(minimap_size.height, content.height()));
        if !scale.is_finite() || scale <= 0.0 {
            scale = 1.0;
        }
        let offset = Vec2::new(
            (minimap_size.width - content.width() * scale) / 2.0,
            (minimap_size.height - content.height() * scale) / 2.0,
        );

        let mut minimap = Self {
            scale,
            content,
            offset,
            zoom: viewport.zoom(),
            screen_size,
            layers: Vec::new(),
            viewport: Rect::ZERO,
        };
        minimap.layers = layers
            .iter()
            .filter(|layer| !layer.hidden && !layer.is_group())
            .map(|layer| (layer.id, minimap.map_rect(layer.bounds())))
            .collect();
        minimap.viewport = minimap.map_rect(visible_area);
        minimap
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Leaf layer rectangles in minimap coordinates.
    #[must_use]
    pub fn layers(&self) -> &[(LayerId, Rect)] {
        &self.layers
    }

    /// The visible window in minimap coordinates.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        self.viewport
    }

    /// Maps a canvas point into the minimap.
    #[must_use]
    pub fn map_point(&self, point: Point) -> Point {
        ((point - self.content.origin()) * self.scale).to_point() + self.offset
    }

    #[must_use]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.map_point(Point::new(rect.x0, rect.y0)),
            self.map_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Canvas point under a minimap position.
    #[must_use]
    pub fn canvas_point(&self, minimap_point: Point) -> Point {
        self.content.origin() + (minimap_point - self.offset).to_vec2() / self.scale
    }

    /// Pan that centres the screen on the canvas point under `minimap_point`.
    #[must_use]
    pub fn pan_for_minimap_point(&self, minimap_point: Point) -> Vec2 {
        let target = self.canvas_point(minimap_point);
        let center = self.screen_size.to_vec2() / 2.0;
        center - target.to_vec2() * self.zoom
    }
}
