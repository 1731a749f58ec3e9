// SPDX-License-Identifier: MPL-2.0
//! Hit testing and resize-handle geometry.

use crate::domain::layer::{Layer, LayerId};
use kurbo::{Affine, Point, Rect, Vec2};

/// Position of a resize handle on a layer's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlePosition {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl HandlePosition {
    pub const ALL: [HandlePosition; 8] = [
        HandlePosition::TopLeft,
        HandlePosition::Top,
        HandlePosition::TopRight,
        HandlePosition::Right,
        HandlePosition::BottomRight,
        HandlePosition::Bottom,
        HandlePosition::BottomLeft,
        HandlePosition::Left,
    ];

    /// Centre of this handle on `rect`.
    #[must_use]
    pub fn anchor(self, rect: Rect) -> Point {
        let center = rect.center();
        match self {
            HandlePosition::TopLeft => Point::new(rect.x0, rect.y0),
            HandlePosition::Top => Point::new(center.x, rect.y0),
            HandlePosition::TopRight => Point::new(rect.x1, rect.y0),
            HandlePosition::Right => Point::new(rect.x1, center.y),
            HandlePosition::BottomRight => Point::new(rect.x1, rect.y1),
            HandlePosition::Bottom => Point::new(center.x, rect.y1),
            HandlePosition::BottomLeft => Point::new(rect.x0, rect.y1),
            HandlePosition::Left => Point::new(rect.x0, center.y),
        }
    }
}

/// Whether `point` (canvas space) lies inside the layer, honouring rotation.
/// Edges count as inside.
#[must_use]
pub fn contains_point(layer: &Layer, point: Point) -> bool {
    let bounds = layer.bounds();
    let local = if layer.rotation == 0.0 {
        point
    } else {
        Affine::rotate_about(-layer.rotation.to_radians(), bounds.center()) * point
    };
    local.x >= bounds.x0 && local.x <= bounds.x1 && local.y >= bounds.y0 && local.y <= bounds.y1
}

/// Topmost visible, unlocked leaf layer under `point`.
///
/// Paint order decides: highest `z_index` wins, and on equal `z_index` the
/// later layer in the sequence wins. Containers are never hit directly.
#[must_use]
pub fn hit_test(layers: &[Layer], point: Point) -> Option<LayerId> {
    layers
        .iter()
        .enumerate()
        .filter(|(_, layer)| !layer.hidden && !layer.locked && !layer.is_group())
        .filter(|(_, layer)| contains_point(layer, point))
        .max_by_key(|(index, layer)| (layer.z_index, *index))
        .map(|(_, layer)| layer.id)
}

/// Handle of `rect` within `radius` of `point`, if any. Corners win over edges.
#[must_use]
pub fn handle_at(rect: Rect, point: Point, radius: f64) -> Option<HandlePosition> {
    HandlePosition::ALL
        .into_iter()
        .map(|handle| (handle, handle.anchor(rect).distance(point)))
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|(a_handle, a), (b_handle, b)| {
            a.total_cmp(b)
                .then_with(|| is_edge(*a_handle).cmp(&is_edge(*b_handle)))
        })
        .map(|(handle, _)| handle)
}

fn is_edge(handle: HandlePosition) -> bool {
    matches!(
        handle,
        HandlePosition::Top | HandlePosition::Right | HandlePosition::Bottom | HandlePosition::Left
    )
}

/// Resizes `start` by dragging `handle` by `delta`, keeping the opposite side
/// fixed. Width and height never drop below `min_size`.
#[must_use]
pub fn resize_rect(start: Rect, handle: HandlePosition, delta: Vec2, min_size: f64) -> Rect {
    let Rect {
        mut x0,
        mut y0,
        mut x1,
        mut y1,
    } = start;

    let moves_left = matches!(
        handle,
        HandlePosition::TopLeft | HandlePosition::Left | HandlePosition::BottomLeft
    );
    let moves_right = matches!(
        handle,
        HandlePosition::TopRight | HandlePosition::Right | HandlePosition::BottomRight
    );
    let moves_top = matches!(
        handle,
        HandlePosition::TopLeft | HandlePosition::Top | HandlePosition::TopRight
    );
    let moves_bottom = matches!(
        handle,
        HandlePosition::BottomLeft | HandlePosition::Bottom | HandlePosition::BottomRight
    );

    if moves_left {
        x0 = (x0 + delta.x).min(x1 - min_size);
    }
    if moves_right {
        x1 = (x1 + delta.x).max(x0 + min_size);
    }
    if moves_top {
        y0 = (y0 + delta.y).min(y1 - min_size);
    }
    if moves_bottom {
        y1 = (y1 + delta.y).max(y0 + min_size);
    }

    Rect::new(x0, y0, x1, y1)
}
