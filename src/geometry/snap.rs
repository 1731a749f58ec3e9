// SPDX-License-Identifier: MPL-2.0
//! Alignment guides and snapping.
//!
//! While a layer is dragged, each of its three anchors per axis (start edge,
//! centre, end edge) is compared with the same three anchors of every other
//! candidate layer. A pair within the tolerance yields a [`Guide`]. The
//! tolerance is in canvas units and independent of zoom. Resizing only snaps
//! the edges the handle moves.

use super::HandlePosition;
use crate::domain::editing::SnapTolerance;
use crate::domain::layer::{Layer, LayerId};
use kurbo::{Rect, Vec2};
use std::cmp::Ordering;

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A vertical line at a fixed `x`.
    Vertical,
    /// A horizontal line at a fixed `y`.
    Horizontal,
}

/// Which part of a rectangle an alignment refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Anchor {
    Start,
    Center,
    End,
}

impl Anchor {
    const ALL: [Anchor; 3] = [Anchor::Start, Anchor::Center, Anchor::End];

    fn position(self, rect: Rect, axis: Axis) -> f64 {
        match (axis, self) {
            (Axis::Vertical, Anchor::Start) => rect.x0,
            (Axis::Vertical, Anchor::Center) => (rect.x0 + rect.x1) / 2.0,
            (Axis::Vertical, Anchor::End) => rect.x1,
            (Axis::Horizontal, Anchor::Start) => rect.y0,
            (Axis::Horizontal, Anchor::Center) => (rect.y0 + rect.y1) / 2.0,
            (Axis::Horizontal, Anchor::End) => rect.y1,
        }
    }
}

/// A candidate alignment between the moving rectangle and another layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub axis: Axis,
    /// Canvas coordinate of the guide line (`x` for vertical, `y` for horizontal).
    pub position: f64,
    /// Signed correction that moves the moving anchor onto the line.
    pub offset: f64,
    pub moving_anchor: Anchor,
    pub target_anchor: Anchor,
    pub target: LayerId,
    /// Index of the target in the layer sequence; lower wins exact ties.
    pub target_index: usize,
    pub target_bounds: Rect,
}

impl Guide {
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.offset.abs()
    }
}

/// Result of snapping a moving rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snap {
    /// Correction to add to the proposed position.
    pub offset: Vec2,
    pub vertical: Option<Guide>,
    pub horizontal: Option<Guide>,
}

impl Snap {
    #[must_use]
    pub fn guides(&self) -> Vec<Guide> {
        self.vertical
            .iter()
            .chain(self.horizontal.iter())
            .cloned()
            .collect()
    }
}

/// Every guide within `tolerance`, best first.
///
/// Ordering: smallest distance, then lowest target index, then anchor order
/// (start, centre, end) of the moving and target rectangles. Hidden layers and
/// ids in `exclude` are never targets.
#[must_use]
pub fn alignment_candidates(
    moving: Rect,
    layers: &[Layer],
    exclude: &[LayerId],
    tolerance: SnapTolerance,
) -> Vec<Guide> {
    let tolerance = tolerance.value();
    let mut guides = Vec::new();

    for (target_index, layer) in layers.iter().enumerate() {
        if layer.hidden || exclude.contains(&layer.id) {
            continue;
        }
        let target_bounds = layer.bounds();

        for axis in [Axis::Vertical, Axis::Horizontal] {
            for moving_anchor in Anchor::ALL {
                let from = moving_anchor.position(moving, axis);
                for target_anchor in Anchor::ALL {
                    let to = target_anchor.position(target_bounds, axis);
                    let offset = to - from;
                    if offset.abs() <= tolerance {
                        guides.push(Guide {
                            axis,
                            position: to,
                            offset,
                            moving_anchor,
                            target_anchor,
                            target: layer.id,
                            target_index,
                            target_bounds,
                        });
                    }
                }
            }
        }
    }

    guides.sort_by(compare_guides);
    guides
}

fn compare_guides(a: &Guide, b: &Guide) -> Ordering {
    a.distance()
        .total_cmp(&b.distance())
        .then_with(|| a.target_index.cmp(&b.target_index))
        .then_with(|| a.moving_anchor.cmp(&b.moving_anchor))
        .then_with(|| a.target_anchor.cmp(&b.target_anchor))
}

/// Best guide per axis and the correction that aligns to them.
#[must_use]
pub fn snap(moving: Rect, layers: &[Layer], exclude: &[LayerId], tolerance: SnapTolerance) -> Snap {
    let candidates = alignment_candidates(moving, layers, exclude, tolerance);

    let vertical = candidates
        .iter()
        .find(|guide| guide.axis == Axis::Vertical)
        .cloned();
    let horizontal = candidates
        .iter()
        .find(|guide| guide.axis == Axis::Horizontal)
        .cloned();

    Snap {
        offset: Vec2::new(
            vertical.as_ref().map_or(0.0, |guide| guide.offset),
            horizontal.as_ref().map_or(0.0, |guide| guide.offset),
        ),
        vertical,
        horizontal,
    }
}

/// Snaps the edges moved by a resize `handle` onto the best guide per axis.
///
/// Edges the handle does not move stay put. A snap that would leave the rect
/// narrower or shorter than `min_size` is skipped.
#[must_use]
pub fn snap_resize(
    rect: Rect,
    handle: HandlePosition,
    layers: &[Layer],
    exclude: &[LayerId],
    tolerance: SnapTolerance,
    min_size: f64,
) -> (Rect, Vec<Guide>) {
    let candidates = alignment_candidates(rect, layers, exclude, tolerance);
    let mut snapped = rect;
    let mut guides = Vec::new();

    for axis in [Axis::Vertical, Axis::Horizontal] {
        let Some(edge) = moved_edge(handle, axis) else {
            continue;
        };
        let Some(guide) = candidates
            .iter()
            .find(|guide| guide.axis == axis && guide.moving_anchor == edge)
        else {
            continue;
        };
        let candidate = match (axis, edge) {
            (Axis::Vertical, Anchor::Start) => Rect {
                x0: guide.position,
                ..snapped
            },
            (Axis::Vertical, _) => Rect {
                x1: guide.position,
                ..snapped
            },
            (Axis::Horizontal, Anchor::Start) => Rect {
                y0: guide.position,
                ..snapped
            },
            (Axis::Horizontal, _) => Rect {
                y1: guide.position,
                ..snapped
            },
        };
        if candidate.width() >= min_size && candidate.height() >= min_size {
            snapped = candidate;
            guides.push(guide.clone());
        }
    }

    (snapped, guides)
}

fn moved_edge(handle: HandlePosition, axis: Axis) -> Option<Anchor> {
    use HandlePosition::{Bottom, BottomLeft, BottomRight, Left, Right, Top, TopLeft, TopRight};
    match (axis, handle) {
        (Axis::Vertical, TopLeft | Left | BottomLeft) => Some(Anchor::Start),
        (Axis::Vertical, TopRight | Right | BottomRight) => Some(Anchor::End),
        (Axis::Horizontal, TopLeft | Top | TopRight) => Some(Anchor::Start),
        (Axis::Horizontal, BottomLeft | Bottom | BottomRight) => Some(Anchor::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layer::LayerDraft;

    fn shape(x: f64, y: f64, w: f64, h: f64) -> Layer {
        LayerDraft::shape(x, y, w, h).into_layer(LayerId::new(), 0)
    }

    #[test]
    fn no_guides_outside_tolerance() {
        let layers = vec![shape(0.0, 0.0, 10.0, 10.0)];
        let moving = Rect::new(100.0, 100.0, 110.0, 110.0);
        assert!(alignment_candidates(moving, &layers, &[], SnapTolerance::new(5.0)).is_empty());
    }

    #[test]
    fn left_edge_snaps_to_left_edge() {
        let target = shape(100.0, 0.0, 50.0, 50.0);
        let layers = vec![target.clone()];
        // Moving rect is 3 units right of the target's left edge and far below.
        let moving = Rect::new(103.0, 500.0, 133.0, 520.0);

        let result = snap(moving, &layers, &[], SnapTolerance::new(5.0));
        let guide = result.vertical.expect("vertical guide");
        assert_eq!(guide.position, 100.0);
        assert_eq!(guide.target, target.id);
        assert_eq!(guide.moving_anchor, Anchor::Start);
        assert_eq!(result.offset, Vec2::new(-3.0, 0.0));
        assert!(result.horizontal.is_none());
    }

    #[test]
    fn centre_alignment_is_detected() {
        let layers = vec![shape(0.0, 0.0, 100.0, 100.0)];
        // Centre y of moving rect is 52; target centre y is 50.
        let moving = Rect::new(300.0, 42.0, 320.0, 62.0);
        let result = snap(moving, &layers, &[], SnapTolerance::new(3.0));
        let guide = result.horizontal.expect("horizontal guide");
        assert_eq!(guide.moving_anchor, Anchor::Center);
        assert_eq!(guide.target_anchor, Anchor::Center);
        assert_eq!(result.offset.y, -2.0);
    }

    #[test]
    fn smallest_distance_wins() {
        let far = shape(104.0, 0.0, 10.0, 10.0);
        let near = shape(101.0, 300.0, 10.0, 10.0);
        let layers = vec![far, near.clone()];
        let moving = Rect::new(100.0, 600.0, 200.0, 605.0);

        let result = snap(moving, &layers, &[], SnapTolerance::new(5.0));
        let guide = result.vertical.expect("vertical guide");
        assert_eq!(guide.target, near.id);
        assert_eq!(guide.offset, 1.0);
    }

    #[test]
    fn exact_ties_prefer_lower_layer_index() {
        let first = shape(50.0, 0.0, 10.0, 10.0);
        let second = shape(50.0, 200.0, 10.0, 10.0);
        let layers = vec![first.clone(), second];
        let moving = Rect::new(52.0, 500.0, 62.0, 510.0);

        let candidates = alignment_candidates(moving, &layers, &[], SnapTolerance::new(5.0));
        assert_eq!(candidates[0].target, first.id);
        assert_eq!(candidates[0].target_index, 0);

        let repeat = alignment_candidates(moving, &layers, &[], SnapTolerance::new(5.0));
        assert_eq!(candidates, repeat);
    }

    #[test]
    fn excluded_and_hidden_layers_are_ignored() {
        let excluded = shape(0.0, 0.0, 10.0, 10.0);
        let mut hidden = shape(0.0, 0.0, 10.0, 10.0);
        hidden.hidden = true;
        let layers = vec![excluded.clone(), hidden];
        let moving = Rect::new(1.0, 1.0, 11.0, 11.0);

        let candidates =
            alignment_candidates(moving, &layers, &[excluded.id], SnapTolerance::new(5.0));
        assert!(candidates.is_empty());
    }

    #[test]
    fn zero_tolerance_only_matches_exact_alignment() {
        let layers = vec![shape(10.0, 10.0, 10.0, 10.0)];
        let exact = Rect::new(10.0, 100.0, 30.0, 120.0);
        let off = Rect::new(10.5, 100.0, 30.5, 120.0);
        assert!(!alignment_candidates(exact, &layers, &[], SnapTolerance::new(0.0)).is_empty());
        assert!(alignment_candidates(off, &layers, &[], SnapTolerance::new(0.0)).is_empty());
    }

    #[test]
    fn resize_snaps_only_the_moved_edge() {
        let layers = vec![shape(200.0, 0.0, 50.0, 50.0)];
        // Right edge at 197 is 3 short of the target's left edge; the left
        // edge at 0 is not moved by the handle.
        let rect = Rect::new(0.0, 300.0, 197.0, 400.0);

        let (snapped, guides) = snap_resize(
            rect,
            HandlePosition::Right,
            &layers,
            &[],
            SnapTolerance::new(5.0),
            1.0,
        );

        assert_eq!(snapped, Rect::new(0.0, 300.0, 200.0, 400.0));
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].moving_anchor, Anchor::End);
    }

    #[test]
    fn resize_snap_respects_minimum_size() {
        let layers = vec![shape(8.0, 0.0, 50.0, 50.0)];
        let rect = Rect::new(10.0, 300.0, 12.0, 320.0);

        let (snapped, guides) = snap_resize(
            rect,
            HandlePosition::Right,
            &layers,
            &[],
            SnapTolerance::new(5.0),
            4.0,
        );

        assert_eq!(snapped, rect);
        assert!(guides.is_empty());
    }
}
