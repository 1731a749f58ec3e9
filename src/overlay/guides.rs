// SPDX-License-Identifier: MPL-2.0
//! Alignment guide lines for the move gesture in flight.

use crate::editor::State;
use crate::geometry::{Axis, Guide};
use kurbo::{Line, Point, Size};

/// A guide ready to draw, in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLine {
    pub axis: Axis,
    pub line: Line,
}

/// Screen-space guide lines derived from the editor state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuideOverlay {
    lines: Vec<GuideLine>,
}

impl GuideOverlay {
    /// Maps the active guides to lines spanning the screen.
    #[must_use]
    pub fn from_state(state: &State, screen_size: Size) -> Self {
        let viewport = state.viewport();
        let lines = state
            .active_guides()
            .iter()
            .filter_map(|guide| {
                let anchor = viewport.to_screen(guide_point(guide));
                let line = match guide.axis {
                    Axis::Vertical => Line::new((anchor.x, 0.0), (anchor.x, screen_size.height)),
                    Axis::Horizontal => Line::new((0.0, anchor.y), (screen_size.width, anchor.y)),
                };
                let on_screen = match guide.axis {
                    Axis::Vertical => (0.0..=screen_size.width).contains(&anchor.x),
                    Axis::Horizontal => (0.0..=screen_size.height).contains(&anchor.y),
                };
                on_screen.then_some(GuideLine {
                    axis: guide.axis,
                    line,
                })
            })
            .collect();
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[GuideLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn guide_point(guide: &Guide) -> Point {
    match guide.axis {
        Axis::Vertical => Point::new(guide.position, 0.0),
        Axis::Horizontal => Point::new(0.0, guide.position),
    }
}
