// SPDX-License-Identifier: MPL-2.0
//! Pure geometry over layer collections.
//!
//! Nothing here holds state: every function derives its result from layer
//! geometry and viewport parameters passed in by the caller.
//!
//! - [`bounds`]: bounding-box union
//! - [`coords`]: screen ↔ canvas mapping
//! - [`hit`]: point containment, hit testing, resize handles
//! - [`snap`]: alignment-guide detection and snapping

pub mod bounds;
pub mod coords;
pub mod hit;
pub mod snap;

pub use bounds::union_bounds;
pub use coords::{rect_to_canvas, rect_to_screen, to_canvas, to_screen};
pub use hit::{contains_point, handle_at, hit_test, resize_rect, HandlePosition};
pub use snap::{alignment_candidates, snap, snap_resize, Anchor, Axis, Guide, Snap};
