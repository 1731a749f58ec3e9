// SPDX-License-Identifier: MPL-2.0
//! Read-only overlays derived from the editor state.
//!
//! Overlays never write back to the state; the host recomputes them on each
//! render pass.

mod fps;
mod guides;
mod minimap;

pub use fps::FpsMeter;
pub use guides::{GuideLine, GuideOverlay};
pub use minimap::MiniMap;
