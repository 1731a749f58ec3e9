// SPDX-License-Identifier: MPL-2.0
//! `productify_canvas` is the editing core of a layer-based design canvas.
//!
//! It owns the layer model, the editor state store with bounded undo/redo,
//! the geometry used for hit testing, snapping and coordinate mapping, the
//! tool-driven pointer gestures, and the read-only overlays (minimap, FPS
//! meter, alignment guides). Rendering and asset loading belong to the host.

#![doc(html_root_url = "https://docs.rs/productify_canvas/0.1.0")]

pub mod buffer;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod persistence;

#[cfg(test)]
pub(crate) mod test_utils;
