// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides value objects for editor settings:
//! - [`HistoryLimit`]: Number of undo snapshots retained
//! - [`SnapTolerance`]: Alignment snap distance in canvas units
//! - [`ZoomStep`]: Multiplicative zoom in/out step
//! - [`ZoomRange`]: Configured zoom bounds
//! - [`FpsWindow`]: FPS meter sampling window

pub mod newtypes;

pub use newtypes::{FpsWindow, HistoryLimit, SnapTolerance, ZoomRange, ZoomStep};
