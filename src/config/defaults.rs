// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the editor core. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds and step
//! - **History**: Undo/redo snapshot limits
//! - **Snapping**: Alignment guide tolerance
//! - **Layers**: Default size of layers placed with a single click
//! - **Overlay**: Resize handle hit radius and FPS sampling window

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default zoom factor when a session starts (1.0 = canvas pixels map 1:1).
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 0.25;

/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;

/// Smallest lower bound a configuration may request.
pub const HARD_MIN_ZOOM: f64 = 0.01;

/// Largest upper bound a configuration may request.
pub const HARD_MAX_ZOOM: f64 = 64.0;

/// Default multiplicative zoom step for zoom in/out (1.25 = +25%).
pub const DEFAULT_ZOOM_STEP: f64 = 1.25;

/// Minimum allowed zoom step factor.
pub const MIN_ZOOM_STEP: f64 = 1.01;

/// Maximum allowed zoom step factor.
pub const MAX_ZOOM_STEP: f64 = 4.0;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of snapshots kept for undo/redo.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Minimum number of snapshots (the current state itself).
pub const MIN_HISTORY_LIMIT: usize = 1;

/// Maximum number of snapshots.
pub const MAX_HISTORY_LIMIT: usize = 500;

// ==========================================================================
// Snapping Defaults
// ==========================================================================

/// Default alignment snap tolerance, in canvas units.
pub const DEFAULT_SNAP_TOLERANCE: f64 = 6.0;

/// Minimum snap tolerance (0 = only exact alignment produces a guide).
pub const MIN_SNAP_TOLERANCE: f64 = 0.0;

/// Maximum snap tolerance.
pub const MAX_SNAP_TOLERANCE: f64 = 64.0;

// ==========================================================================
// Layer Defaults
// ==========================================================================

/// Width of a layer created with a click (no drag).
pub const DEFAULT_LAYER_WIDTH: f64 = 200.0;

/// Height of a layer created with a click (no drag).
pub const DEFAULT_LAYER_HEIGHT: f64 = 120.0;

/// Offset applied to duplicated layers.
pub const DUPLICATE_OFFSET: f64 = 10.0;

/// Pointer travel (screen pixels) below which a creation drag counts as a click.
pub const CLICK_SLOP: f64 = 3.0;

/// Smallest width or height a resize drag can produce, in canvas units.
pub const MIN_LAYER_SIZE: f64 = 1.0;

/// Arrow-key nudge distance, in canvas units.
pub const NUDGE_STEP: f64 = 1.0;

/// Arrow-key nudge distance with Shift held.
pub const NUDGE_LARGE_STEP: f64 = 10.0;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Resize handle hit radius, in screen pixels.
pub const DEFAULT_HANDLE_RADIUS: f64 = 6.0;

/// Default number of frame timestamps sampled by the FPS meter.
pub const DEFAULT_FPS_WINDOW: usize = 60;

/// Minimum FPS sampling window.
pub const MIN_FPS_WINDOW: usize = 2;

/// Maximum FPS sampling window.
pub const MAX_FPS_WINDOW: usize = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(HARD_MIN_ZOOM > 0.0);
    assert!(DEFAULT_MIN_ZOOM >= HARD_MIN_ZOOM);
    assert!(DEFAULT_MIN_ZOOM < DEFAULT_ZOOM);
    assert!(DEFAULT_MAX_ZOOM > DEFAULT_ZOOM);
    assert!(DEFAULT_MAX_ZOOM <= HARD_MAX_ZOOM);
    assert!(MIN_ZOOM_STEP > 1.0);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);

    // History validation
    assert!(MIN_HISTORY_LIMIT > 0);
    assert!(DEFAULT_HISTORY_LIMIT >= MIN_HISTORY_LIMIT);
    assert!(DEFAULT_HISTORY_LIMIT <= MAX_HISTORY_LIMIT);

    // Snapping validation
    assert!(DEFAULT_SNAP_TOLERANCE >= MIN_SNAP_TOLERANCE);
    assert!(DEFAULT_SNAP_TOLERANCE <= MAX_SNAP_TOLERANCE);

    // Layer validation
    assert!(DEFAULT_LAYER_WIDTH > 0.0);
    assert!(DEFAULT_LAYER_HEIGHT > 0.0);
    assert!(MIN_LAYER_SIZE > 0.0);
    assert!(NUDGE_LARGE_STEP > NUDGE_STEP);

    // Overlay validation
    assert!(DEFAULT_HANDLE_RADIUS > 0.0);
    assert!(MIN_FPS_WINDOW >= 2);
    assert!(DEFAULT_FPS_WINDOW >= MIN_FPS_WINDOW);
    assert!(DEFAULT_FPS_WINDOW <= MAX_FPS_WINDOW);
};
