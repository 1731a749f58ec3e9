// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editor settings,
//! ensuring they are always within valid ranges.

use crate::config::defaults;

// =============================================================================
// History Limit Bounds
// =============================================================================

/// History limit bounds (1 to 500 snapshots).
pub mod history_bounds {
    use super::defaults;

    /// Minimum number of snapshots.
    pub const MIN: usize = defaults::MIN_HISTORY_LIMIT;
    /// Maximum number of snapshots.
    pub const MAX: usize = defaults::MAX_HISTORY_LIMIT;
    /// Default number of snapshots.
    pub const DEFAULT: usize = defaults::DEFAULT_HISTORY_LIMIT;
}

// =============================================================================
// HistoryLimit
// =============================================================================

/// Maximum number of snapshots retained by the undo history.
///
/// The limit counts the active snapshot too, so a limit of 1 disables undo
/// entirely while still tracking the current state.
///
/// # Example
///
/// ```
/// use productify_canvas::domain::editing::HistoryLimit;
///
/// assert_eq!(HistoryLimit::new(0).value(), 1);
/// assert_eq!(HistoryLimit::new(10_000).value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryLimit(usize);

impl HistoryLimit {
    /// Creates a new history limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_bounds::MIN, history_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= history_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= history_bounds::MAX
    }
}

impl Default for HistoryLimit {
    fn default() -> Self {
        Self(history_bounds::DEFAULT)
    }
}

// =============================================================================
// Snap Tolerance Bounds
// =============================================================================

/// Snap tolerance bounds (0 to 64 canvas units).
pub mod snap_bounds {
    use super::defaults;

    /// Minimum tolerance.
    pub const MIN: f64 = defaults::MIN_SNAP_TOLERANCE;
    /// Maximum tolerance.
    pub const MAX: f64 = defaults::MAX_SNAP_TOLERANCE;
    /// Default tolerance.
    pub const DEFAULT: f64 = defaults::DEFAULT_SNAP_TOLERANCE;
}

// =============================================================================
// SnapTolerance
// =============================================================================

/// Distance, in canvas units, within which a moving edge or centre snaps to
/// another layer's edge or centre.
///
/// Measured in canvas space so the snapping feel does not change with zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTolerance(f64);

impl SnapTolerance {
    /// Creates a new tolerance, clamping to the valid range. NaN maps to the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(snap_bounds::MIN, snap_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SnapTolerance {
    fn default() -> Self {
        Self(snap_bounds::DEFAULT)
    }
}

// =============================================================================
// ZoomStep
// =============================================================================

/// Multiplicative zoom step, guaranteed to be within 1.01–4.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f64);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(defaults::MIN_ZOOM_STEP, defaults::MAX_ZOOM_STEP))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(defaults::DEFAULT_ZOOM_STEP)
    }
}

// =============================================================================
// FpsWindow
// =============================================================================

/// Number of frame timestamps sampled by the FPS meter (2–600).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpsWindow(usize);

impl FpsWindow {
    /// Creates a new sampling window, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(defaults::MIN_FPS_WINDOW, defaults::MAX_FPS_WINDOW))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for FpsWindow {
    fn default() -> Self {
        Self(defaults::DEFAULT_FPS_WINDOW)
    }
}

// =============================================================================
// ZoomRange
// =============================================================================

/// Configured zoom bounds, always within the hard limits (0.01–64) with
/// `min <= max`.
///
/// # Example
///
/// ```
/// use productify_canvas::domain::editing::ZoomRange;
///
/// let range = ZoomRange::new(0.25, 4.0);
/// assert_eq!(range.clamp(0.1), 0.25);
/// assert_eq!(range.clamp(8.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    min: f64,
    max: f64,
}

impl ZoomRange {
    /// Creates a zoom range. Swapped bounds are reordered; non-finite or
    /// non-positive bounds fall back to the defaults.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let sanitize = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value.clamp(defaults::HARD_MIN_ZOOM, defaults::HARD_MAX_ZOOM)
            } else {
                fallback
            }
        };
        let min = sanitize(min, defaults::DEFAULT_MIN_ZOOM);
        let max = sanitize(max, defaults::DEFAULT_MAX_ZOOM);
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into the range. NaN maps to the nearest bound to 1.0.
    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            return defaults::DEFAULT_ZOOM.clamp(self.min, self.max);
        }
        zoom.clamp(self.min, self.max)
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self {
            min: defaults::DEFAULT_MIN_ZOOM,
            max: defaults::DEFAULT_MAX_ZOOM,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
