// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//! Geometry tests mostly compare whole rectangles, hence [`assert_rect_eq`].

pub use approx::{assert_abs_diff_eq, assert_relative_eq};
use kurbo::Rect;

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

/// Asserts every edge of `actual` is within [`F64_EPSILON`] of `expected`.
#[track_caller]
pub fn assert_rect_eq(actual: Rect, expected: Rect) {
    for (edge, a, e) in [
        ("x0", actual.x0, expected.x0),
        ("y0", actual.y0, expected.y0),
        ("x1", actual.x1, expected.x1),
        ("y1", actual.y1, expected.y1),
    ] {
        assert!(
            (a - e).abs() <= F64_EPSILON,
            "{edge}: {a} != {e} (actual {actual:?}, expected {expected:?})"
        );
    }
}
