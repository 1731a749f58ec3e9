// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the canvas data model and its value objects.
//!
//! This module contains pure domain types and business rules. It carries no
//! editor state and performs no I/O.
//!
//! # Modules
//!
//! - [`editing`]: Editor setting value objects ([`HistoryLimit`](editing::HistoryLimit),
//!   [`SnapTolerance`](editing::SnapTolerance), [`ZoomStep`](editing::ZoomStep),
//!   [`FpsWindow`](editing::FpsWindow))
//! - [`layer`]: The layer model ([`Layer`](layer::Layer), [`LayerContent`](layer::LayerContent),
//!   [`LayerDraft`](layer::LayerDraft), [`LayerPatch`](layer::LayerPatch))

pub mod editing;
pub mod layer;
