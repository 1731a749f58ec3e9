// SPDX-License-Identifier: MPL-2.0
//! Bounding-box helpers.

use crate::domain::layer::Layer;
use kurbo::Rect;

/// Minimal rectangle enclosing every given layer, or `None` for an empty set.
///
/// Origin is `(min x, min y)`; size is `(max(x + width) - min x,
/// max(y + height) - min y)`. Rotation is ignored.
pub fn union_bounds<'a, I>(layers: I) -> Option<Rect>
where
    I: IntoIterator<Item = &'a Layer>,
{
    layers.into_iter().map(Layer::bounds).reduce(|acc, rect| {
        Rect::new(
            acc.x0.min(rect.x0),
            acc.y0.min(rect.y0),
            acc.x1.max(rect.x1),
            acc.y1.max(rect.y1),
        )
    })
}
