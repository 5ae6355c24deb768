/*!
Axis-aligned bounding rectangles for the hayro rendering pipeline.

This crate provides the rectangle arithmetic used for clipping, layout and
bounds tracking: [`Rect`] with `f32` bounds and [`IntRect`] with `i32` bounds.
Both are plain `Copy` values with `left`, `top`, `right` and `bottom` fields,
and both treat a rectangle with `left >= right` or `top >= bottom` as empty.

The operations are cheap enough to run per primitive:
- `join` unions a box into a rectangle, ignoring empty boxes and replacing an
  empty receiver instead of unioning with it.
- [`Rect::intersect`] and friends clip against another box and report
  [`RectError::EmptyIntersection`] if the overlap has no area.
- [`Rect::set_bounds`] computes the bounding box of a point slice two points
  at a time on a 4-wide lane, and reports [`RectError::NonFiniteInput`] if any
  coordinate is NaN or infinite.

Points are `[f32; 2]` pairs.

## Cargo features
- `kurbo` (default): conversions between [`Rect`] and `kurbo::Rect`.
*/

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bounds;
mod error;
mod int_rect;
pub mod lane;
mod rect;

pub use error::*;
pub use int_rect::*;
pub use rect::*;
