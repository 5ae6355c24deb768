//! Floating point rectangles.

use crate::IntRect;
use crate::bounds::lane_bounds;
use crate::error::RectError;

/// An axis-aligned rectangle with `f32` bounds.
///
/// No ordering is enforced between opposite bounds. A rectangle is empty if
/// `left >= right` or `top >= bottom`, which covers both zero-area and
/// inverted rectangles. Any comparison against NaN is false, so a rectangle
/// with NaN bounds is not considered empty.
///
/// A NaN bound passed to [`Rect::join`] or the intersect methods is carried
/// into the result instead of being dropped, so non-finite input never turns
/// into a plausible finite rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Rect {
    /// The left edge.
    pub left: f32,
    /// The top edge.
    pub top: f32,
    /// The right edge.
    pub right: f32,
    /// The bottom edge.
    pub bottom: f32,
}

impl Rect {
    /// The all-zero rectangle.
    pub const ZERO: Self = Self::from_ltrb(0.0, 0.0, 0.0, 0.0);

    /// Create a new rectangle from its four bounds.
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create the bounding box of `points`.
    ///
    /// Fails if any coordinate is NaN or infinite. An empty slice yields
    /// [`Rect::ZERO`].
    pub fn from_points(points: &[[f32; 2]]) -> Result<Self, RectError> {
        let mut rect = Self::ZERO;
        rect.set_bounds(points)?;
        Ok(rect)
    }

    /// Overwrite all four bounds.
    pub fn set(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        *self = Self::from_ltrb(left, top, right, bottom);
    }

    /// Reset to the all-zero rectangle.
    pub fn set_empty(&mut self) {
        *self = Self::ZERO;
    }

    /// Whether the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// The horizontal extent. Negative for inverted rectangles.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// The vertical extent. Negative for inverted rectangles.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Grow this rectangle to also cover the given box.
    ///
    /// An empty box is ignored. If `self` is empty, it is replaced by the box
    /// instead of being unioned with it.
    pub fn join(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        if left >= right || top >= bottom {
            return;
        }

        if self.is_empty() {
            self.set(left, top, right, bottom);
        } else {
            self.left = min_scalar(self.left, left);
            self.top = min_scalar(self.top, top);
            self.right = max_scalar(self.right, right);
            self.bottom = max_scalar(self.bottom, bottom);
        }
    }

    /// Grow this rectangle to also cover `other`. See [`Rect::join`].
    pub fn join_rect(&mut self, other: &Self) {
        self.join(other.left, other.top, other.right, other.bottom);
    }

    /// Clip this rectangle to the given box.
    ///
    /// Boxes that only share an edge do not intersect. On failure `self` is
    /// left unchanged.
    pub fn intersect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Result<(), RectError> {
        let current = *self;
        self.set_intersection(&Self::from_ltrb(left, top, right, bottom), &current)
    }

    /// Clip this rectangle to `other`. See [`Rect::intersect`].
    pub fn intersect_rect(&mut self, other: &Self) -> Result<(), RectError> {
        self.intersect(other.left, other.top, other.right, other.bottom)
    }

    /// Store the intersection of `a` and `b` in `self`.
    ///
    /// On failure `self` is left unchanged.
    pub fn set_intersection(&mut self, a: &Self, b: &Self) -> Result<(), RectError> {
        match overlap(a, b) {
            Some(r) => {
                *self = r;
                Ok(())
            }
            None => {
                log::debug!("no overlap between {a:?} and {b:?}");
                Err(RectError::EmptyIntersection)
            }
        }
    }

    /// The intersection of `a` and `b`, if it has a positive area.
    pub fn intersection(a: &Self, b: &Self) -> Option<Self> {
        overlap(a, b)
    }

    /// Set this rectangle to the bounding box of `points`.
    ///
    /// If any coordinate is NaN or infinite, `self` becomes [`Rect::ZERO`]
    /// and an error is returned. An empty slice also yields [`Rect::ZERO`],
    /// but succeeds.
    pub fn set_bounds(&mut self, points: &[[f32; 2]]) -> Result<(), RectError> {
        match lane_bounds(points) {
            Some([left, top, right, bottom]) => {
                self.set(left, top, right, bottom);
                Ok(())
            }
            None => {
                log::debug!(
                    "non-finite coordinate among {} points, bounds reset",
                    points.len()
                );
                self.set_empty();
                Err(RectError::NonFiniteInput)
            }
        }
    }

    /// The four corners, clockwise starting at the top-left one.
    pub fn to_quad(&self) -> [[f32; 2]; 4] {
        [
            [self.left, self.top],
            [self.right, self.top],
            [self.right, self.bottom],
            [self.left, self.bottom],
        ]
    }

    /// Format the rectangle as a `Rect::from_ltrb` call.
    ///
    /// With `as_hex`, each bound is written as its exact bit pattern followed
    /// by its decimal value in a comment.
    pub fn dump_string(&self, as_hex: bool) -> String {
        if !as_hex {
            return format!("{self};");
        }

        let bounds = [self.left, self.top, self.right, self.bottom];
        let indent = " ".repeat("Rect::from_ltrb(".len());
        let mut out = String::from("Rect::from_ltrb(");

        for (i, v) in bounds.iter().enumerate() {
            if i > 0 {
                out.push_str(&indent);
            }

            let (sep, end) = if i == 3 { (" ", ");") } else { (",", "\n") };
            out.push_str(&format!(
                "f32::from_bits(0x{:08x}){sep} /* {v:?} */{end}",
                v.to_bits()
            ));
        }

        out
    }

    /// Log the rectangle at debug level. See [`Rect::dump_string`].
    pub fn dump(&self, as_hex: bool) {
        log::debug!("{}", self.dump_string(as_hex));
    }
}

/// Minimum of two bounds. NaN in either operand yields NaN.
#[inline]
fn min_scalar(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else if b <= a {
        b
    } else {
        f32::NAN
    }
}

/// Maximum of two bounds. NaN in either operand yields NaN.
#[inline]
fn max_scalar(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else if b >= a {
        b
    } else {
        f32::NAN
    }
}

fn overlap(a: &Rect, b: &Rect) -> Option<Rect> {
    let left = max_scalar(a.left, b.left);
    let top = max_scalar(a.top, b.top);
    let right = min_scalar(a.right, b.right);
    let bottom = min_scalar(a.bottom, b.bottom);

    if left >= right || top >= bottom {
        return None;
    }

    Some(Rect::from_ltrb(left, top, right, bottom))
}

impl core::fmt::Display for Rect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Rect::from_ltrb({:?}, {:?}, {:?}, {:?})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

impl From<IntRect> for Rect {
    fn from(r: IntRect) -> Self {
        Self::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Self {
        Self::from_ltrb(r.x0 as f32, r.y0 as f32, r.x1 as f32, r.y1 as f32)
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(
            f64::from(r.left),
            f64::from(r.top),
            f64::from(r.right),
            f64::from(r.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_ignores_empty_input() {
        let mut r = Rect::from_ltrb(1.0, 2.0, 3.0, 4.0);
        r.join(5.0, 5.0, 5.0, 9.0);
        assert_eq!(r, Rect::from_ltrb(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn join_replaces_zero_receiver() {
        let mut r = Rect::ZERO;
        r.join(10.0, 10.0, 20.0, 20.0);
        // A plain min/max union would have dragged the origin in.
        assert_eq!(r, Rect::from_ltrb(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn join_unions_non_empty() {
        let mut r = Rect::from_ltrb(0.0, 0.0, 1.0, 1.0);
        r.join_rect(&Rect::from_ltrb(0.5, -2.0, 4.0, 0.5));
        assert_eq!(r, Rect::from_ltrb(0.0, -2.0, 4.0, 1.0));
    }

    #[test]
    fn intersect_overlapping() {
        let mut r = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.intersect(5.0, 5.0, 15.0, 15.0), Ok(()));
        assert_eq!(r, Rect::from_ltrb(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn intersect_shared_edge_fails_and_keeps_receiver() {
        let mut r = Rect::from_ltrb(0.0, 0.0, 5.0, 5.0);
        let other = Rect::from_ltrb(5.0, 0.0, 10.0, 5.0);
        assert_eq!(r.intersect_rect(&other), Err(RectError::EmptyIntersection));
        assert_eq!(r, Rect::from_ltrb(0.0, 0.0, 5.0, 5.0));
    }

    #[test]
    fn set_intersection_leaves_output_on_failure() {
        let a = Rect::from_ltrb(0.0, 0.0, 1.0, 1.0);
        let b = Rect::from_ltrb(2.0, 2.0, 3.0, 3.0);
        let mut out = Rect::from_ltrb(7.0, 7.0, 8.0, 8.0);
        assert!(out.set_intersection(&a, &b).is_err());
        assert_eq!(out, Rect::from_ltrb(7.0, 7.0, 8.0, 8.0));

        let c = Rect::from_ltrb(0.5, -1.0, 2.0, 0.5);
        assert!(out.set_intersection(&a, &c).is_ok());
        assert_eq!(out, Rect::from_ltrb(0.5, 0.0, 1.0, 0.5));
        assert_eq!(Rect::intersection(&a, &c), Some(out));
    }

    #[test]
    fn set_bounds_failure_zeroes_rect() {
        let mut r = Rect::from_ltrb(1.0, 1.0, 2.0, 2.0);
        let res = r.set_bounds(&[[0.0, 0.0], [f32::NAN, 1.0]]);
        assert_eq!(res, Err(RectError::NonFiniteInput));
        assert_eq!(r, Rect::ZERO);
    }

    #[test]
    fn from_points_odd_count() {
        let r = Rect::from_points(&[[1.0, 1.0], [3.0, 5.0], [-2.0, 0.0]]);
        assert_eq!(r, Ok(Rect::from_ltrb(-2.0, 0.0, 3.0, 5.0)));
    }

    #[test]
    fn join_keeps_nan_bounds() {
        let mut r = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        r.join(f32::NAN, 0.0, 20.0, 20.0);
        assert!(r.left.is_nan(), "{r:?}");
        assert_eq!([r.top, r.right, r.bottom], [0.0, 20.0, 20.0]);

        let mut r = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        r.join(-5.0, -5.0, 5.0, f32::NAN);
        assert!(r.bottom.is_nan(), "{r:?}");
        assert_eq!([r.left, r.top, r.right], [-5.0, -5.0, 10.0]);
    }

    #[test]
    fn intersect_keeps_nan_bounds() {
        let mut r = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        assert!(r.intersect(f32::NAN, 0.0, 5.0, 5.0).is_ok());
        assert!(r.left.is_nan(), "{r:?}");
        assert_eq!([r.top, r.right, r.bottom], [0.0, 5.0, 5.0]);

        let a = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_ltrb(2.0, 2.0, f32::NAN, 8.0);
        let r = Rect::intersection(&a, &b).unwrap();
        assert!(r.right.is_nan(), "{r:?}");
        assert_eq!([r.left, r.top, r.bottom], [2.0, 2.0, 8.0]);
    }

    #[test]
    fn nan_aware_min_max() {
        assert_eq!(min_scalar(1.0, 2.0), 1.0);
        assert_eq!(max_scalar(1.0, 2.0), 2.0);
        assert!(min_scalar(f32::NAN, 2.0).is_nan());
        assert!(min_scalar(2.0, f32::NAN).is_nan());
        assert!(max_scalar(f32::NAN, 2.0).is_nan());
        assert!(max_scalar(2.0, f32::NAN).is_nan());
    }

    #[test]
    fn failed_intersect_is_logged_by_every_form() {
        test_logger::install();

        let mut r = Rect::from_ltrb(123.0, 0.0, 124.0, 1.0);
        assert!(r.intersect(200.0, 0.0, 201.0, 1.0).is_err());
        assert!(test_logger::contains("no overlap", "123.0"));

        let mut r = Rect::from_ltrb(321.0, 0.0, 322.0, 1.0);
        assert!(r.intersect_rect(&Rect::from_ltrb(400.0, 0.0, 401.0, 1.0)).is_err());
        assert!(test_logger::contains("no overlap", "321.0"));

        let mut out = Rect::ZERO;
        let a = Rect::from_ltrb(555.0, 0.0, 556.0, 1.0);
        assert!(out.set_intersection(&a, &Rect::ZERO).is_err());
        assert!(test_logger::contains("no overlap", "555.0"));
    }

    #[test]
    fn to_quad_is_clockwise_from_top_left() {
        let quad = Rect::from_ltrb(1.0, 2.0, 3.0, 4.0).to_quad();
        assert_eq!(quad, [[1.0, 2.0], [3.0, 2.0], [3.0, 4.0], [1.0, 4.0]]);
    }

    #[test]
    fn dump_decimal() {
        let r = Rect::from_ltrb(1.0, 2.5, -3.0, 4.0);
        assert_eq!(r.dump_string(false), "Rect::from_ltrb(1.0, 2.5, -3.0, 4.0);");
    }

    #[test]
    fn display_is_bare_constructor_call() {
        let r = Rect::from_ltrb(1.0, 2.5, -3.0, 4.0);
        assert_eq!(r.to_string(), "Rect::from_ltrb(1.0, 2.5, -3.0, 4.0)");
    }

    #[test]
    fn dump_hex() {
        let r = Rect::from_ltrb(1.0, 0.0, 2.0, -1.0);
        let expected = "\
Rect::from_ltrb(f32::from_bits(0x3f800000), /* 1.0 */
                f32::from_bits(0x00000000), /* 0.0 */
                f32::from_bits(0x40000000), /* 2.0 */
                f32::from_bits(0xbf800000)  /* -1.0 */);";
        assert_eq!(r.dump_string(true), expected);
    }

    #[test]
    fn from_int_rect() {
        let r: Rect = IntRect::from_ltrb(-1, 2, 3, 4).into();
        assert_eq!(r, Rect::from_ltrb(-1.0, 2.0, 3.0, 4.0));
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn kurbo_conversion() {
        let k = kurbo::Rect::new(0.0, 1.0, 2.5, 3.0);
        let r = Rect::from(k);
        assert_eq!(r, Rect::from_ltrb(0.0, 1.0, 2.5, 3.0));
        assert_eq!(kurbo::Rect::from(r), k);
    }

    mod test_logger {
        use std::sync::Mutex;

        static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

        struct Capture;

        impl log::Log for Capture {
            fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
                metadata.level() <= log::Level::Debug
            }

            fn log(&self, record: &log::Record<'_>) {
                if self.enabled(record.metadata()) {
                    RECORDS.lock().unwrap().push(record.args().to_string());
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: Capture = Capture;

        pub(super) fn install() {
            if log::set_logger(&LOGGER).is_ok() {
                log::set_max_level(log::LevelFilter::Debug);
            }
        }

        pub(super) fn contains(needle: &str, value: &str) -> bool {
            RECORDS
                .lock()
                .unwrap()
                .iter()
                .any(|m| m.contains(needle) && m.contains(value))
        }
    }
}
