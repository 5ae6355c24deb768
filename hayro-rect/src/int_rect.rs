//! Integer rectangles.

/// An axis-aligned rectangle with `i32` bounds.
///
/// No ordering is enforced between opposite bounds. A rectangle is empty if
/// `left >= right` or `top >= bottom`, which covers both zero-area and
/// inverted rectangles. Call [`IntRect::sort`] to put the bounds in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct IntRect {
    /// The left edge.
    pub left: i32,
    /// The top edge.
    pub top: i32,
    /// The right edge.
    pub right: i32,
    /// The bottom edge.
    pub bottom: i32,
}

impl IntRect {
    /// The all-zero rectangle.
    pub const ZERO: Self = Self::from_ltrb(0, 0, 0, 0);

    /// Create a new rectangle from its four bounds.
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Overwrite all four bounds.
    pub fn set(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
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
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    /// The vertical extent. Negative for inverted rectangles.
    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    /// Grow this rectangle to also cover the given box.
    ///
    /// An empty box is ignored. If `self` is empty, it is replaced by the box
    /// instead of being unioned with it, so a zero-initialized accumulator
    /// never pulls the result towards the origin.
    pub fn join(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        if left >= right || top >= bottom {
            return;
        }

        if self.is_empty() {
            self.set(left, top, right, bottom);
        } else {
            self.left = self.left.min(left);
            self.top = self.top.min(top);
            self.right = self.right.max(right);
            self.bottom = self.bottom.max(bottom);
        }
    }

    /// Grow this rectangle to also cover `other`. See [`IntRect::join`].
    pub fn join_rect(&mut self, other: &Self) {
        self.join(other.left, other.top, other.right, other.bottom);
    }

    /// Swap inverted bounds so that `left <= right` and `top <= bottom`.
    pub fn sort(&mut self) {
        if self.left > self.right {
            core::mem::swap(&mut self.left, &mut self.right);
        }

        if self.top > self.bottom {
            core::mem::swap(&mut self.top, &mut self.bottom);
        }
    }
}
