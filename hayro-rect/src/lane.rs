//! A portable 4-wide `f32` lane.
//!
//! Holds exactly two 2D points (`x0, y0, x1, y1`). The operations are written
//! as plain per-element array code so that LLVM can lower them to the target's
//! 128-bit registers (SSE, NEON, WASM SIMD) without any intrinsics.

use core::ops::{Mul, MulAssign};

/// A 4-wide `f32` vector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct F32x4(pub [f32; 4]);

impl F32x4 {
    /// All lanes set to zero.
    pub const ZERO: Self = Self([0.0; 4]);

    /// Create a lane from four values.
    #[inline(always)]
    pub const fn new(values: [f32; 4]) -> Self {
        Self(values)
    }

    /// Create a lane with every element set to `v`.
    #[inline(always)]
    pub const fn splat(v: f32) -> Self {
        Self([v, v, v, v])
    }

    /// Load the first four floats of `data`.
    ///
    /// Panics if `data` holds fewer than four values.
    #[inline(always)]
    pub fn load(data: &[f32]) -> Self {
        Self([data[0], data[1], data[2], data[3]])
    }

    /// Store the four elements into `out`.
    #[inline(always)]
    pub fn store(self, out: &mut [f32; 4]) {
        *out = self.0;
    }

    /// Return the elements as an array.
    #[inline(always)]
    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Element-wise minimum.
    #[inline(always)]
    pub fn min(self, other: Self) -> Self {
        Self([
            self.0[0].min(other.0[0]),
            self.0[1].min(other.0[1]),
            self.0[2].min(other.0[2]),
            self.0[3].min(other.0[3]),
        ])
    }

    /// Element-wise maximum.
    #[inline(always)]
    pub fn max(self, other: Self) -> Self {
        Self([
            self.0[0].max(other.0[0]),
            self.0[1].max(other.0[1]),
            self.0[2].max(other.0[2]),
            self.0[3].max(other.0[3]),
        ])
    }

    /// Element-wise IEEE equality.
    ///
    /// NaN lanes never compare equal, not even to another NaN.
    #[inline(always)]
    pub fn simd_eq(self, other: Self) -> Mask4 {
        Mask4([
            self.0[0] == other.0[0],
            self.0[1] == other.0[1],
            self.0[2] == other.0[2],
            self.0[3] == other.0[3],
        ])
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self([
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
            self.0[3] * rhs.0[3],
        ])
    }
}

impl MulAssign for F32x4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Default for F32x4 {
    fn default() -> Self {
        Self::ZERO
    }
}

/// The result of a lane-wise comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mask4(pub [bool; 4]);

impl Mask4 {
    /// Whether every lane is set.
    #[inline(always)]
    pub fn all(self) -> bool {
        self.0[0] & self.0[1] & self.0[2] & self.0[3]
    }
}
