use std::ops::{Add, Div, Mul, Sub};

/// Number of `f32` lanes in every backend register.
pub const LANE_COUNT: usize = 4;

/// A 4-lane `f32` register.
///
/// Every backend (`sse`, `neon`, `fallback`) provides one implementor named
/// `F32x4`. The value types in this crate only talk to the active backend
/// through this trait, so the choice of backend never leaks into their API.
///
/// Lane `0` is `x`, lane `3` is `w`.
pub trait SimdVec:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Creates a register with all lanes set to `value`.
    fn splat(value: f32) -> Self;

    fn from_array(values: [f32; LANE_COUNT]) -> Self;

    fn to_array(self) -> [f32; LANE_COUNT];

    /// Reads one lane.
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANE_COUNT`.
    #[inline(always)]
    fn lane(self, index: usize) -> f32 {
        self.to_array()[index]
    }

    /// Returns a copy with lane `index` replaced by `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANE_COUNT`.
    #[inline(always)]
    fn with_lane(self, index: usize, value: f32) -> Self {
        let mut values = self.to_array();
        values[index] = value;
        Self::from_array(values)
    }

    /// Lane-wise square root. Negative lanes become NaN.
    fn sqrt(self) -> Self;

    /// Lane-wise minimum.
    fn min(self, rhs: Self) -> Self;

    /// Lane-wise maximum.
    fn max(self, rhs: Self) -> Self;

    /// Computes `self * a + b`.
    #[inline(always)]
    fn fmadd(self, a: Self, b: Self) -> Self {
        self * a + b
    }

    /// Horizontal sum, evaluated as `(l0 + l1) + (l2 + l3)` on every backend.
    fn reduce_sum(self) -> f32;

    /// `[x, y, z, w]` -> `[y, z, x, w]`
    fn rotate_yzx(self) -> Self;

    /// `[a0, b0, a1, b1]`
    fn unpacklo(self, other: Self) -> Self;

    /// `[a2, b2, a3, b3]`
    fn unpackhi(self, other: Self) -> Self;

    /// Low halves of both registers: `[a0, a1, b0, b1]`
    fn move_lh(self, other: Self) -> Self;

    /// High halves of both registers: `[a2, a3, b2, b3]`
    fn move_hl(self, other: Self) -> Self;

    /// Transposes four row registers into four column registers.
    #[inline(always)]
    fn transpose4(rows: [Self; LANE_COUNT]) -> [Self; LANE_COUNT] {
        let [r0, r1, r2, r3] = rows;

        let t0 = r0.unpacklo(r1); // [a0, b0, a1, b1]
        let t1 = r2.unpacklo(r3); // [c0, d0, c1, d1]
        let t2 = r0.unpackhi(r1); // [a2, b2, a3, b3]
        let t3 = r2.unpackhi(r3); // [c2, d2, c3, d3]

        [
            t0.move_lh(t1),
            t0.move_hl(t1),
            t2.move_lh(t3),
            t2.move_hl(t3),
        ]
    }
}
