//! 4x4 matrices.

use std::fmt;
use std::ops::{Add, Mul};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::traits::{One, Zero};
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::simd::{SimdVec, F32x4, LANE_COUNT};
use crate::Vector4;

/// A 4x4 matrix of `f32`.
///
/// Elements are addressed as `(row, column)`. Each row is held in its own
/// 128-bit register, so row access is free and [`Matrix4x4::transpose`] is a
/// handful of shuffles.
#[derive(Clone, Copy)]
pub struct Matrix4x4 {
    rows: [F32x4; LANE_COUNT],
}

impl Matrix4x4 {
    /// Creates a matrix whose row `r` is `rows[r]`.
    #[inline]
    pub fn from_rows(row0: Vector4, row1: Vector4, row2: Vector4, row3: Vector4) -> Self {
        Self {
            rows: [row0.native(), row1.native(), row2.native(), row3.native()],
        }
    }

    /// Creates a matrix with `value` on the diagonal and zeros elsewhere.
    #[inline]
    pub fn from_diagonal(value: f32) -> Self {
        let zero = F32x4::splat(0.0);

        Self {
            rows: [
                zero.with_lane(0, value),
                zero.with_lane(1, value),
                zero.with_lane(2, value),
                zero.with_lane(3, value),
            ],
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(1.0)
    }

    #[inline]
    pub fn zeros() -> Self {
        Self {
            rows: [F32x4::splat(0.0); LANE_COUNT],
        }
    }

    /// Returns the element at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not in `0..4`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f32 {
        self.rows[row].lane(column)
    }

    /// Overwrites the element at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not in `0..4`.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: f32) {
        self.rows[row] = self.rows[row].with_lane(column, value);
    }

    /// # Panics
    ///
    /// Panics if `row` is not in `0..4`.
    #[inline]
    pub fn row(&self, row: usize) -> Vector4 {
        Vector4::wrap(self.rows[row])
    }

    /// # Panics
    ///
    /// Panics if `column` is not in `0..4`.
    #[inline]
    pub fn column(&self, column: usize) -> Vector4 {
        Vector4::new(
            self.get(0, column),
            self.get(1, column),
            self.get(2, column),
            self.get(3, column),
        )
    }

    /// Returns the matrix with rows and columns swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            rows: F32x4::transpose4(self.rows),
        }
    }

    /// The elements as `[row][column]`.
    pub fn to_array(self) -> [[f32; 4]; 4] {
        self.rows.map(F32x4::to_array)
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl PartialEq for Matrix4x4 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix4x4")
            .field("rows", &self.to_array())
            .finish()
    }
}

impl From<[[f32; 4]; 4]> for Matrix4x4 {
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self {
            rows: rows.map(F32x4::from_array),
        }
    }
}

impl From<Matrix4x4> for [[f32; 4]; 4] {
    fn from(matrix: Matrix4x4) -> Self {
        matrix.to_array()
    }
}

/// Matrix-vector product: component `i` is row `i` dotted with `rhs`.
impl Mul<Vector4> for Matrix4x4 {
    type Output = Vector4;

    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        let v = rhs.native();
        let [r0, r1, r2, r3] = self.rows;

        Vector4::new(
            (r0 * v).reduce_sum(),
            (r1 * v).reduce_sum(),
            (r2 * v).reduce_sum(),
            (r3 * v).reduce_sum(),
        )
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        // Row i of the product is sum_k a(i, k) * row_k(b): broadcast each
        // element of a's row and accumulate against b's rows.
        let rows = self.rows.map(|row| {
            let [a0, a1, a2, a3] = row.to_array();

            let acc = F32x4::splat(a0) * rhs.rows[0];
            let acc = F32x4::splat(a1).fmadd(rhs.rows[1], acc);
            let acc = F32x4::splat(a2).fmadd(rhs.rows[2], acc);
            F32x4::splat(a3).fmadd(rhs.rows[3], acc)
        });

        Self { rows }
    }
}

/// Element-wise sum.
impl Add for Matrix4x4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let [a0, a1, a2, a3] = self.rows;
        let [b0, b1, b2, b3] = rhs.rows;

        Self {
            rows: [a0 + b0, a1 + b1, a2 + b2, a3 + b3],
        }
    }
}

impl Zero for Matrix4x4 {
    fn zero() -> Self {
        Self::zeros()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zeros()
    }
}

impl One for Matrix4x4 {
    fn one() -> Self {
        Self::identity()
    }
}

impl Distribution<Matrix4x4> for StandardUniform {
    /// Samples each element uniformly from `[0, 1)`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Matrix4x4 {
        Matrix4x4::from_rows(rng.random(), rng.random(), rng.random(), rng.random())
    }
}

impl AbsDiffEq for Matrix4x4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        (0..LANE_COUNT).all(|r| self.row(r).abs_diff_eq(&other.row(r), epsilon))
    }
}

impl RelativeEq for Matrix4x4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        (0..LANE_COUNT).all(|r| {
            self.row(r)
                .relative_eq(&other.row(r), epsilon, max_relative)
        })
    }
}

impl UlpsEq for Matrix4x4 {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        (0..LANE_COUNT).all(|r| self.row(r).ulps_eq(&other.row(r), epsilon, max_ulps))
    }
}
