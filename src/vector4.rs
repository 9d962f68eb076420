//! Four-component vectors.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::traits::Zero;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::ops::VectorMath;
use crate::simd::{SimdVec, F32x4};

/// A 4-dimensional vector `(x, y, z, w)`, where `w` is usually the
/// homogeneous coordinate.
#[derive(Clone, Copy)]
pub struct Vector4 {
    native: F32x4,
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(F32x4::from_array([x, y, z, w]))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::wrap(F32x4::splat(0.0))
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub fn same(value: f32) -> Self {
        Self::wrap(F32x4::splat(value))
    }

    #[inline]
    pub(crate) fn wrap(native: F32x4) -> Self {
        Self { native }
    }

    #[inline]
    pub(crate) fn native(self) -> F32x4 {
        self.native
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.native.lane(0)
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.native.lane(1)
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.native.lane(2)
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.native.lane(3)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.native.to_array()
    }

    /// Euclidean norm over all four components. Same as
    /// [`VectorMath::length`].
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.length()
    }

    /// Returns a copy scaled to unit magnitude. Same as
    /// [`VectorMath::normalize`].
    #[inline]
    pub fn normalized(&self) -> Self {
        self.normalize()
    }
}

impl VectorMath for Vector4 {
    #[inline]
    fn dot(self, rhs: Self) -> f32 {
        (self.native * rhs.native).reduce_sum()
    }

    #[inline]
    fn normalize(self) -> Self {
        self / self.length()
    }

    #[inline]
    fn sqrt(self) -> Self {
        Self::wrap(self.native.sqrt())
    }

    #[inline]
    fn clamp(self, low: Self, high: Self) -> Self {
        Self::wrap(self.native.max(low.native).min(high.native))
    }
}

impl Default for Vector4 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl PartialEq for Vector4 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(values: [f32; 4]) -> Self {
        Self::wrap(F32x4::from_array(values))
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(vector: Vector4) -> Self {
        vector.to_array()
    }
}

impl Add for Vector4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::wrap(self.native + rhs.native)
    }
}

impl Sub for Vector4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::wrap(self.native - rhs.native)
    }
}

impl Sub<f32> for Vector4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self::Output {
        Self::wrap(self.native - F32x4::splat(rhs))
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::wrap(self.native * F32x4::splat(rhs))
    }
}

impl Mul<Vector4> for f32 {
    type Output = Vector4;

    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        rhs * self
    }
}

/// Component-wise product.
impl Mul for Vector4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::wrap(self.native * rhs.native)
    }
}

impl Div<f32> for Vector4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self::wrap(self.native / F32x4::splat(rhs))
    }
}

impl Neg for Vector4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::wrap(self.native * F32x4::splat(-1.0))
    }
}

impl AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vector4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Zero for Vector4 {
    fn zero() -> Self {
        Self::zeros()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zeros()
    }
}

impl Distribution<Vector4> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector4 {
        Vector4::new(rng.random(), rng.random(), rng.random(), rng.random())
    }
}

impl AbsDiffEq for Vector4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Vector4 {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
