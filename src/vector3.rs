//! Three-component vectors.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::traits::Zero;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::ops::VectorMath;
use crate::simd::{SimdVec, F32x4};

/// A 3-dimensional vector `(x, y, z)`.
///
/// The components live in the first three lanes of a 128-bit register. The
/// fourth lane is kept at zero by every operation, so lane-wide reductions
/// such as [`VectorMath::dot`] only ever see the three real components.
#[derive(Clone, Copy)]
pub struct Vector3 {
    native: F32x4,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(F32x4::from_array([x, y, z, 0.0]))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    pub(crate) fn wrap(native: F32x4) -> Self {
        Self { native }
    }

    #[cfg(test)]
    fn native(self) -> F32x4 {
        self.native
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.native.lane(0)
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.native.lane(1)
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.native.lane(2)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        let [x, y, z, _] = self.native.to_array();
        [x, y, z]
    }

    /// Right-handed cross product. Parallel inputs give the zero vector.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let (a, b) = (self.native, rhs.native);
        // Lanes come out as (z, x, y); rotating once more restores (x, y, z).
        let rotated = a * b.rotate_yzx() - a.rotate_yzx() * b;
        Self::wrap(rotated.rotate_yzx())
    }

    // Register for `+`/`-` with a scalar: the unused lane gets 0.
    #[inline(always)]
    fn additive(value: f32) -> F32x4 {
        F32x4::from_array([value, value, value, 0.0])
    }

    // Register for `*`/`/` with a scalar: the unused lane gets 1.
    #[inline(always)]
    fn multiplicative(value: f32) -> F32x4 {
        F32x4::from_array([value, value, value, 1.0])
    }
}

impl VectorMath for Vector3 {
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

impl Default for Vector3 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y() && self.z() == other.z()
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(vector: Vector3) -> Self {
        vector.to_array()
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::wrap(self.native + rhs.native)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::wrap(self.native - rhs.native)
    }
}

/// Subtracts the scalar from every component.
impl Sub<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self::Output {
        Self::wrap(self.native - Self::additive(rhs))
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::wrap(self.native * Self::multiplicative(rhs))
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

/// Component-wise product.
impl Mul for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::wrap(self.native * rhs.native)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self::wrap(self.native / Self::multiplicative(rhs))
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::wrap(self.native * Self::multiplicative(-1.0))
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Self::zeros()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zeros()
    }
}

impl Distribution<Vector3> for StandardUniform {
    /// Samples each component uniformly from `[0, 1)`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        Vector3::new(rng.random(), rng.random(), rng.random())
    }
}

impl AbsDiffEq for Vector3 {
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

impl RelativeEq for Vector3 {
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

impl UlpsEq for Vector3 {
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
