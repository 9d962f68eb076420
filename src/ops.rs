//! Operations shared by [`Vector3`](crate::Vector3) and [`Vector4`](crate::Vector4),
//! plus the free-function forms of every vector and matrix operation.

use crate::{Matrix4x4, Vector3};

/// Component-wise math available on every vector type.
pub trait VectorMath: Copy {
    /// Sum of the component-wise products.
    fn dot(self, rhs: Self) -> f32;

    /// Euclidean norm.
    #[inline]
    fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns `self / self.length()`.
    ///
    /// There is no guard for the zero vector: its components come out NaN.
    fn normalize(self) -> Self;

    /// Component-wise square root. Negative components become NaN.
    fn sqrt(self) -> Self;

    /// Clamps each component to `[low, high]` (inclusive).
    ///
    /// When `low > high` for some component, that component becomes `high`.
    /// A NaN component of `self` becomes `low` with SSE and the fallback
    /// backend, but stays NaN with NEON.
    fn clamp(self, low: Self, high: Self) -> Self;
}

#[inline]
pub fn dot<V: VectorMath>(a: V, b: V) -> f32 {
    a.dot(b)
}

#[inline]
pub fn length<V: VectorMath>(v: V) -> f32 {
    v.length()
}

#[inline]
pub fn normalize<V: VectorMath>(v: V) -> V {
    v.normalize()
}

#[inline]
pub fn sqrt<V: VectorMath>(v: V) -> V {
    v.sqrt()
}

#[inline]
pub fn clamp<V: VectorMath>(v: V, low: V, high: V) -> V {
    v.clamp(low, high)
}

/// Right-handed cross product of two 3D vectors.
#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}

#[inline]
pub fn transpose(m: Matrix4x4) -> Matrix4x4 {
    m.transpose()
}
