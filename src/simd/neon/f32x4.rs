#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::traits::{SimdVec, LANE_COUNT};

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: float32x4_t,
}

impl SimdVec for F32x4 {
    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { vdupq_n_f32(value) },
        }
    }

    #[inline(always)]
    fn from_array(values: [f32; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { vld1q_f32(values.as_ptr()) },
        }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; LANE_COUNT] {
        let mut values = [0.0f32; LANE_COUNT];

        unsafe { vst1q_f32(values.as_mut_ptr(), self.elements) };

        values
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { vsqrtq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vminq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmaxq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn fmadd(self, a: Self, b: Self) -> Self {
        // vfmaq_f32(b, self, a) = b + self * a, fused
        Self {
            elements: unsafe { vfmaq_f32(b.elements, self.elements, a.elements) },
        }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f32 {
        unsafe {
            // [x+y, z+w, x+y, z+w]
            let pairs = vpaddq_f32(self.elements, self.elements);
            vgetq_lane_f32::<0>(pairs) + vgetq_lane_f32::<1>(pairs)
        }
    }

    #[inline(always)]
    fn rotate_yzx(self) -> Self {
        unsafe {
            let v = self.elements;
            // [y, z, w, x]
            let rotated = vextq_f32::<1>(v, v);
            let rotated = vsetq_lane_f32::<2>(vgetq_lane_f32::<0>(v), rotated);
            Self {
                elements: vsetq_lane_f32::<3>(vgetq_lane_f32::<3>(v), rotated),
            }
        }
    }

    #[inline(always)]
    fn unpacklo(self, other: Self) -> Self {
        Self {
            elements: unsafe { vzip1q_f32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn unpackhi(self, other: Self) -> Self {
        Self {
            elements: unsafe { vzip2q_f32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn move_lh(self, other: Self) -> Self {
        Self {
            elements: unsafe {
                vcombine_f32(vget_low_f32(self.elements), vget_low_f32(other.elements))
            },
        }
    }

    #[inline(always)]
    fn move_hl(self, other: Self) -> Self {
        Self {
            elements: unsafe {
                vcombine_f32(vget_high_f32(self.elements), vget_high_f32(other.elements))
            },
        }
    }
}

/// Implementing the arithmetic traits for F32x4
/// This allows for using the `+`, `-`, `*` and `/` operators with F32x4 vectors.
impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vdivq_f32(self.elements, rhs.elements) },
        }
    }
}
