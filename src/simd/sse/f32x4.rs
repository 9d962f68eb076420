#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::traits::{SimdVec, LANE_COUNT};

// _MM_SHUFFLE(3, 0, 2, 1)
const SHUFFLE_YZX: i32 = 0b11_00_10_01;

// _MM_SHUFFLE(2, 3, 0, 1)
const SHUFFLE_PAIRS: i32 = 0b10_11_00_01;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: __m128,
}

impl SimdVec for F32x4 {
    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm_set1_ps(value) },
        }
    }

    #[inline(always)]
    fn from_array(values: [f32; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm_loadu_ps(values.as_ptr()) },
        }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; LANE_COUNT] {
        let mut values = [0.0f32; LANE_COUNT];

        unsafe { _mm_storeu_ps(values.as_mut_ptr(), self.elements) };

        values
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm_sqrt_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_min_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f32 {
        unsafe {
            let v = self.elements;
            let shuf = _mm_shuffle_ps::<SHUFFLE_PAIRS>(v, v); // [y, x, w, z]
            let sums = _mm_add_ps(v, shuf); // [x+y, x+y, z+w, z+w]
            let high = _mm_movehl_ps(shuf, sums); // [z+w, z+w, ..]
            _mm_cvtss_f32(_mm_add_ss(sums, high))
        }
    }

    #[inline(always)]
    fn rotate_yzx(self) -> Self {
        Self {
            elements: unsafe { _mm_shuffle_ps::<SHUFFLE_YZX>(self.elements, self.elements) },
        }
    }

    #[inline(always)]
    fn unpacklo(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm_unpacklo_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn unpackhi(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm_unpackhi_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn move_lh(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm_movelh_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn move_hl(self, other: Self) -> Self {
        // _mm_movehl_ps(a, b) = [b2, b3, a2, a3]
        Self {
            elements: unsafe { _mm_movehl_ps(other.elements, self.elements) },
        }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
        }
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_div_ps(self.elements, rhs.elements) },
        }
    }
}
