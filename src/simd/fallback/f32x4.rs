use std::array;
use std::ops::{Add, Div, Mul, Sub};

use crate::simd::traits::{SimdVec, LANE_COUNT};

/// A portable stand-in for a 128-bit register: four `f32` in a plain array.
///
/// Always compiled, so hardware backends can be checked against it in tests.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct F32x4 {
    elements: [f32; LANE_COUNT],
}

impl F32x4 {
    #[inline(always)]
    fn zip_with(self, rhs: Self, op: impl Fn(f32, f32) -> f32) -> Self {
        Self {
            elements: array::from_fn(|i| op(self.elements[i], rhs.elements[i])),
        }
    }
}

impl SimdVec for F32x4 {
    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: [value; LANE_COUNT],
        }
    }

    #[inline(always)]
    fn from_array(values: [f32; LANE_COUNT]) -> Self {
        Self { elements: values }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; LANE_COUNT] {
        self.elements
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: self.elements.map(f32::sqrt),
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip_with(rhs, f32::min)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.zip_with(rhs, f32::max)
    }

    #[inline(always)]
    fn reduce_sum(self) -> f32 {
        let [x, y, z, w] = self.elements;
        (x + y) + (z + w)
    }

    #[inline(always)]
    fn rotate_yzx(self) -> Self {
        let [x, y, z, w] = self.elements;
        Self {
            elements: [y, z, x, w],
        }
    }

    #[inline(always)]
    fn unpacklo(self, other: Self) -> Self {
        let (a, b) = (self.elements, other.elements);
        Self {
            elements: [a[0], b[0], a[1], b[1]],
        }
    }

    #[inline(always)]
    fn unpackhi(self, other: Self) -> Self {
        let (a, b) = (self.elements, other.elements);
        Self {
            elements: [a[2], b[2], a[3], b[3]],
        }
    }

    #[inline(always)]
    fn move_lh(self, other: Self) -> Self {
        let (a, b) = (self.elements, other.elements);
        Self {
            elements: [a[0], a[1], b[0], b[1]],
        }
    }

    #[inline(always)]
    fn move_hl(self, other: Self) -> Self {
        let (a, b) = (self.elements, other.elements);
        Self {
            elements: [a[2], a[3], b[2], b[3]],
        }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a / b)
    }
}
