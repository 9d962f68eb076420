//! Scalar backend used when no SIMD instruction set is available, or when the
//! `force-fallback` feature is enabled.

pub mod f32x4;
