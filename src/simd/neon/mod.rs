//! ARM NEON SIMD implementations for 128-bit vector operations.
//!
//! NEON is part of every AArch64 processor, including Apple Silicon and AWS
//! Graviton, so this backend is selected for all `aarch64` targets.
//!
//! # Available Types
//!
//! - [`f32x4::F32x4`]: native `float32x4_t` register
//!
//! # Conditional Compilation
//!
//! This module is only compiled when the `neon` cfg flag is set by the build
//! script. 32-bit ARM targets use the fallback backend because their NEON
//! intrinsics are not stable.

pub mod f32x4;
