//! SSE implementations for 128-bit vector operations.
//!
//! Only SSE and SSE2 instructions are used. Both are part of the x86_64
//! baseline, so no extra `target-feature` flags are needed.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: any x86_64 processor, or x86 with SSE2
//! - **Runtime Detection**: none; `build.rs` checks the target's features
//!
//! # Available Types
//!
//! - [`f32x4::F32x4`]: 128-bit vector containing 4 packed single-precision values

pub mod f32x4;
