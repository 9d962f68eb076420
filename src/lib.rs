//! Small SIMD-backed value types for graphics math: [`Vector3`], [`Vector4`]
//! and [`Matrix4x4`].
//!
//! Each type wraps one (or, for the matrix, four) 128-bit registers of the
//! backend chosen at build time: SSE on x86/x86_64, NEON on aarch64, and a
//! plain array everywhere else. The backend never shows up in the API; see
//! [`simd::Backend`] to inspect it.
//!
//! ```
//! use graphmath::{cross, normalize, Matrix4x4, Vector3, Vector4};
//!
//! let z = cross(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
//! assert_eq!(z, Vector3::new(0.0, 0.0, 1.0));
//!
//! let unit = normalize(Vector3::new(3.0, 0.0, 4.0));
//! assert_eq!(unit.to_string(), "[0.6, 0, 0.8]");
//!
//! let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(Matrix4x4::identity() * v, v);
//! ```

pub mod array;
pub mod batch;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod print;
pub mod simd;
pub mod vector3;
pub mod vector4;

pub use batch::BatchNormalize;
pub use error::{GraphmathError, OrAbort, Result};
pub use matrix::Matrix4x4;
pub use ops::{clamp, cross, dot, length, normalize, sqrt, transpose, VectorMath};
pub use vector3::Vector3;
pub use vector4::Vector4;
