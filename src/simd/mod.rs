//! Platform SIMD backends.
//!
//! `build.rs` emits exactly one of the `sse`, `neon` or `fallback` cfg flags,
//! and [`F32x4`] names that backend's register type. The value types in this
//! crate are written only against [`SimdVec`], so swapping backends never
//! changes their behavior beyond floating-point rounding.

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

pub mod fallback;

pub mod traits;

use std::fmt;

pub use traits::{SimdVec, LANE_COUNT};

#[cfg(sse)]
pub use sse::f32x4::F32x4;

#[cfg(neon)]
pub use neon::f32x4::F32x4;

#[cfg(fallback)]
pub use fallback::f32x4::F32x4;

use crate::error::{not_implemented, Result};

/// A native register representation that the value types can be backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// 128-bit SSE registers on x86 and x86_64.
    Sse,
    /// 128-bit NEON registers on aarch64.
    Neon,
    /// Plain `[f32; 4]` arrays.
    Fallback,
}

impl Backend {
    /// The backend this crate was compiled with.
    pub const fn active() -> Self {
        #[cfg(sse)]
        {
            Backend::Sse
        }
        #[cfg(neon)]
        {
            Backend::Neon
        }
        #[cfg(fallback)]
        {
            Backend::Fallback
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Backend::Sse => "sse",
            Backend::Neon => "neon",
            Backend::Fallback => "fallback",
        }
    }

    /// Whether the value types are backed by `self` in this build.
    pub fn is_active(self) -> bool {
        self == Self::active()
    }

    /// Checks that `self` backs the value types in this build.
    ///
    /// Returns [`GraphmathError::NotImplemented`](crate::GraphmathError::NotImplemented)
    /// naming the active backend otherwise.
    pub fn ensure(self) -> Result<()> {
        if self.is_active() {
            return Ok(());
        }

        log::debug!(
            "requested {} backend, but this build uses {}",
            self,
            Self::active()
        );

        Err(not_implemented(
            format!("{self} backend"),
            Self::active().name(),
        ))
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphmathError;

    #[test]
    fn test_active_backend_is_ensured() {
        assert!(Backend::active().ensure().is_ok());
    }

    #[test]
    fn test_inactive_backends_are_not_implemented() {
        let inactive = [Backend::Sse, Backend::Neon, Backend::Fallback]
            .into_iter()
            .filter(|backend| !backend.is_active());

        for backend in inactive {
            match backend.ensure() {
                Err(GraphmathError::NotImplemented { operation, backend: active }) => {
                    assert_eq!(operation, format!("{backend} backend"));
                    assert_eq!(active, Backend::active().name());
                }
                other => panic!("expected NotImplemented, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_exactly_one_backend_is_active() {
        let active = [Backend::Sse, Backend::Neon, Backend::Fallback]
            .into_iter()
            .filter(|backend| backend.is_active())
            .count();
        assert_eq!(active, 1);
    }
}
