//! Error types for graphmath operations.
//!
//! Numerically degenerate input (normalizing a zero vector, taking the square
//! root of a negative component, clamping with inverted bounds) is not an
//! error: it yields NaN or implementation-defined values. The errors here are
//! reserved for build-configuration problems and for validating dynamically
//! shaped input.

use std::fmt;

/// Message prefix shared by every "not implemented" diagnostic.
pub const NOT_IMPLEMENTED_MESSAGE: &str = "graphmath: not implemented";

/// Errors that can occur during graphmath operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphmathError {
    /// A primitive has no implementation on the SIMD backend this crate was
    /// compiled with.
    NotImplemented {
        /// The primitive that was requested.
        operation: String,
        /// Name of the backend that is active in this build.
        backend: &'static str,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for GraphmathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphmathError::NotImplemented { operation, backend } => write!(
                f,
                "{NOT_IMPLEMENTED_MESSAGE}: {operation} (active backend: {backend})"
            ),
            GraphmathError::ValidationError { message } => {
                write!(f, "Validation error: {message}")
            }
        }
    }
}

impl std::error::Error for GraphmathError {}

/// Result type alias for graphmath operations.
pub type Result<T> = std::result::Result<T, GraphmathError>;

/// Creates a "not implemented" error for `operation` on `backend`.
pub fn not_implemented(operation: impl Into<String>, backend: &'static str) -> GraphmathError {
    GraphmathError::NotImplemented {
        operation: operation.into(),
        backend,
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> GraphmathError {
    GraphmathError::ValidationError {
        message: message.into(),
    }
}

/// Turns a [`Result`] into its value, or terminates the process.
///
/// This is for callers that cannot recover from a missing primitive and
/// would rather stop than propagate. On error the diagnostic is logged,
/// written to stderr, and the process exits with status `-1`.
pub trait OrAbort<T> {
    fn or_abort(self) -> T;
}

impl<T> OrAbort<T> for Result<T> {
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => {
                log::error!("{error}");
                eprintln!("{error}");
                std::process::exit(-1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_display() {
        let error = not_implemented("cross", "fallback");
        let display = format!("{error}");
        assert!(display.starts_with(NOT_IMPLEMENTED_MESSAGE));
        assert!(display.contains("cross"));
        assert!(display.contains("active backend: fallback"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = validation_error("expected shape (4, 4), got (3, 4)");
        let display = format!("{error}");
        assert!(display.contains("Validation error"));
        assert!(display.contains("expected shape (4, 4), got (3, 4)"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = not_implemented("sqrt", "sse");
        let error2 = not_implemented("sqrt", "sse");
        let error3 = not_implemented("sqrt", "neon");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_or_abort_passes_values_through() {
        let ok: Result<f32> = Ok(1.5);
        assert_eq!(ok.or_abort(), 1.5);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = validation_error("test error");

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
