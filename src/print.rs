//! Bracketed text formatting for vectors and matrices.
//!
//! Vectors print as `[x, y, z]`, matrices as their rows joined by `",\n "`
//! inside an outer pair of brackets:
//!
//! ```text
//! [[0, 1, 2, 3],
//!  [4, 5, 6, 7],
//!  [8, 9, 10, 11],
//!  [12, 13, 14, 15]]
//! ```
//!
//! Components use `f32`'s own `Display`, so integral values have no decimal
//! point. Formatter options such as precision apply to every component.

use std::fmt;

use crate::{Matrix4x4, Vector3, Vector4};

const ROW_SEPARATOR: &str = ",\n ";

fn write_components(f: &mut fmt::Formatter<'_>, components: &[f32]) -> fmt::Result {
    f.write_str("[")?;

    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(component, f)?;
    }

    f.write_str("]")
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.to_array())
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.to_array())
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, row) in self.to_array().iter().enumerate() {
            if i > 0 {
                f.write_str(ROW_SEPARATOR)?;
            }
            write_components(f, row)?;
        }

        f.write_str("]")
    }
}
