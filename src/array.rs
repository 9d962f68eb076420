//! Conversions between the fixed-size value types and `ndarray` arrays.
//!
//! Going to `ndarray` always succeeds. Coming back checks the shape and
//! returns [`GraphmathError::ValidationError`](crate::GraphmathError::ValidationError)
//! if it does not match.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{validation_error, GraphmathError, Result};
use crate::{Matrix4x4, Vector3, Vector4};

fn check_len(view: &ArrayView1<'_, f32>, expected: usize) -> Result<()> {
    if view.len() != expected {
        return Err(validation_error(format!(
            "expected {expected} elements, got {}",
            view.len()
        )));
    }
    Ok(())
}

impl From<Vector3> for Array1<f32> {
    fn from(vector: Vector3) -> Self {
        Array1::from_vec(vector.to_array().to_vec())
    }
}

impl From<Vector4> for Array1<f32> {
    fn from(vector: Vector4) -> Self {
        Array1::from_vec(vector.to_array().to_vec())
    }
}

/// Row-major: element `[[r, c]]` is `matrix.get(r, c)`.
impl From<Matrix4x4> for Array2<f32> {
    fn from(matrix: Matrix4x4) -> Self {
        Array2::from_shape_fn((4, 4), |(r, c)| matrix.get(r, c))
    }
}

impl TryFrom<ArrayView1<'_, f32>> for Vector3 {
    type Error = GraphmathError;

    fn try_from(view: ArrayView1<'_, f32>) -> Result<Self> {
        check_len(&view, 3)?;
        Ok(Vector3::new(view[0], view[1], view[2]))
    }
}

impl TryFrom<ArrayView1<'_, f32>> for Vector4 {
    type Error = GraphmathError;

    fn try_from(view: ArrayView1<'_, f32>) -> Result<Self> {
        check_len(&view, 4)?;
        Ok(Vector4::new(view[0], view[1], view[2], view[3]))
    }
}

impl TryFrom<ArrayView2<'_, f32>> for Matrix4x4 {
    type Error = GraphmathError;

    fn try_from(view: ArrayView2<'_, f32>) -> Result<Self> {
        if view.dim() != (4, 4) {
            return Err(validation_error(format!(
                "expected shape (4, 4), got {:?}",
                view.dim()
            )));
        }

        let mut matrix = Matrix4x4::zeros();
        for ((r, c), &value) in view.indexed_iter() {
            matrix.set(r, c, value);
        }

        Ok(matrix)
    }
}
