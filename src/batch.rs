//! Slice-level operations, each with a sequential and a `rayon` form.
//!
//! The `par_*` variants fall back to the sequential path for slices of at
//! most [`PARALLEL_THRESHOLD`] elements, where spawning work costs more than
//! it saves. Output order always matches input order.

use rayon::prelude::*;

use crate::ops::VectorMath;
use crate::{Matrix4x4, Vector4};

/// Slices at or below this length are processed on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 16 * 1024;

/// Number of elements each parallel task handles.
pub const PARALLEL_CHUNK_SIZE: usize = 4 * 1024;

impl Matrix4x4 {
    /// Multiplies every vector in `vectors` by `self`.
    pub fn transform_all(&self, vectors: &[Vector4]) -> Vec<Vector4> {
        vectors.iter().map(|&v| *self * v).collect()
    }

    /// Parallel version of [`Matrix4x4::transform_all`].
    pub fn par_transform_all(&self, vectors: &[Vector4]) -> Vec<Vector4> {
        if vectors.len() <= PARALLEL_THRESHOLD {
            return self.transform_all(vectors);
        }

        let mut out = vec![Vector4::zeros(); vectors.len()];

        out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .zip(vectors.par_chunks(PARALLEL_CHUNK_SIZE))
            .for_each(|(out_chunk, in_chunk)| {
                for (o, &v) in out_chunk.iter_mut().zip(in_chunk) {
                    *o = *self * v;
                }
            });

        out
    }
}

/// Normalizes every vector of a slice.
pub trait BatchNormalize {
    type Item;

    fn normalize_all(&self) -> Vec<Self::Item>;

    fn par_normalize_all(&self) -> Vec<Self::Item>;
}

impl<V> BatchNormalize for [V]
where
    V: VectorMath + Default + Send + Sync,
{
    type Item = V;

    fn normalize_all(&self) -> Vec<V> {
        self.iter().map(|v| v.normalize()).collect()
    }

    fn par_normalize_all(&self) -> Vec<V> {
        if self.len() <= PARALLEL_THRESHOLD {
            return self.normalize_all();
        }

        let mut out = vec![V::default(); self.len()];

        out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .zip(self.par_chunks(PARALLEL_CHUNK_SIZE))
            .for_each(|(out_chunk, in_chunk)| {
                for (o, v) in out_chunk.iter_mut().zip(in_chunk) {
                    *o = v.normalize();
                }
            });

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3;

    #[test]
    fn test_empty_slices() {
        let m = Matrix4x4::identity();
        assert!(m.transform_all(&[]).is_empty());
        assert!(m.par_transform_all(&[]).is_empty());

        let empty: [Vector3; 0] = [];
        assert!(empty.normalize_all().is_empty());
        assert!(empty.par_normalize_all().is_empty());
    }

    #[test]
    fn test_small_slices_match_elementwise() {
        let m = Matrix4x4::from_diagonal(2.0);
        let vectors = [Vector4::new(1.0, 2.0, 3.0, 4.0), Vector4::same(-1.0)];

        assert_eq!(
            m.par_transform_all(&vectors),
            vec![Vector4::new(2.0, 4.0, 6.0, 8.0), Vector4::same(-2.0)]
        );
    }
}
