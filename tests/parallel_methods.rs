use graphmath::batch::PARALLEL_THRESHOLD;
use graphmath::{BatchNormalize, Matrix4x4, Vector3, Vector4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_parallel_transform_small_slice() {
    let m = Matrix4x4::from_diagonal(3.0);
    let data = vec![Vector4::new(1.0, 2.0, 3.0, 4.0); 4];

    let result = m.par_transform_all(&data);

    assert_eq!(result.len(), data.len());
    for v in result {
        assert_eq!(v, Vector4::new(3.0, 6.0, 9.0, 12.0));
    }
}

#[test]
fn test_parallel_transform_large_slice_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(12345);
    let m: Matrix4x4 = rng.random();
    let data: Vec<Vector4> = (0..PARALLEL_THRESHOLD * 3 + 17)
        .map(|_| rng.random())
        .collect();

    let sequential = m.transform_all(&data);
    let parallel = m.par_transform_all(&data);

    assert_eq!(sequential.len(), parallel.len());
    for (i, (s, p)) in sequential.iter().zip(parallel.iter()).enumerate() {
        assert_eq!(s, p, "par_transform_all differs at index {i}");
        assert_eq!(*p, m * data[i]);
    }
}

#[test]
fn test_parallel_normalize_large_slice_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(54321);
    let data: Vec<Vector3> = (0..PARALLEL_THRESHOLD * 2 + 5)
        .map(|_| rng.random::<Vector3>() + Vector3::same(0.1))
        .collect();

    let sequential = data.normalize_all();
    let parallel = data.par_normalize_all();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_parallel_normalize_vector4() {
    let data = vec![Vector4::same(2.0); PARALLEL_THRESHOLD + 1];

    for v in data.par_normalize_all() {
        assert_eq!(v, Vector4::same(0.5));
    }
}
