//! Behavior of `Vector3`: constructors, operators and the free functions.

use approx::{assert_abs_diff_eq, assert_ulps_eq};
use graphmath::{clamp, cross, dot, length, normalize, sqrt, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random vectors with components in `[-1, 1)`.
fn random_vectors(seed: u64, count: usize) -> Vec<Vector3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.random::<Vector3>() * 2.0 - 1.0)
        .collect()
}

#[test]
fn test_constructor() {
    let zeros = Vector3::default();
    let ones = Vector3::new(1.0, 1.0, 1.0);

    assert_eq!(zeros.x(), 0.0);
    assert_eq!(zeros.y(), 0.0);
    assert_eq!(zeros.z(), 0.0);

    assert_eq!(ones.x(), 1.0);
    assert_eq!(ones.y(), 1.0);
    assert_eq!(ones.z(), 1.0);

    let copy = ones;
    assert_eq!(copy, ones);
}

#[test]
fn test_length() {
    assert_ulps_eq!(length(Vector3::new(1.0, 1.0, 1.0)), 1.7320508);
    assert_eq!(length(Vector3::new(3.0, 4.0, 0.0)), 5.0);
}

#[test]
fn test_normalize() {
    let normalized = normalize(Vector3::new(1.0, 1.0, 1.0));

    assert_ulps_eq!(normalized, Vector3::same(0.57735026));
}

#[test]
fn test_normalize_zero_vector_is_nan() {
    let normalized = normalize(Vector3::zeros());

    assert!(normalized.x().is_nan());
    assert!(normalized.y().is_nan());
    assert!(normalized.z().is_nan());
}

#[test]
fn test_normalized_vectors_have_unit_length() {
    for v in random_vectors(12345, 1000) {
        if length(v) == 0.0 {
            continue;
        }
        assert_abs_diff_eq!(length(normalize(v)), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_sqrt() {
    let result = sqrt(Vector3::new(4.0, 9.0, 0.25));
    assert_eq!(result, Vector3::new(2.0, 3.0, 0.5));

    let negative = sqrt(Vector3::new(-1.0, 16.0, -0.5));
    assert!(negative.x().is_nan());
    assert_eq!(negative.y(), 4.0);
    assert!(negative.z().is_nan());
}

#[test]
fn test_cross_of_unit_axes() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    let z = Vector3::new(0.0, 0.0, 1.0);

    assert_eq!(cross(x, y), z);
    assert_eq!(cross(y, z), x);
    assert_eq!(cross(z, x), y);
    assert_eq!(cross(y, x), -z);
}

#[test]
fn test_cross_of_parallel_vectors_is_zero() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(cross(a, a * 2.0), Vector3::zeros());
    assert_eq!(cross(a, -a), Vector3::zeros());
}

#[test]
fn test_cross_is_anticommutative() {
    let vectors = random_vectors(7, 200);

    for pair in vectors.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_eq!(cross(a, b), -cross(b, a));
    }
}

#[test]
fn test_cross_is_orthogonal_to_inputs() {
    let vectors = random_vectors(99, 200);

    for pair in vectors.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);
        let c = cross(a, b);
        assert_abs_diff_eq!(dot(a, c), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(dot(b, c), 0.0, epsilon = 1e-5);
    }
}

#[test]
fn test_dot() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, -5.0, 6.0);
    assert_eq!(dot(a, b), 12.0);
}

#[test]
fn test_dot_is_commutative() {
    let vectors = random_vectors(2024, 200);

    for pair in vectors.chunks_exact(2) {
        assert_eq!(dot(pair[0], pair[1]), dot(pair[1], pair[0]));
    }
}

#[test]
fn test_clamp() {
    let result = clamp(
        Vector3::new(1.0, -10.0, 10.0),
        Vector3::same(-5.0),
        Vector3::same(5.0),
    );

    assert_eq!(result, Vector3::new(1.0, -5.0, 5.0));
}

#[test]
fn test_clamp_bounds_are_inclusive() {
    let low = Vector3::new(-1.0, 0.0, 2.0);
    let high = Vector3::new(1.0, 0.0, 3.0);

    assert_eq!(clamp(low, low, high), low);
    assert_eq!(clamp(high, low, high), high);
}

#[test]
fn test_subtract() {
    let c = Vector3::same(1.0) - Vector3::same(1.0);
    assert_eq!(c, Vector3::zeros());

    let c = Vector3::same(2.0) - Vector3::same(5.0);
    assert_eq!(c, Vector3::same(-3.0));
}

#[test]
fn test_subtract_by_float() {
    let c = Vector3::same(2.0) - 2.0;
    assert_eq!(c, Vector3::zeros());

    let c = Vector3::new(1.0, 2.0, 3.0) - 0.5;
    assert_eq!(c, Vector3::new(0.5, 1.5, 2.5));
}

#[test]
fn test_add() {
    let c = Vector3::same(2.0) + Vector3::same(5.0);
    assert_eq!(c, Vector3::same(7.0));
}

#[test]
fn test_multiply_by_float() {
    assert_eq!(Vector3::same(1.0) * 2.0, Vector3::same(2.0));
    assert_eq!(2.0 * Vector3::new(1.0, -2.0, 3.0), Vector3::new(2.0, -4.0, 6.0));
}

#[test]
fn test_multiply_by_vector() {
    let c = Vector3::new(1.0, 2.0, 3.0) * Vector3::new(2.0, 3.0, 4.0);
    assert_eq!(c, Vector3::new(2.0, 6.0, 12.0));
}

#[test]
fn test_divide_by_float() {
    assert_eq!(Vector3::same(4.0) / 2.0, Vector3::same(2.0));
}

#[test]
fn test_scalar_operators_keep_unused_lane_zero() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let ones = Vector3::same(1.0);

    // Division by zero and scalar shifts touch only x, y and z.
    assert_eq!(length(v / 0.0), f32::INFINITY);
    assert_eq!(dot(v - 1.0, ones), 3.0);
    assert_eq!(dot(v * 2.0 + ones, ones), 15.0);
    assert_eq!(length(-Vector3::new(3.0, 0.0, 4.0)), 5.0);
}

#[test]
fn test_clamp_with_inverted_bounds_takes_high() {
    let v = Vector3::new(1.0, -10.0, 10.0);
    let clamped = clamp(v, Vector3::same(5.0), Vector3::same(-5.0));
    assert_eq!(clamped, Vector3::same(-5.0));
}

#[test]
fn test_compound_assignment() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);

    v += Vector3::same(1.0);
    assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));

    v -= Vector3::same(2.0);
    assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));

    v *= 3.0;
    assert_eq!(v, Vector3::new(0.0, 3.0, 6.0));

    v /= 3.0;
    assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));
}

#[test]
fn test_equality_is_exact() {
    let a = Vector3::new(0.1, 0.2, 0.3);
    assert_eq!(a, Vector3::new(0.1, 0.2, 0.3));
    assert_ne!(a, Vector3::new(0.1, 0.2, 0.3 + 1e-7));
}
