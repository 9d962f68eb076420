//! Exact text output of the `Display` implementations.

use graphmath::{Matrix4x4, Vector3, Vector4};

#[test]
fn test_print_vector3() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(v.to_string(), "[1, 2, 3]");
}

#[test]
fn test_print_vector4() {
    let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v.to_string(), "[1, 2, 3, 4]");
}

#[test]
fn test_print_matrix4x4() {
    let matrix = Matrix4x4::from_rows(
        Vector4::new(0.0, 1.0, 2.0, 3.0),
        Vector4::new(4.0, 5.0, 6.0, 7.0),
        Vector4::new(8.0, 9.0, 10.0, 11.0),
        Vector4::new(12.0, 13.0, 14.0, 15.0),
    );

    let expected = "[[0, 1, 2, 3],\n [4, 5, 6, 7],\n [8, 9, 10, 11],\n [12, 13, 14, 15]]";

    assert_eq!(matrix.to_string(), expected);
}

#[test]
fn test_print_negative_and_fractional() {
    let v = Vector3::new(-1.5, 0.25, -0.0);
    assert_eq!(format!("{v}"), "[-1.5, 0.25, -0]");
}
