use xsect::Point3D;
use xsect::float_types::Real;

pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Assert that `actual` contains exactly the `expected` coordinates,
/// ignoring order.
pub fn assert_point_set(actual: &[Point3D], expected: &[(Real, Real, Real)], eps: Real) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "expected {} points, got {:?}",
        expected.len(),
        actual
    );
    for &(x, y, z) in expected {
        assert!(
            actual
                .iter()
                .any(|p| approx_eq(p.x(), x, eps)
                    && approx_eq(p.y(), y, eps)
                    && approx_eq(p.z(), z, eps)),
            "missing point ({x}, {y}, {z}) in {actual:?}"
        );
    }
}
