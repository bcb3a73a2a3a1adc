mod support;

use xsect::float_types::{Real, tolerance};
use xsect::{Face, Plane, Point3D, Solid, ValidationError, Vector3D, find_intersections};

use crate::support::{approx_eq, assert_point_set};

fn p(x: Real, y: Real, z: Real) -> Point3D {
    Point3D::new(x, y, z).unwrap()
}

fn plane(px: Real, py: Real, pz: Real, nx: Real, ny: Real, nz: Real) -> Plane {
    Plane::new(p(px, py, pz), Vector3D::new(nx, ny, nz).unwrap())
}

#[test]
fn cube_through_center_yields_the_midplane_square() {
    let cube = Solid::cube(10.0);
    let result = find_intersections(&cube, &plane(0.0, 0.0, 0.0, 0.0, 1.0, 0.0)).unwrap();

    assert!(result.success());
    assert_point_set(
        result.points(),
        &[
            (5.0, 0.0, 5.0),
            (5.0, 0.0, -5.0),
            (-5.0, 0.0, 5.0),
            (-5.0, 0.0, -5.0),
        ],
        1e-9,
    );
}

#[test]
fn plane_representative_point_does_not_matter() {
    let cube = Solid::cube(10.0);
    // Same plane as the through-center cut, anchored elsewhere on it
    let result = find_intersections(&cube, &plane(3.0, 0.0, -2.0, 0.0, 1.0, 0.0)).unwrap();
    assert!(result.success());
    assert_eq!(result.point_count(), 4);
}

#[test]
fn cube_miss_reports_no_intersection() {
    let cube = Solid::cube(10.0);
    let result = find_intersections(&cube, &plane(10.0, 0.0, 0.0, 1.0, 0.0, 0.0)).unwrap();
    assert!(!result.success());
    assert!(result.points().is_empty());
}

#[test]
fn plane_strictly_to_one_side_never_splits() {
    let cube = Solid::cube(10.0);
    for cut in [
        plane(100.0, 0.0, 0.0, 1.0, 2.0, 3.0),
        plane(0.0, -42.0, 0.0, 0.0, 1.0, 0.0),
        plane(0.0, 0.0, 6.0, 0.0, 0.0, -1.0),
    ] {
        let result = find_intersections(&cube, &cut).unwrap();
        assert!(!result.success());
        assert!(result.points().is_empty());
    }
}

#[test]
fn face_tangent_plane_reports_no_intersection() {
    let cube = Solid::cube(10.0);
    // Coplanar with the +X face: that face's vertices all classify on the
    // plane, everything else lies strictly behind
    let result = find_intersections(&cube, &plane(5.0, 0.0, 0.0, 1.0, 0.0, 0.0)).unwrap();
    assert!(!result.success());
    assert!(result.points().is_empty());
}

#[test]
fn edge_tangent_plane_reports_no_intersection() {
    let cube = Solid::cube(10.0);
    // Touches only the edge x = 5, y = 5
    let result = find_intersections(&cube, &plane(5.0, 5.0, 0.0, 1.0, 1.0, 0.0)).unwrap();
    assert!(!result.success());
    assert!(result.points().is_empty());
}

#[test]
fn diagonal_cut_stays_on_the_boundary() {
    let cube = Solid::cube(10.0);
    let result = find_intersections(&cube, &plane(0.0, 0.0, 0.0, 1.0, 1.0, 0.0)).unwrap();

    assert!(result.success());
    assert!(!result.points().is_empty());
    let eps = tolerance() * 10.0;
    for point in result.points() {
        let on_extreme = [point.x(), point.y(), point.z()]
            .iter()
            .any(|&c| approx_eq(c.abs(), 5.0, eps));
        assert!(on_extreme, "point {point:?} is not on the cube boundary");
    }
}

#[test]
fn flipping_the_normal_changes_nothing() {
    let cube = Solid::cube(10.0);
    let cut = plane(0.0, 0.0, 0.0, 0.7, -0.3, 1.9);
    let flipped = cut.flipped();

    let a = find_intersections(&cube, &cut).unwrap();
    let b = find_intersections(&cube, &flipped).unwrap();

    assert_eq!(a.success(), b.success());
    assert_eq!(a.point_count(), b.point_count());
    for point in a.points() {
        assert!(
            b.points().iter().any(|q| point.distance(q) < 1e-9),
            "point {point:?} missing after normal flip"
        );
    }
}

#[test]
fn scaled_normal_gives_the_same_section() {
    let cube = Solid::cube(10.0);
    let a = find_intersections(&cube, &plane(0.0, 0.0, 0.0, 0.0, 1.0, 0.0)).unwrap();
    let b = find_intersections(&cube, &plane(0.0, 0.0, 0.0, 0.0, 1000.0, 0.0)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn concave_prism_crossing_the_notch() {
    // L-shaped prism: L cross-section in XY, extruded from z=0 to z=2
    let outline = [
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 4.0),
        (0.0, 4.0),
    ];
    let n = outline.len();

    let bottom = Face::new(
        outline.iter().rev().map(|&(x, y)| p(x, y, 0.0)).collect(),
    )
    .unwrap();
    let top = Face::new(outline.iter().map(|&(x, y)| p(x, y, 2.0)).collect()).unwrap();

    let mut faces = vec![bottom, top];
    for i in 0..n {
        let (ax, ay) = outline[i];
        let (bx, by) = outline[(i + 1) % n];
        faces.push(
            Face::new(vec![
                p(ax, ay, 0.0),
                p(bx, by, 0.0),
                p(bx, by, 2.0),
                p(ax, ay, 2.0),
            ])
            .unwrap(),
        );
    }
    let prism = Solid::new(faces);

    // x + y = 4.5 crosses both arms of the L, so the non-convex end faces
    // are crossed four times each
    let result = find_intersections(&prism, &plane(2.25, 2.25, 0.0, 1.0, 1.0, 0.0)).unwrap();
    assert!(result.success());
    assert_point_set(
        result.points(),
        &[
            (4.0, 0.5, 0.0),
            (2.5, 2.0, 0.0),
            (2.0, 2.5, 0.0),
            (0.5, 4.0, 0.0),
            (4.0, 0.5, 2.0),
            (2.5, 2.0, 2.0),
            (2.0, 2.5, 2.0),
            (0.5, 4.0, 2.0),
        ],
        1e-9,
    );
}

#[test]
fn shared_edge_duplicates_collapse_to_one_point_each() {
    let cube = Solid::cube(10.0);
    let result = find_intersections(&cube, &plane(0.0, 0.0, 0.0, 0.0, 1.0, 0.0)).unwrap();
    // Four side faces emit two raw crossings each; dedup leaves the square
    assert_eq!(result.point_count(), 4);
}

#[test]
fn construction_rejects_malformed_input() {
    assert!(matches!(
        Point3D::new(Real::NAN, 0.0, 0.0),
        Err(ValidationError::InvalidPointCoordinate(..))
    ));
    assert_eq!(Vector3D::new(0.0, 0.0, 0.0), Err(ValidationError::ZeroVector));
    assert_eq!(
        Face::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]),
        Err(ValidationError::TooFewVertices(2))
    );
}
