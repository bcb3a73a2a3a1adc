//! Cross-section query entry point and its result type.

use crate::dedup::dedup_points;
use crate::errors::GeometryError;
use crate::plane::Plane;
use crate::point::Point3D;
use crate::solid::Solid;
use crate::split::split_solid;

/// Outcome of one cross-section query.
///
/// Invariant: `points` is non-empty exactly when `success` is true. A plane
/// that misses the solid or only grazes a face/edge/vertex reports
/// `success == false` with no points — that is a legitimate outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionResult {
    success: bool,
    points: Vec<Point3D>,
}

impl IntersectionResult {
    const fn no_intersection() -> Self {
        IntersectionResult {
            success: false,
            points: Vec::new(),
        }
    }

    /// Whether the plane divides the solid.
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Deduplicated boundary intersection points, in no particular order.
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

/// Find the points where `plane` crosses the boundary of `solid`.
///
/// Classifies every boundary vertex against the plane, splits each face's
/// edge loop, then merges near-coincident candidates into one point each.
/// The plane is judged to divide the solid only when vertices exist strictly
/// on both of its sides; otherwise the result is unsuccessful and empty.
///
/// `solid` must be a closed, manifold boundary — that is the caller's
/// contract and is not verified here. Structurally malformed input (a face
/// with fewer than 3 vertices, an invalidated plane) fails the whole query
/// with a [`GeometryError`].
pub fn find_intersections(
    solid: &Solid,
    plane: &Plane,
) -> Result<IntersectionResult, GeometryError> {
    let outcome = split_solid(solid, plane)?;
    if !outcome.divides {
        return Ok(IntersectionResult::no_intersection());
    }

    let points = dedup_points(&outcome.points);
    if points.is_empty() {
        // A dividing plane on a closed boundary always crosses some edge;
        // guard the result invariant regardless.
        return Ok(IntersectionResult::no_intersection());
    }

    Ok(IntersectionResult {
        success: true,
        points,
    })
}
