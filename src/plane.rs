//! Plane representation, signed distance, and tri-state point classification.

use crate::errors::ValidationError;
use crate::float_types::{Real, tolerance};
use crate::point::Point3D;
use crate::vector::Vector3D;
use nalgebra::Point3;

// Point/plane classification constants, OR-combinable per face
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// An infinite plane through `point` with orientation `normal`.
///
/// The normal is direction-only; its magnitude never matters. Equivalent
/// planes with different representative points or scaled normals are not
/// canonicalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Point3D,
    normal: Vector3D,
}

impl Plane {
    /// Create a plane from an already-validated point and normal.
    pub const fn new(point: Point3D, normal: Vector3D) -> Self {
        Plane { point, normal }
    }

    /// Re-check the stored point and normal.
    ///
    /// Both parts were validated at construction, so this is a boundary
    /// check before a query rather than a new source of information.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Point3D::new(self.point.x(), self.point.y(), self.point.z())?;
        Vector3D::new(self.normal.x(), self.normal.y(), self.normal.z())?;
        Ok(())
    }

    /// A point the plane passes through.
    pub const fn point(&self) -> &Point3D {
        &self.point
    }

    /// The plane's (non-unit) normal.
    pub const fn normal(&self) -> &Vector3D {
        &self.normal
    }

    /// Signed distance from `point` to the plane, positive on the side the
    /// normal points toward.
    pub fn signed_distance(&self, point: &Point3D) -> Real {
        self.distance_to_raw(point.as_point())
    }

    pub(crate) fn distance_to_raw(&self, pos: &Point3<Real>) -> Real {
        self.normal.normalized().dot(&(pos - self.point.as_point()))
    }

    /// Classify a point as [`FRONT`], [`BACK`], or [`COPLANAR`] relative to
    /// the plane, treating distances within [`tolerance`] as on the plane.
    ///
    /// The tri-state answer, not a bare sign, is what keeps faces that
    /// merely touch the plane from producing false splits.
    pub fn orient_point(&self, point: &Point3D) -> i8 {
        Self::orient_distance(self.signed_distance(point))
    }

    /// Classify an already-computed signed distance.
    pub fn orient_distance(distance: Real) -> i8 {
        let tol = tolerance();
        if distance > tol {
            FRONT
        } else if distance < -tol {
            BACK
        } else {
            COPLANAR
        }
    }

    /// The same plane with its normal reversed.
    pub fn flipped(&self) -> Plane {
        Plane {
            point: self.point,
            normal: self.normal.flipped(),
        }
    }
}
