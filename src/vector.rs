//! Validated non-zero direction vector.

use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::Vector3;

/// A direction in model space: finite components, not all zero.
///
/// Used only for orientation (plane normals), so magnitude is irrelevant and
/// the vector is **never normalized implicitly**; callers that need a unit
/// direction use [`normalized`](Vector3D::normalized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3D {
    dir: Vector3<Real>,
}

impl Vector3D {
    /// Create a new [`Vector3D`], rejecting NaN/infinite components and the
    /// zero vector (which cannot define a plane orientation).
    pub fn new(x: Real, y: Real, z: Real) -> Result<Self, ValidationError> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(ValidationError::InvalidVectorComponent(x, y, z));
        }
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return Err(ValidationError::ZeroVector);
        }
        Ok(Vector3D {
            dir: Vector3::new(x, y, z),
        })
    }

    /// The underlying nalgebra vector, verbatim (not normalized).
    pub const fn as_vector(&self) -> &Vector3<Real> {
        &self.dir
    }

    pub fn x(&self) -> Real {
        self.dir.x
    }

    pub fn y(&self) -> Real {
        self.dir.y
    }

    pub fn z(&self) -> Real {
        self.dir.z
    }

    /// Unit vector in this direction.
    pub fn normalized(&self) -> Vector3<Real> {
        self.dir.normalize()
    }

    /// The opposite direction. Negating a valid non-zero vector stays valid.
    pub fn flipped(&self) -> Vector3D {
        Vector3D { dir: -self.dir }
    }
}
