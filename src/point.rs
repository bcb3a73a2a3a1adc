//! Validated 3D point value type.

use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::Point3;

/// A position in model space with finite coordinates.
///
/// Construction rejects NaN and infinite values, so every `Point3D` held by
/// a [`Face`](crate::solid::Face) or returned in a result is usable in
/// arithmetic without re-checking.
///
/// Equality is exact-value equality of the stored coordinates. There is no
/// `Eq`/`Hash` implementation and no tolerance in `==`; tolerance merging is
/// an explicit clustering pass in [`dedup`](crate::dedup), never a property
/// of the type itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pos: Point3<Real>,
}

impl Point3D {
    /// Create a new [`Point3D`], rejecting NaN/infinite coordinates.
    pub fn new(x: Real, y: Real, z: Real) -> Result<Self, ValidationError> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(ValidationError::InvalidPointCoordinate(x, y, z));
        }
        Ok(Point3D {
            pos: Point3::new(x, y, z),
        })
    }

    /// Validate and wrap an existing nalgebra point.
    pub fn from_point(pos: Point3<Real>) -> Result<Self, ValidationError> {
        Self::new(pos.x, pos.y, pos.z)
    }

    /// The underlying nalgebra point.
    pub const fn as_point(&self) -> &Point3<Real> {
        &self.pos
    }

    pub fn x(&self) -> Real {
        self.pos.x
    }

    pub fn y(&self) -> Real {
        self.pos.y
    }

    pub fn z(&self) -> Real {
        self.pos.z
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    pub fn interpolate(&self, other: &Point3D, t: Real) -> Point3D {
        // p(t) = p0 + t * (p1 - p0); finite endpoints and finite t keep it finite
        Point3D {
            pos: self.pos + (other.pos - self.pos) * t,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point3D) -> Real {
        (other.pos - self.pos).norm()
    }
}
