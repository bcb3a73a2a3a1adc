//! Boundary-representation solid: an ordered collection of planar face loops.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::point::Point3D;
use nalgebra::Point3;

/// One planar, outward-oriented boundary polygon of a [`Solid`].
///
/// Vertices form an ordered loop; consecutive vertices (including the
/// wrap-around pair) define the face's edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    vertices: Vec<Point3D>,
}

impl Face {
    /// Create a face from an ordered vertex loop. Fewer than 3 vertices
    /// cannot bound a polygon and are rejected.
    pub fn new(vertices: Vec<Point3D>) -> Result<Self, ValidationError> {
        if vertices.len() < 3 {
            return Err(ValidationError::TooFewVertices(vertices.len()));
        }
        Ok(Face { vertices })
    }

    /// The vertex loop, in order.
    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }
}

/// A closed, manifold polyhedral boundary.
///
/// The crate only reads a solid; it never mutates one. Closedness and
/// manifoldness are the caller's responsibility — the splitter consumes
/// face and vertex data as given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solid {
    faces: Vec<Face>,
}

impl Solid {
    /// Create a solid from its boundary faces.
    pub const fn new(faces: Vec<Face>) -> Self {
        Solid { faces }
    }

    /// The boundary faces, in order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Axis-aligned bounding box over every face vertex, or `None` for a
    /// solid with no vertices.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let mut corners = self
            .faces
            .iter()
            .flat_map(|face| face.vertices().iter())
            .map(Point3D::as_point);

        let first = *corners.next()?;
        Some(corners.fold((first, first), |(min, max), p| {
            (
                Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        }))
    }
}
