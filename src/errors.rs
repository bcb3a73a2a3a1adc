//! Validation and geometry errors

use crate::float_types::Real;

/// Rejections raised while constructing geometric value types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A point coordinate is NaN or infinite
    #[error("point coordinates ({0}, {1}, {2}) contain a NaN or infinite value")]
    InvalidPointCoordinate(Real, Real, Real),
    /// A vector component is NaN or infinite
    #[error("vector components ({0}, {1}, {2}) contain a NaN or infinite value")]
    InvalidVectorComponent(Real, Real, Real),
    /// All vector components are zero, so it cannot define a direction
    #[error("vector is zero and cannot define a plane orientation")]
    ZeroVector,
    /// A face loop has fewer than the minimal number of vertices
    #[error("face has {0} vertices, at least 3 are required")]
    TooFewVertices(usize),
}

/// Failures surfaced by a cross-section query.
///
/// Geometric ambiguity (the plane missing or merely grazing the solid) is
/// *not* an error; it is reported as an unsuccessful
/// [`IntersectionResult`](crate::result::IntersectionResult). These variants
/// cover malformed input only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Invalid plane or point data reached the splitter
    #[error("invalid geometry input: {0}")]
    Validation(#[from] ValidationError),
    /// A face in the solid cannot form a polygon
    #[error("face {index} is degenerate: {vertex_count} vertices, at least 3 are required")]
    DegenerateFace { index: usize, vertex_count: usize },
}
