//! Serial whole-solid sweep.

use crate::errors::GeometryError;
use crate::plane::Plane;
use crate::solid::Solid;

use super::{FaceSweep, SplitOutcome, misses_bounds, sweep_face};

/// Sweep every face of `solid` against `plane` and decide whether the plane
/// divides the solid.
///
/// The raw point list keeps per-face duplicates (shared edges are emitted
/// once per adjacent face); deduplication is a separate pass. Structural
/// failures abort the whole query — a partial cross-section would be
/// misleading.
pub fn split_solid(solid: &Solid, plane: &Plane) -> Result<SplitOutcome, GeometryError> {
    plane.validate()?;

    if misses_bounds(solid, plane) {
        return Ok(SplitOutcome::no_split());
    }

    let mut merged = FaceSweep::default();
    for (index, face) in solid.faces().iter().enumerate() {
        merged = merged.merge(sweep_face(index, face, plane)?);
    }
    Ok(merged.into_outcome())
}
