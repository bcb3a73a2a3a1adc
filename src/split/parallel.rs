//! Rayon-parallel whole-solid sweep.
//!
//! Faces are independent, so the sweep is a map over faces with worker-local
//! accumulation; only the final merge sees all partial results. Collecting
//! before the fold keeps the merged point order identical to the serial
//! sweep, so the deduplicator's first-seen representatives stay
//! deterministic.

use rayon::prelude::*;

use crate::errors::GeometryError;
use crate::plane::Plane;
use crate::solid::Solid;

use super::{FaceSweep, SplitOutcome, misses_bounds, sweep_face};

/// Sweep every face of `solid` against `plane` and decide whether the plane
/// divides the solid.
///
/// Identical contract to the serial version; see `serial::split_solid`.
pub fn split_solid(solid: &Solid, plane: &Plane) -> Result<SplitOutcome, GeometryError> {
    plane.validate()?;

    if misses_bounds(solid, plane) {
        return Ok(SplitOutcome::no_split());
    }

    let sweeps: Vec<FaceSweep> = solid
        .faces()
        .par_iter()
        .enumerate()
        .map(|(index, face)| sweep_face(index, face, plane))
        .collect::<Result<_, GeometryError>>()?;

    Ok(sweeps
        .into_iter()
        .fold(FaceSweep::default(), FaceSweep::merge)
        .into_outcome())
}
