//! Face and solid splitting against a plane.
//!
//! [`split_face`] walks one face's edge loop and emits the raw points where
//! edges cross (or touch) the plane. [`split_solid`] sweeps every face of a
//! solid, concatenates the raw points, and decides whether the plane truly
//! divides the solid. The sweep comes in serial and rayon-parallel flavors
//! with identical signatures, selected by the `parallel` feature.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::plane::{BACK, COPLANAR, FRONT, Plane, SPANNING};
use crate::point::Point3D;
use crate::solid::{Face, Solid};

#[cfg(not(feature = "parallel"))]
mod serial;
#[cfg(not(feature = "parallel"))]
pub use serial::split_solid;

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::split_solid;

/// Raw outcome of sweeping a whole solid: candidate points before
/// deduplication, plus the strict-side evidence for the split decision.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome {
    /// Concatenated per-face crossing points, not yet deduplicated.
    pub points: Vec<Point3D>,
    /// Whether some boundary vertex lies strictly in front *and* some other
    /// lies strictly behind the plane. Only then does the plane divide the
    /// solid; coincidental on-plane points from a grazing plane do not.
    pub divides: bool,
}

impl SplitOutcome {
    pub(crate) const fn no_split() -> Self {
        SplitOutcome {
            points: Vec::new(),
            divides: false,
        }
    }
}

/// Per-face partial sweep result, merged across faces (or rayon workers).
#[derive(Debug, Clone, Default)]
pub(crate) struct FaceSweep {
    pub points: Vec<Point3D>,
    pub saw_front: bool,
    pub saw_back: bool,
}

impl FaceSweep {
    pub fn merge(mut self, other: FaceSweep) -> FaceSweep {
        self.points.extend(other.points);
        self.saw_front |= other.saw_front;
        self.saw_back |= other.saw_back;
        self
    }

    pub fn into_outcome(self) -> SplitOutcome {
        SplitOutcome {
            points: self.points,
            divides: self.saw_front && self.saw_back,
        }
    }
}

/// Emit the points where `face`'s boundary meets `plane`.
///
/// Each vertex classifying on the plane is emitted verbatim; each edge whose
/// endpoints classify strictly to opposite sides is interpolated at the
/// signed-distance root `t = da / (da - db)`. A face entirely to one side
/// emits nothing. Output is ordered along the loop but not deduplicated:
/// 0 points for an untouched face, typically 2 for a cleanly cut convex
/// face, more for non-convex faces with multiple crossings.
pub fn split_face(face: &Face, plane: &Plane) -> Vec<Point3D> {
    crossings(face.vertices(), plane).points
}

fn crossings(vertices: &[Point3D], plane: &Plane) -> FaceSweep {
    let distances: Vec<Real> = vertices
        .iter()
        .map(|vertex| plane.signed_distance(vertex))
        .collect();
    let types: Vec<i8> = distances.iter().map(|&d| Plane::orient_distance(d)).collect();

    let mut sweep = FaceSweep {
        points: Vec::new(),
        saw_front: types.iter().any(|&t| t == FRONT),
        saw_back: types.iter().any(|&t| t == BACK),
    };

    // Strictly on one side, not even a touching vertex: no boundary contact.
    // A face folding to FRONT/BACK may still carry on-plane vertices, and
    // those are intersection points in their own right.
    if types.iter().all(|&t| t == FRONT) || types.iter().all(|&t| t == BACK) {
        return sweep;
    }

    let vcount = vertices.len();
    for i in 0..vcount {
        // j is the vertex following i, wrapping past the last vertex
        let j = (i + 1) % vcount;

        // An on-plane vertex already is the intersection; emit it verbatim
        // rather than interpolating across it.
        if types[i] == COPLANAR {
            sweep.points.push(vertices[i]);
        }

        // Edge with strictly opposite endpoints: interpolate at the root.
        // SPANNING endpoints sit strictly beyond the tolerance on opposite
        // sides, so |denom| > 2x tolerance; the check only bars division by
        // an exact zero.
        if (types[i] | types[j]) == SPANNING {
            let denom = distances[i] - distances[j];
            if denom != 0.0 {
                let t = distances[i] / denom;
                sweep.points.push(vertices[i].interpolate(&vertices[j], t));
            }
        }
    }

    sweep
}

/// Sweep one face for the solid splitter, rejecting loops a [`Face`] should
/// never carry (the check is kept as a boundary guard, matching the plane's
/// own re-validation).
pub(crate) fn sweep_face(
    index: usize,
    face: &Face,
    plane: &Plane,
) -> Result<FaceSweep, GeometryError> {
    let vertex_count = face.vertices().len();
    if vertex_count < 3 {
        return Err(GeometryError::DegenerateFace {
            index,
            vertex_count,
        });
    }
    Ok(crossings(face.vertices(), plane))
}

/// True when every corner of the solid's bounding box sits strictly on one
/// side of the plane, so no face can touch it.
pub(crate) fn misses_bounds(solid: &Solid, plane: &Plane) -> bool {
    let Some((min, max)) = solid.bounding_box() else {
        return true;
    };

    let mut saw_front = false;
    let mut saw_back = false;
    for &x in &[min.x, max.x] {
        for &y in &[min.y, max.y] {
            for &z in &[min.z, max.z] {
                match Plane::orient_distance(
                    plane.distance_to_raw(&nalgebra::Point3::new(x, y, z)),
                ) {
                    FRONT => saw_front = true,
                    BACK => saw_back = true,
                    // A corner on the plane: the box is touched, no early out.
                    _ => return false,
                }
            }
        }
    }
    saw_front != saw_back
}
