//! Plane cross-sections of closed polyhedral solids.
//!
//! Given a solid described by its boundary faces (a watertight shell of
//! planar polygons) and an infinite plane, [`find_intersections`] decides
//! whether the plane passes through the solid's interior and, if so,
//! returns the deduplicated set of points where the plane crosses the
//! boundary.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to sweep faces across worker threads
//!
//! # Example
//! ```
//! use xsect::{Plane, Point3D, Solid, Vector3D, find_intersections};
//!
//! let cube = Solid::cube(10.0);
//! let plane = Plane::new(
//!     Point3D::new(0.0, 0.0, 0.0)?,
//!     Vector3D::new(0.0, 1.0, 0.0)?,
//! );
//! let section = find_intersections(&cube, &plane)?;
//! assert!(section.success());
//! assert_eq!(section.point_count(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod dedup;
pub mod errors;
pub mod float_types;
pub mod plane;
pub mod point;
pub mod result;
pub mod shapes;
pub mod solid;
pub mod split;
pub mod vector;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{GeometryError, ValidationError};
pub use plane::Plane;
pub use point::Point3D;
pub use result::{IntersectionResult, find_intersections};
pub use solid::{Face, Solid};
pub use vector::Vector3D;
