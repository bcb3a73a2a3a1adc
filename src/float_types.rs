//! Scalar precision selection and the geometric tolerance used across the crate.

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Default absolute tolerance, in model units, below which two signed
/// distances are treated as geometrically equal.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Default absolute tolerance, in model units, below which two signed
/// distances are treated as geometrically equal.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-6;

/// Lazily-initialized tolerance used across the crate.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `XSECT_TOLERANCE` (e.g. `XSECT_TOLERANCE=1e-8 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Returns the current tolerance value.
/// If not set yet, it tries `XSECT_TOLERANCE` (parsed as the active `Real`) and
/// falls back to [`EPSILON`].
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("XSECT_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        EPSILON
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `xsect::float_types::set_tolerance(1e-8);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}
