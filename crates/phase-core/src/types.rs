// File: crates/phase-core/src/types.rs
// Summary: Shared constants (tolerances, sentinel phase, palette size).

/// Absolute tolerance for grid endpoint checks in the generator.
pub const ENDPOINT_TOL: f64 = 1e-5;
/// Absolute tolerance when grouping samples into temperature bands.
pub const BAND_TOL: f64 = 1e-2;
/// Default tolerance for [`is_close`].
pub const CLOSE_TOL: f64 = 1e-9;

/// Reserved phase name that always takes the last legend slot.
pub const SENTINEL_PHASE: &str = "NO_PHASE_DATA";

/// Number of colors available to a renderer; the legend may not exceed it.
pub const PALETTE_SIZE: usize = 10;

/// Absolute-tolerance float comparison: `|a - b| <= abs_tol`.
#[inline]
pub fn is_close(a: f64, b: f64, abs_tol: f64) -> bool {
    (a - b).abs() <= abs_tol
}
