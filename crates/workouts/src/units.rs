//! Measurement units shared by every workout calculation.

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour.
pub const MIN_IN_H: f64 = 60.0;

/// Default distance covered by one step, in meters.
pub const LEN_STEP_M: f64 = 0.65;
