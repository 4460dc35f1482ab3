//! Default tolerances

/// Tolerance used when none is given
pub const EPSILON: f64 = 0.01;

/// Tolerance for angles in radians
pub const EPSILON_RADIANS: f64 = 1e-10;

/// Tolerance for angles in degrees
pub const EPSILON_DEGREES: f64 = 1e-10;

/// Tolerance for each coordinate of a 2D point
pub const EPSILON_POINT_XY: f64 = 1e-2;

/// Tolerance for distances
pub const EPSILON_DISTANCE: f64 = 1e-2;
