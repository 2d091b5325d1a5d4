//! Direction angles between outline points

use kurbo::Point;

/// Tolerance used when comparing angles in degrees
pub const ANGLE_EPSILON: f64 = 1e-6;

/// Direction from `from` to `to` in degrees, normalized to `[0, 360)`
///
/// Returns `None` for coincident points, which have no direction.
pub fn direction_degrees(from: Point, to: Point) -> Option<f64> {
    let delta = to - from;
    if delta.hypot2() == 0.0 {
        return None;
    }
    Some(normalize_degrees(delta.atan2().to_degrees()))
}

/// Wrap any angle in degrees into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Whether two directions are the same, treating 0° and 360° as equal
pub fn same_direction(a: f64, b: f64) -> bool {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    diff.min(360.0 - diff) < ANGLE_EPSILON
}

/// Whether `degrees` is a multiple of 90°
pub fn is_axis_aligned(degrees: f64) -> bool {
    let quarter_turns = degrees / 90.0;
    (quarter_turns - quarter_turns.round()).abs() * 90.0 < ANGLE_EPSILON
}
