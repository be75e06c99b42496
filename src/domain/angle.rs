/// Full turn in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Tolerance used when comparing angles that went through float arithmetic.
const ANGLE_EPSILON: f64 = 1e-9;

/// Wrap any finite angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// True when `a` and `b` describe the same direction (0 and 360 are the same angle).
pub fn angles_equivalent(a: f64, b: f64) -> bool {
    let diff = normalize_degrees(a - b);
    diff < ANGLE_EPSILON || FULL_TURN - diff < ANGLE_EPSILON
}
