/// Rotation of the compass face, opposite to the device heading so north stays put in the world.
pub fn dial_rotation(heading: f64) -> f64 {
    -heading
}

/// Rotation of the needle on screen: the bearing corrected by the same heading offset.
pub fn needle_rotation(bearing: f64, heading: f64) -> f64 {
    bearing - heading
}

/// Both screen-space rotations (degrees, clockwise from "up"). Outputs are not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassAngles {
    pub dial: f64,
    pub needle: f64,
}

impl CompassAngles {
    pub fn new(bearing: f64, heading: f64) -> Self {
        Self {
            dial: dial_rotation(heading),
            needle: needle_rotation(bearing, heading),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::angles_equivalent;

    const HEADINGS: [f64; 9] = [0.0, 0.5, 45.0, 90.0, 179.9, 180.0, 270.0, 359.99, 360.0];
    const BEARINGS: [f64; 6] = [0.0, 39.8, 118.97, 180.0, 291.5, 359.0];

    #[test]
    fn rotations_are_exact_identities() {
        for &h in &HEADINGS {
            assert_eq!(dial_rotation(h), -h);
            for &b in &BEARINGS {
                assert_eq!(needle_rotation(b, h), b - h);
                assert_eq!(CompassAngles::new(b, h), CompassAngles { dial: -h, needle: b - h });
            }
        }
    }

    #[test]
    fn needle_is_periodic_in_heading() {
        for &h in &HEADINGS {
            for &b in &BEARINGS {
                let diff = needle_rotation(b, h) - needle_rotation(b, h + 360.0);
                assert!(angles_equivalent(diff, 0.0), "b={b} h={h} diff={diff}");
            }
        }
    }

    #[test]
    fn heading_zero_and_full_turn_render_the_same() {
        let at_zero = CompassAngles::new(118.97, 0.0);
        let at_turn = CompassAngles::new(118.97, 360.0);
        assert!(angles_equivalent(at_zero.dial, at_turn.dial));
        assert!(angles_equivalent(at_zero.needle, at_turn.needle));
    }

    #[test]
    fn mecca_with_zero_bearing_points_straight_up() {
        // Bearing reported for (21.4225, 39.8262) by a stubbed service.
        let angles = CompassAngles::new(0.0, 0.0);
        assert_eq!(angles.needle, 0.0);
    }

    #[test]
    fn without_heading_updates_needle_is_raw_bearing() {
        let heading = 0.0;
        for &b in &BEARINGS {
            let angles = CompassAngles::new(b, heading);
            assert_eq!(angles.dial, 0.0);
            assert_eq!(angles.needle, b);
        }
    }

    #[test]
    fn needle_points_at_bearing_in_world_space() {
        // Screen needle plus device heading gives back the world bearing.
        for &h in &HEADINGS {
            for &b in &BEARINGS {
                let world = needle_rotation(b, h) + h;
                assert!(angles_equivalent(world, b));
            }
        }
    }
}
