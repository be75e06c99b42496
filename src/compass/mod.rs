//! Rotation math for the Qibla compass.
mod angles;

pub use angles::{CompassAngles, dial_rotation, needle_rotation};
