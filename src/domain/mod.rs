// Domain types and value objects
mod angle;
mod calendar;
mod coordinates;
mod prayer;
mod session;

pub use {
    angle::{angles_equivalent, normalize_degrees},
    calendar::{DateInfo, HijriDate},
    coordinates::{CoordinateError, Coordinates},
    prayer::{PrayerName, PrayerTimes},
    session::{PrayerPayload, PrayerSession, QiblaBearing},
};
