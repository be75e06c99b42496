use crate::domain::{DateInfo, PrayerTimes, normalize_degrees};

/// Degrees clockwise from true north towards the Kaaba, in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QiblaBearing(f64);

impl QiblaBearing {
    /// `None` for NaN or infinite input; anything else is wrapped into range.
    pub fn new(degrees: f64) -> Option<Self> {
        degrees
            .is_finite()
            .then(|| Self(normalize_degrees(degrees)))
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }
}

/// Everything the prayer-time service returns for one position and day.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerPayload {
    pub times: PrayerTimes,
    pub date: DateInfo,
    pub qibla: QiblaBearing,
}

/// One fully-loaded session. Built once both lookups settle; never patched afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerSession {
    pub times: PrayerTimes,
    pub date: DateInfo,
    pub qibla: QiblaBearing,
    pub location_name: Option<String>,
}

impl PrayerSession {
    pub fn new(payload: PrayerPayload, location_name: Option<String>) -> Self {
        Self {
            times: payload.times,
            date: payload.date,
            qibla: payload.qibla,
            location_name,
        }
    }
}
