use {
    chrono::{DateTime, TimeZone, Timelike},
    std::time::Duration,
};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: u64 = 1000;
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";
}

/// Wall-clock rendering used by the header clock, e.g. `18:02:07`.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(TimeUtils::CLOCK_FORMAT).to_string()
}

/// Time left until the next whole second.
pub fn until_next_second<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    // nanosecond() exceeds 999_999_999 during a leap second
    let into_second = u64::from(now.nanosecond() % 1_000_000_000) / 1_000_000;
    Duration::from_millis(TimeUtils::MS_IN_S - into_second)
}

#[cfg(test)]
mod tests {
    use {super::*, chrono::Utc};

    #[test]
    fn formats_hours_minutes_seconds() {
        let t = Utc.with_ymd_and_hms(2026, 10, 19, 18, 2, 7).unwrap();
        assert_eq!(format_clock(&t), "18:02:07");
    }

    #[test]
    fn waits_for_the_remainder_of_the_second() {
        let t = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
        assert_eq!(until_next_second(&t), Duration::from_millis(750));
        let on_boundary = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(until_next_second(&on_boundary), Duration::from_millis(1000));
    }
}
