use {
    crate::utils::{format_clock, until_next_second},
    chrono::{DateTime, TimeZone},
    std::time::Duration,
};

/// The header clock. Changes its text once per wall-clock second.
#[derive(Debug, Clone)]
pub(crate) struct LiveClock {
    second: i64,
    text: String,
}

impl LiveClock {
    pub(crate) fn new<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            second: now.timestamp(),
            text: format_clock(now),
        }
    }

    /// Advance to `now`. True when a new second started and the text changed.
    pub(crate) fn poll<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool
    where
        Tz::Offset: std::fmt::Display,
    {
        let second = now.timestamp();
        if second == self.second {
            return false;
        }
        self.second = second;
        self.text = format_clock(now);
        true
    }

    /// Delay before the next repaint is due.
    pub(crate) fn next_tick_in<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Duration {
        until_next_second(now)
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}
