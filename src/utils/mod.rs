mod time_utils;

pub use time_utils::{TimeUtils, format_clock, until_next_second};
