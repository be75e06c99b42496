use std::fmt;

/// Islamic lunar calendar date as reported by the prayer service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month, self.day, self.year)
    }
}

/// The day's date in both calendars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInfo {
    pub hijri: HijriDate,
    pub gregorian: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hijri_displays_month_day_year() {
        let date = HijriDate {
            day: "17".into(),
            month: "Rabi al-Awwal".into(),
            year: "1447".into(),
        };
        assert_eq!(date.to_string(), "Rabi al-Awwal 17, 1447");
    }
}
