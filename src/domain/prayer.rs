use {
    std::collections::BTreeMap,
    strum::IntoEnumIterator,
    strum_macros::{Display, EnumIter},
};

/// Every time-of-day the prayer service reports. `Display` gives the payload key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Imsak,
    Midnight,
    Firstthird,
    Lastthird,
}

impl PrayerName {
    /// The five daily prayers, as opposed to the astronomical or night-division markers.
    pub fn is_obligatory(&self) -> bool {
        matches!(
            self,
            Self::Fajr | Self::Dhuhr | Self::Asr | Self::Maghrib | Self::Isha
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
            Self::Imsak => "Imsak",
            Self::Midnight => "Midnight",
            Self::Firstthird => "First third",
            Self::Lastthird => "Last third",
        }
    }
}

/// Time-of-day strings for every [`PrayerName`]. Always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerTimes {
    times: BTreeMap<PrayerName, String>,
}

impl PrayerTimes {
    /// Build the table by asking `lookup` for each name in order; the first error aborts.
    pub fn try_from_fn<E>(
        mut lookup: impl FnMut(PrayerName) -> Result<String, E>,
    ) -> Result<Self, E> {
        let mut times = BTreeMap::new();
        for name in PrayerName::iter() {
            times.insert(name, lookup(name)?);
        }
        Ok(Self { times })
    }

    pub fn get(&self, name: PrayerName) -> &str {
        self.times.get(&name).map(String::as_str).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, &str)> {
        self.times.iter().map(|(name, time)| (*name, time.as_str()))
    }

    pub fn obligatory(&self) -> impl Iterator<Item = (PrayerName, &str)> {
        self.iter().filter(|(name, _)| name.is_obligatory())
    }

    pub fn auxiliary(&self) -> impl Iterator<Item = (PrayerName, &str)> {
        self.iter().filter(|(name, _)| !name.is_obligatory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PrayerTimes {
        PrayerTimes::try_from_fn::<()>(|name| Ok(format!("{}-time", name))).unwrap()
    }

    #[test]
    fn display_matches_payload_keys() {
        assert_eq!(PrayerName::Fajr.to_string(), "Fajr");
        assert_eq!(PrayerName::Firstthird.to_string(), "Firstthird");
        assert_eq!(PrayerName::Lastthird.label(), "Last third");
        assert_eq!(PrayerName::iter().count(), 11);
    }

    #[test]
    fn splits_obligatory_from_auxiliary() {
        let times = sample();
        let obligatory: Vec<_> = times.obligatory().map(|(n, _)| n).collect();
        assert_eq!(
            obligatory,
            vec![
                PrayerName::Fajr,
                PrayerName::Dhuhr,
                PrayerName::Asr,
                PrayerName::Maghrib,
                PrayerName::Isha
            ]
        );
        assert_eq!(times.auxiliary().count(), 6);
        assert_eq!(times.get(PrayerName::Isha), "Isha-time");
    }

    #[test]
    fn lookup_failure_aborts_construction() {
        let result = PrayerTimes::try_from_fn(|name| {
            if name == PrayerName::Asr {
                Err(name)
            } else {
                Ok("00:00".to_string())
            }
        });
        assert_eq!(result, Err(PrayerName::Asr));
    }
}
