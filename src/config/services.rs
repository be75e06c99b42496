/// Reverse-geocoding endpoint (OpenStreetMap Nominatim).
pub struct GeocodeServiceConfig {
    pub base_url: &'static str,
    /// Nominatim's usage policy requires an identifying agent.
    pub user_agent: &'static str,
}

/// Prayer-time endpoint and the fixed calculation parameters sent with every request.
pub struct PrayerServiceConfig {
    pub base_url: &'static str,
    /// Calculation method code (3 = Muslim World League).
    pub method: &'static str,
    /// Jurisprudence school code for Asr (1 = Hanafi).
    pub school: &'static str,
}

pub struct ClientDefaults {
    /// Native only; the browser's fetch applies its own limits.
    pub timeout_ms: u64,
}

pub struct ServicesConfig {
    pub geocode: GeocodeServiceConfig,
    pub prayer: PrayerServiceConfig,
    pub client: ClientDefaults,
}

pub const SERVICES: ServicesConfig = ServicesConfig {
    geocode: GeocodeServiceConfig {
        base_url: "https://nominatim.openstreetmap.org/reverse",
        user_agent: "QiblaTimes/1.0",
    },
    prayer: PrayerServiceConfig {
        base_url: "https://islamicapi.com/api/v1/prayer-time/",
        method: "3",
        school: "1",
    },
    client: ClientDefaults { timeout_ms: 10_000 },
};
