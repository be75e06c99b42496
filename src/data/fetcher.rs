use {
    crate::{
        config::{ApiKey, DF, SERVICES},
        data::{
            geocode::lookup_location_name,
            http::HttpGet,
            prayer_api::{FetchError, parse_prayer_response, prayer_query},
        },
        domain::{Coordinates, PrayerPayload, PrayerSession},
    },
    futures::join,
};

/// Builds a [`PrayerSession`] from the geocoding and prayer-time services.
pub struct PrayerDataFetcher<C> {
    client: C,
    api_key: ApiKey,
}

impl<C: HttpGet> PrayerDataFetcher<C> {
    pub fn new(client: C, api_key: ApiKey) -> Self {
        Self { client, api_key }
    }

    /// Runs both lookups concurrently and waits for both to settle.
    ///
    /// The place name is best-effort. Any prayer-time failure fails the whole
    /// session, whatever the geocoder returned.
    pub async fn fetch(&self, coords: Coordinates) -> Result<PrayerSession, FetchError> {
        let (payload, location_name) = join!(
            self.prayer_payload(coords),
            lookup_location_name(&self.client, coords)
        );

        let payload = payload.inspect_err(|e| log::error!("Prayer data fetch failed: {}", e))?;
        if location_name.is_none() {
            log::info!("No place name for {}; showing times without it", coords);
        }
        Ok(PrayerSession::new(payload, location_name))
    }

    async fn prayer_payload(&self, coords: Coordinates) -> Result<PrayerPayload, FetchError> {
        let query = prayer_query(coords, &self.api_key);
        if DF.log_http_requests {
            log::info!("GET {}", SERVICES.prayer.base_url);
        }
        let response = self.client.get(SERVICES.prayer.base_url, &query, &[]).await?;
        parse_prayer_response(&response)
    }
}
