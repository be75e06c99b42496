mod fetcher;
mod geocode;
mod http;
mod prayer_api;

pub use {
    fetcher::PrayerDataFetcher,
    geocode::{lookup_location_name, parse_location_name},
    http::{HttpGet, HttpResponse, Query, ReqwestClient, TransportError},
    prayer_api::{FetchError, ParseError, parse_prayer_response, prayer_query},
};

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use http::fake;
#[cfg(test)]
pub(crate) use prayer_api::fixtures;
