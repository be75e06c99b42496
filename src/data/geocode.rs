//! Reverse geocoding: coordinates to a display name. Failures here never fail a session.

use {
    crate::{
        config::{DF, SERVICES},
        data::http::{HttpGet, HttpResponse},
        domain::Coordinates,
    },
    serde_json::{Map, Value},
};

/// `None` for anything but an object carrying a non-blank `display_name` string.
pub fn parse_location_name(response: &HttpResponse) -> Option<String> {
    if !response.is_success() {
        log::warn!("Reverse geocoding returned HTTP {}", response.status);
        return None;
    }
    // Only an object will do: a derived struct would also accept a JSON array.
    let object = match serde_json::from_slice::<Map<String, Value>>(&response.body) {
        Ok(object) => object,
        Err(e) => {
            log::warn!("Reverse geocoding payload not understood: {}", e);
            return None;
        }
    };
    let name = object.get("display_name").and_then(Value::as_str)?.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

pub async fn lookup_location_name<C: HttpGet>(client: &C, coords: Coordinates) -> Option<String> {
    let (lat, lon) = coords.query_values();
    let query = [
        ("format", "json".to_string()),
        ("lat", lat),
        ("lon", lon),
    ];
    if DF.log_http_requests {
        log::info!("GET {}", SERVICES.geocode.base_url);
    }

    match client
        .get(
            SERVICES.geocode.base_url,
            &query,
            &[("User-Agent", SERVICES.geocode.user_agent)],
        )
        .await
    {
        Ok(response) => parse_location_name(&response),
        Err(e) => {
            log::warn!("Reverse geocoding failed, continuing without a place name: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn reads_display_name() {
        let response = ok(r#"{"place_id":1,"display_name":"Makkah, Saudi Arabia","lat":"21.42"}"#);
        assert_eq!(
            parse_location_name(&response).as_deref(),
            Some("Makkah, Saudi Arabia")
        );
    }

    #[test]
    fn other_shapes_mean_no_name() {
        assert_eq!(parse_location_name(&ok(r#"{"error":"Unable to geocode"}"#)), None);
        assert_eq!(parse_location_name(&ok(r#"{"display_name":42}"#)), None);
        assert_eq!(parse_location_name(&ok(r#"{"display_name":"  "}"#)), None);
        assert_eq!(parse_location_name(&ok("[]")), None);
        assert_eq!(parse_location_name(&ok(r#"["Makkah"]"#)), None);
        assert_eq!(parse_location_name(&ok(r#""Makkah""#)), None);
        assert_eq!(parse_location_name(&ok("<html>")), None);
    }

    #[test]
    fn http_errors_mean_no_name() {
        let response = HttpResponse {
            status: 503,
            body: br#"{"display_name":"stale"}"#.to_vec(),
        };
        assert_eq!(parse_location_name(&response), None);
    }
}
