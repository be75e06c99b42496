//! Prayer-time service: request parameters and the typed decode of its JSON envelope.
//!
//! The payload is decoded in two passes. The envelope and every nested object
//! deserialize into all-`Option` wire structs, so a missing field never aborts
//! serde. [`WireData::validate`] then walks the structure and names the first
//! missing or invalid field.

use {
    crate::{
        config::{ApiKey, SERVICES},
        data::http::{HttpResponse, TransportError},
        domain::{Coordinates, DateInfo, HijriDate, PrayerPayload, PrayerTimes, QiblaBearing},
    },
    serde::Deserialize,
    std::collections::HashMap,
    thiserror::Error,
};

const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("unexpected payload shape: {0}")]
    Malformed(String),
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("invalid value for `{field}`: {reason}")]
    InvalidField { field: String, reason: String },
}

/// Why the prayer-time leg failed. Every variant is fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("prayer service answered HTTP {0}")]
    HttpStatus(u16),
    #[error("prayer service payload rejected: {0}")]
    Parse(#[from] ParseError),
    #[error("prayer service reported failure: {}", .message.as_deref().unwrap_or("Unknown error"))]
    Rejected { message: Option<String> },
}

/// Query for one position with the fixed method and school codes.
pub fn prayer_query(coords: Coordinates, api_key: &ApiKey) -> Vec<(&'static str, String)> {
    let (lat, lon) = coords.query_values();
    vec![
        ("lat", lat),
        ("lon", lon),
        ("method", SERVICES.prayer.method.to_string()),
        ("school", SERVICES.prayer.school.to_string()),
        ("api_key", api_key.expose().to_string()),
    ]
}

#[derive(Deserialize)]
struct Envelope {
    status: Option<String>,
    message: Option<String>,
    data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct WireData {
    times: Option<HashMap<String, Option<String>>>,
    date: Option<WireDate>,
    qibla: Option<WireQibla>,
}

#[derive(Deserialize)]
struct WireDate {
    hijri: Option<WireHijri>,
    gregorian: Option<WireGregorian>,
}

#[derive(Deserialize)]
struct WireHijri {
    date: Option<String>,
    month: Option<WireMonth>,
    year: Option<Loose>,
}

#[derive(Deserialize)]
struct WireMonth {
    en: Option<String>,
}

#[derive(Deserialize)]
struct WireGregorian {
    date: Option<String>,
}

#[derive(Deserialize)]
struct WireQibla {
    direction: Option<WireDirection>,
}

#[derive(Deserialize)]
struct WireDirection {
    degrees: Option<f64>,
}

/// The service has sent years both as `"1447"` and `1447`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Number(i64),
}

impl Loose {
    fn into_string(self) -> String {
        match self {
            Loose::Text(s) => s,
            Loose::Number(n) => n.to_string(),
        }
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ParseError> {
    value.ok_or_else(|| ParseError::MissingField(field.to_owned()))
}

fn non_blank(value: Option<String>, field: &str) -> Result<String, ParseError> {
    let value = required(value, field)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidField {
            field: field.to_owned(),
            reason: "empty".to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

/// Day component of a `YYYY-MM-DD` Hijri date string.
fn hijri_day(date: &str) -> Result<String, ParseError> {
    let parts: Vec<&str> = date.split('-').map(str::trim).collect();
    match parts.as_slice() {
        [_, _, day] if !day.is_empty() => Ok(day.to_string()),
        _ => Err(ParseError::InvalidField {
            field: "data.date.hijri.date".to_owned(),
            reason: format!("expected three '-' separated parts, got {date:?}"),
        }),
    }
}

impl WireData {
    fn validate(self) -> Result<PrayerPayload, ParseError> {
        let mut wire_times = required(self.times, "data.times")?;
        let times = PrayerTimes::try_from_fn(|name| {
            let key = name.to_string();
            non_blank(
                wire_times.remove(&key).flatten(),
                &format!("data.times.{key}"),
            )
        })?;

        let date = required(self.date, "data.date")?;
        let hijri = required(date.hijri, "data.date.hijri")?;
        let hijri_date = non_blank(hijri.date, "data.date.hijri.date")?;
        let month = required(hijri.month, "data.date.hijri.month")?;
        let hijri = HijriDate {
            day: hijri_day(&hijri_date)?,
            month: non_blank(month.en, "data.date.hijri.month.en")?,
            year: non_blank(
                hijri.year.map(Loose::into_string),
                "data.date.hijri.year",
            )?,
        };
        let gregorian = required(date.gregorian, "data.date.gregorian")?;
        let gregorian = non_blank(gregorian.date, "data.date.gregorian.date")?;

        let qibla = required(self.qibla, "data.qibla")?;
        let direction = required(qibla.direction, "data.qibla.direction")?;
        let degrees = required(direction.degrees, "data.qibla.direction.degrees")?;
        let qibla = QiblaBearing::new(degrees).ok_or_else(|| ParseError::InvalidField {
            field: "data.qibla.direction.degrees".to_owned(),
            reason: "not a finite number".to_owned(),
        })?;

        Ok(PrayerPayload {
            times,
            date: DateInfo { hijri, gregorian },
            qibla,
        })
    }
}

/// Decode a prayer-service response. A non-`"success"` status is a [`FetchError::Rejected`]
/// even when the HTTP status was 200.
pub fn parse_prayer_response(response: &HttpResponse) -> Result<PrayerPayload, FetchError> {
    // Derived structs also accept JSON arrays, so the object shape is checked first.
    let object: serde_json::Map<String, serde_json::Value> =
        match serde_json::from_slice::<serde_json::Value>(&response.body) {
            Ok(serde_json::Value::Object(object)) => object,
            Ok(_) | Err(_) if !response.is_success() => {
                return Err(FetchError::HttpStatus(response.status));
            }
            Ok(_) => return Err(ParseError::Malformed("expected a JSON object".into()).into()),
            Err(e) => return Err(ParseError::InvalidJson(e.to_string()).into()),
        };
    let envelope: Envelope = serde_json::from_value(serde_json::Value::Object(object))
        .map_err(|e| ParseError::Malformed(e.to_string()))?;

    if envelope.status.as_deref() != Some(SUCCESS_STATUS) {
        return Err(FetchError::Rejected {
            message: envelope.message.filter(|m| !m.trim().is_empty()),
        });
    }

    let data = required(envelope.data, "data")?;
    if !data.is_object() {
        return Err(ParseError::InvalidField {
            field: "data".to_owned(),
            reason: "not an object".to_owned(),
        }
        .into());
    }
    let wire: WireData =
        serde_json::from_value(data).map_err(|e| ParseError::Malformed(e.to_string()))?;
    Ok(wire.validate()?)
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Canned payloads shared by parser and fetcher tests.

    pub(crate) const SUCCESS_BODY: &str = r#"{
        "code": 200,
        "status": "success",
        "data": {
            "times": {
                "Fajr": "04:21", "Sunrise": "05:42", "Dhuhr": "11:52", "Asr": "15:57",
                "Sunset": "18:02", "Maghrib": "18:02", "Isha": "19:18", "Imsak": "04:11",
                "Midnight": "23:52", "Firstthird": "21:55", "Lastthird": "01:49"
            },
            "date": {
                "readable": "19 Oct 2026",
                "timestamp": "1792396800",
                "hijri": { "date": "1448-05-08", "month": { "number": 5, "en": "Jumada al-Ula" }, "year": "1448" },
                "gregorian": { "date": "19-10-2026" }
            },
            "qibla": { "direction": { "degrees": 118.97, "from": "North", "clockwise": true } }
        }
    }"#;

    pub(crate) fn success_with_bearing(degrees: f64) -> String {
        SUCCESS_BODY.replace("118.97", &degrees.to_string())
    }

    pub(crate) const ERROR_BODY: &str =
        r#"{ "code": 401, "status": "error", "message": "Invalid API key" }"#;
}
