use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Request, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    error::SunTimesError,
    model::{Coordinate, SolarTimes},
};

use super::SunTimesProvider;

/// Client for the sunrise-sunset.org JSON API.
#[derive(Debug, Clone)]
pub struct SunriseSunsetProvider {
    base_url: String,
    http: Client,
}

impl SunriseSunsetProvider {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, SunTimesError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SunTimesError::Fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, http })
    }

    fn build_request(&self, coordinate: Coordinate) -> Result<Request, SunTimesError> {
        let lat = coordinate.latitude.to_string();
        let lng = coordinate.longitude.to_string();

        self.http
            .get(&self.base_url)
            .query(&[
                ("lat", lat.as_str()),
                ("lng", lng.as_str()),
                ("date", "today"),
                ("formatted", "0"),
            ])
            .build()
            .map_err(|e| SunTimesError::Fetch(format!("invalid request: {e}")))
    }
}

#[async_trait]
impl SunTimesProvider for SunriseSunsetProvider {
    async fn fetch(&self, coordinate: Coordinate) -> Result<SolarTimes, SunTimesError> {
        let request = self.build_request(coordinate)?;
        info!("Fetching sun times from API: {}", request.url());

        let res = self
            .http
            .execute(request)
            .await
            .map_err(|e| SunTimesError::Fetch(format!("error calling the sun times API: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| SunTimesError::Fetch(format!("failed to read response body: {e}")))?;

        let times = decode_response(status, &body)?;

        info!("Sunrise (UTC): {}, Sunset (UTC): {}", times.sunrise(), times.sunset());
        Ok(times)
    }
}

/// Turn a raw HTTP reply into solar times.
///
/// Expected body: `{"results": {"sunrise": "<ISO8601>", "sunset": "<ISO8601>", ...}, "status": "OK"}`.
pub(crate) fn decode_response(status: StatusCode, body: &str) -> Result<SolarTimes, SunTimesError> {
    if !status.is_success() {
        return Err(SunTimesError::Fetch(format!(
            "non-success status {}: {}",
            status,
            truncate_body(body)
        )));
    }

    let parsed: SsResponse = serde_json::from_str(body)
        .map_err(|e| SunTimesError::Response(format!("unexpected body: {e}")))?;
    debug!("Sun times payload: {parsed:?}");

    if let Some(api_status) = parsed.status.as_deref() {
        if api_status != "OK" {
            return Err(SunTimesError::Response(format!("API reported status '{api_status}'")));
        }
    }

    let results = match parsed.results {
        Some(SsResultsField::Times(results)) if !results.is_empty() => results,
        _ => return Err(SunTimesError::Response("missing 'results'".to_string())),
    };

    let sunrise = parse_field("sunrise", results.sunrise)?;
    let sunset = parse_field("sunset", results.sunset)?;

    SolarTimes::new(sunrise, sunset)
}

#[derive(Debug, Deserialize)]
struct SsResults {
    sunrise: Option<String>,
    sunset: Option<String>,
}

impl SsResults {
    fn is_empty(&self) -> bool {
        self.sunrise.is_none() && self.sunset.is_none()
    }
}

/// The API sends `"results": ""` alongside a failing `status`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SsResultsField {
    Times(SsResults),
    #[allow(dead_code)]
    Other(serde::de::IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct SsResponse {
    status: Option<String>,
    results: Option<SsResultsField>,
}

fn parse_field(field: &'static str, raw: Option<String>) -> Result<DateTime<Utc>, SunTimesError> {
    let raw =
        raw.ok_or_else(|| SunTimesError::Response(format!("missing '{field}' in results")))?;

    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| SunTimesError::Parse { field, value: raw, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let end = (0..=MAX).rev().find(|&i| body.is_char_boundary(i)).unwrap_or(0);
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
