//! Implements the `WeatherService` trait against the GeoNames web services.
//!
//! Two endpoints are used:
//!
//! | Endpoint                 | Query                               | Payload key          |
//! |--------------------------|-------------------------------------|----------------------|
//! | `postalCodeSearchJSON`   | `username`, `postalcode`, `country` | `postalCodes`        |
//! | `findNearByWeatherJSON`  | `lat`, `lng`, `username`            | `weatherObservation` |
//!
//! GeoNames reports failures in-band as `{"status": {"message", "value"}}`,
//! usually with HTTP 200, so every payload is checked for a status block.
//! Numeric fields arrive as JSON numbers or as strings (`"windSpeed": "09"`).

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::{LookupError, Stage};
use crate::models::{Location, WeatherReading};
use crate::service::WeatherService;
use crate::zip::PostalCode;

pub const DEFAULT_BASE_URL: &str = "http://api.geonames.org";
pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_USERNAME: &str = "demo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Readings outside these ranges are treated as garbage from the service.
const MAX_ABS_TEMPERATURE_C: Decimal = Decimal::from_parts(200, 0, 0, false, 0);
const MAX_WIND_SPEED_MPH: Decimal = Decimal::from_parts(500, 0, 0, false, 0);
const FULL_CIRCLE_DEG: Decimal = Decimal::from_parts(360, 0, 0, false, 0);

const POSTAL_CODE_SEARCH: &str = "postalCodeSearchJSON";
const NEARBY_WEATHER: &str = "findNearByWeatherJSON";

/// Connection settings for the GeoNames services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoNamesConfig {
    pub base_url: String,
    pub username: String,
    /// ISO country code used to scope postal code searches.
    pub country: String,
    /// Per-request timeout; 0 disables it.
    pub timeout_secs: u64,
}

impl Default for GeoNamesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeoNamesConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// HTTP client for GeoNames.
pub struct GeoNamesClient {
    config: GeoNamesConfig,
    http: reqwest::Client,
}

impl GeoNamesClient {
    pub fn new(config: GeoNamesConfig) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| LookupError::Configuration(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeoNamesConfig {
        &self.config
    }

    fn endpoint(
        &self,
        name: &str,
    ) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), name)
    }

    /// GETs `endpoint` and returns the body of a successful response.
    async fn fetch(
        &self,
        stage: Stage,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<String, LookupError> {
        let url = self.endpoint(endpoint);
        debug!(%stage, %url, "sending request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| LookupError::upstream(stage, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::upstream(stage, format!("HTTP status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| LookupError::upstream(stage, format!("unreadable response: {e}")))
    }
}

#[async_trait]
impl WeatherService for GeoNamesClient {
    async fn locate(
        &self,
        postal_code: &PostalCode,
    ) -> Result<Location, LookupError> {
        let query = [
            ("username", self.config.username.clone()),
            ("postalcode", postal_code.to_string()),
            ("country", self.config.country.clone()),
        ];
        let body = self.fetch(Stage::Geocode, POSTAL_CODE_SEARCH, &query).await?;
        parse_location(&body)
    }

    async fn observe(
        &self,
        location: &Location,
    ) -> Result<WeatherReading, LookupError> {
        let query = [
            ("lat", location.latitude.to_string()),
            ("lng", location.longitude.to_string()),
            ("username", self.config.username.clone()),
        ];
        let body = self.fetch(Stage::Weather, NEARBY_WEATHER, &query).await?;
        parse_observation(&body)
    }
}

// ─── wire format ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ServiceStatus {
    #[serde(default)]
    message: String,
    #[serde(default)]
    value: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostalCodeSearch {
    #[serde(default)]
    postal_codes: Vec<PostalCodeEntry>,
    status: Option<ServiceStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostalCodeEntry {
    place_name: String,
    #[serde(default)]
    admin_code1: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    lat: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    lng: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NearbyWeather {
    weather_observation: Option<Observation>,
    status: Option<ServiceStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Observation {
    #[serde(deserialize_with = "deserialize_decimal")]
    temperature: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    wind_speed: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    wind_direction: Decimal,
}

/// Numbers are read through their textual form so `43.0775` stays exact.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    String(String),
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n.to_string(),
        NumberOrString::String(s) => s,
    };
    let trimmed = text.trim();
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(serde::de::Error::custom)
}

fn status_error(
    stage: Stage,
    status: ServiceStatus,
) -> LookupError {
    warn!(%stage, code = ?status.value, message = %status.message, "service reported an error");
    LookupError::upstream(stage, status.message)
}

/// Extracts the first match from a `postalCodeSearchJSON` payload.
pub fn parse_location(body: &str) -> Result<Location, LookupError> {
    let search: PostalCodeSearch = serde_json::from_str(body)
        .map_err(|e| LookupError::upstream(Stage::Geocode, format!("malformed response: {e}")))?;

    if let Some(status) = search.status {
        return Err(status_error(Stage::Geocode, status));
    }

    let entry = search
        .postal_codes
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::upstream(Stage::Geocode, "no matching postal codes"))?;

    Ok(Location {
        place_name: entry.place_name,
        region_code: entry.admin_code1,
        latitude: entry.lat,
        longitude: entry.lng,
    })
}

/// Extracts the observation from a `findNearByWeatherJSON` payload.
pub fn parse_observation(body: &str) -> Result<WeatherReading, LookupError> {
    let weather: NearbyWeather = serde_json::from_str(body)
        .map_err(|e| LookupError::upstream(Stage::Weather, format!("malformed response: {e}")))?;

    if let Some(status) = weather.status {
        return Err(status_error(Stage::Weather, status));
    }

    let observation = weather
        .weather_observation
        .ok_or_else(|| LookupError::upstream(Stage::Weather, "no weather observation"))?;

    check_observation(&observation)?;

    Ok(WeatherReading {
        temperature_c: observation.temperature,
        wind_speed_mph: observation.wind_speed,
        wind_direction_deg: observation.wind_direction,
    })
}

fn check_observation(observation: &Observation) -> Result<(), LookupError> {
    let out_of_range = |field: &str, value: Decimal| {
        warn!(field, %value, "observation out of range");
        LookupError::upstream(Stage::Weather, format!("{field} out of range: {value}"))
    };

    if observation.temperature.abs() > MAX_ABS_TEMPERATURE_C {
        return Err(out_of_range("temperature", observation.temperature));
    }
    if observation.wind_speed < Decimal::ZERO || observation.wind_speed > MAX_WIND_SPEED_MPH {
        return Err(out_of_range("windSpeed", observation.wind_speed));
    }
    if observation.wind_direction < Decimal::ZERO || observation.wind_direction > FULL_CIRCLE_DEG {
        return Err(out_of_range("windDirection", observation.wind_direction));
    }
    Ok(())
}
