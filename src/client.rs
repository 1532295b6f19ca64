//! Open-Meteo fetch collaborator
//!
//! Thin async client that retrieves the raw forecast document and resolves
//! location names via the Open-Meteo geocoding API. The engine itself never
//! performs I/O; callers drive these futures and hand the resulting
//! [`RawForecastDocument`] to a [`crate::normalize::Normalizer`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::RawForecastDocument;

/// Base URL for the Open-Meteo forecast API
const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Base URL for the Open-Meteo geocoding API
const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// One geocoding match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoMatch {
    /// Place name
    pub name: String,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    /// Country name, if reported
    #[serde(default)]
    pub country: Option<String>,
    /// First-level administrative area, if reported
    #[serde(default)]
    pub admin1: Option<String>,
}

/// Geocoding API response wrapper
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeoMatch>>,
}

/// Client for the Open-Meteo forecast and geocoding APIs
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    timezone: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    /// Creates a new client with the default target timezone.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timezone: "Europe/London".to_string(),
        }
    }

    /// Creates a client backed by a custom HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            timezone: "Europe/London".to_string(),
        }
    }

    /// Sets the timezone the fetched series are expressed in.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Fetches the raw forecast document for the given coordinates.
    ///
    /// Requests one past day plus eight forecast days so the aligner has a
    /// full yesterday window and the outlook extractor a full week after
    /// dropping the past day.
    pub async fn fetch_forecast(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<RawForecastDocument, ClientError> {
        let url = self.forecast_url(lat, lon);
        let response = self.client.get(&url).send().await?;
        let text = response.text().await?;
        let document: RawForecastDocument = serde_json::from_str(&text)?;
        Ok(document)
    }

    /// Searches for locations matching a free-text query.
    ///
    /// Returns up to five matches; a blank query short-circuits to an empty
    /// list without a network round trip.
    pub async fn search_locations(&self, query: &str) -> Result<Vec<GeoMatch>, ClientError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = Self::search_url(query);
        let response = self.client.get(&url).send().await?;
        let text = response.text().await?;
        let parsed: GeocodingResponse = serde_json::from_str(&text)?;
        Ok(parsed.results.unwrap_or_default())
    }

    /// Resolves coordinates back to the nearest named place, if any.
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Option<GeoMatch>, ClientError> {
        let url = format!(
            "{}?latitude={}&longitude={}&count=1&language=en&format=json",
            GEOCODING_BASE_URL, lat, lon
        );
        let response = self.client.get(&url).send().await?;
        let text = response.text().await?;
        let parsed: GeocodingResponse = serde_json::from_str(&text)?;
        Ok(parsed.results.unwrap_or_default().into_iter().next())
    }

    /// Builds the forecast request URL with the full variable set the
    /// normalization engine consumes.
    fn forecast_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}\
             &current=temperature_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m,relative_humidity_2m\
             &hourly=temperature_2m,precipitation_probability,precipitation\
             &minutely_15=precipitation,precipitation_probability\
             &daily=weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,precipitation_probability_max,sunrise,sunset\
             &past_days=1&forecast_days=8&timezone={}",
            FORECAST_BASE_URL, lat, lon, self.timezone
        )
    }

    /// Builds the geocoding search URL for a free-text query.
    fn search_url(query: &str) -> String {
        format!(
            "{}?name={}&count=5&language=en&format=json",
            GEOCODING_BASE_URL,
            urlencoding::encode(query)
        )
    }
}
