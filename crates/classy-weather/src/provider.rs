//! Open-Meteo geocoding and forecast client.

use async_trait::async_trait;
use classy_core::{NetworkError, WeatherConfig};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{DailySeries, ForecastRequest, GeocodeResult};

const USER_AGENT: &str = concat!("ClassyWeather/", env!("CARGO_PKG_VERSION"));

/// Daily variables requested from the forecast endpoint.
pub const DAILY_VARIABLES: &str = "weathercode,temperature_2m_max,temperature_2m_min";

/// The two lookups a forecast needs.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Search places by free-text name. No match is an empty list, not an error.
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodeResult>, WeatherError>;

    /// Fetch the daily forecast series for a resolved location.
    async fn forecast(&self, request: &ForecastRequest) -> Result<DailySeries, WeatherError>;
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailySeries,
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
        })
    }

    #[instrument(skip(self), level = "debug")]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!("Open-Meteo returned status {}: {}", status, text);
            return Err(NetworkError::ServerError {
                status: status.as_u16(),
                message: text,
            }
            .into());
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| WeatherError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    #[instrument(skip(self), level = "info")]
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodeResult>, WeatherError> {
        let response: GeocodingResponse = self
            .get_json(&self.geocoding_url, &[("name", name.to_string())])
            .await?;

        let results = response.results.unwrap_or_default();
        tracing::debug!("Geocoding '{}' returned {} results", name, results.len());
        Ok(results)
    }

    #[instrument(skip(self), level = "info")]
    async fn forecast(&self, request: &ForecastRequest) -> Result<DailySeries, WeatherError> {
        let query = [
            ("latitude", request.latitude.to_string()),
            ("longitude", request.longitude.to_string()),
            ("timezone", request.timezone.clone()),
            ("daily", DAILY_VARIABLES.to_string()),
        ];

        let response: ForecastResponse = self.get_json(&self.forecast_url, &query).await?;
        tracing::debug!("Forecast returned {} days", response.daily.time.len());
        Ok(response.daily)
    }
}
