use std::{fmt::Debug, time::Duration};

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Config,
    payload::{RawForecastPayload, RawWeatherPayload},
};

/// Anything that can hand out raw weather payloads.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &str) -> Result<RawWeatherPayload>;

    async fn fetch_forecast(&self) -> Result<RawForecastPayload>;
}

/// Client for the dashboard backend (`/api/weather`, `/api/forecast`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_body(&self, path: &str, query: &[(&str, &str)], what: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to send {what} request to {url}"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "{what} request failed with status {status}: {}",
                error_message(&body),
            ));
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherSource for ApiClient {
    async fn fetch_weather(&self, city: &str) -> Result<RawWeatherPayload> {
        tracing::debug!("Fetching current weather for {city}");

        let body = self.get_body("/api/weather", &[("city", city)], "Weather").await?;

        RawWeatherPayload::from_json(&body)
            .with_context(|| format!("Failed to parse weather JSON for {city}"))
    }

    async fn fetch_forecast(&self) -> Result<RawForecastPayload> {
        tracing::debug!("Fetching forecast");

        let body = self.get_body("/api/forecast", &[], "Forecast").await?;

        RawForecastPayload::from_json(&body).context("Failed to parse forecast JSON")
    }
}

/// Fetch several cities concurrently. Order matches `cities`; a failed fetch
/// becomes `None` and does not affect the others.
pub async fn fetch_many<S>(source: &S, cities: &[String]) -> Vec<Option<RawWeatherPayload>>
where
    S: WeatherSource + ?Sized,
{
    let fetches = cities.iter().map(|city| async move {
        match source.fetch_weather(city).await {
            Ok(payload) => Some(payload),
            Err(err) => {
                tracing::warn!("Fetching weather for {city} failed: {err:#}");
                None
            }
        }
    });

    join_all(fetches).await
}

/// The backend reports failures as `{"message": "..."}`.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| "Failed to fetch weather data".to_string())
}
