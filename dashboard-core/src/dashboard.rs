//! Assembles every card of the dashboard from one round of fetches.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::{
    builder::{build_current, build_humidity, build_hourly_buckets, build_sibling_cities},
    client::{WeatherSource, fetch_many},
    error::ViewModelError,
    payload::RawForecastPayload,
    view::{
        DisplayCurrent, DisplayHourlyBucket, DisplayHumidity, DisplaySiblingCity,
        HourlyPlaceholders,
    },
};

/// Shown in place of current conditions when the payload can't be read.
pub const MALFORMED_MESSAGE: &str = "could not read weather data";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CurrentState {
    Ready(DisplayCurrent),
    Unavailable { message: String },
}

impl CurrentState {
    pub fn ready(&self) -> Option<&DisplayCurrent> {
        match self {
            CurrentState::Ready(current) => Some(current),
            CurrentState::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// City that was requested.
    pub city: String,
    pub current: CurrentState,
    pub hourly: [DisplayHourlyBucket; 4],
    pub humidity: DisplayHumidity,
    pub siblings: Vec<DisplaySiblingCity>,
}

/// Fetch the main city, the forecast and the sibling cities concurrently and
/// build every card. Never fails: each card has its own fallback.
pub async fn load_dashboard<S, Tz>(
    source: &S,
    city: &str,
    siblings: &[String],
    reference: &DateTime<Tz>,
    placeholders: &HourlyPlaceholders,
) -> DashboardView
where
    S: WeatherSource + ?Sized,
    Tz: TimeZone,
{
    let (main, forecast, sibling_payloads) = tokio::join!(
        source.fetch_weather(city),
        source.fetch_forecast(),
        fetch_many(source, siblings),
    );

    let current = match &main {
        Ok(raw) => match build_current(raw) {
            Ok(current) => CurrentState::Ready(current),
            Err(err) => {
                tracing::warn!("Weather payload for {city} rejected: {err}");
                CurrentState::Unavailable {
                    message: MALFORMED_MESSAGE.to_string(),
                }
            }
        },
        Err(err) if err.downcast_ref::<ViewModelError>().is_some() => {
            tracing::warn!("Weather payload for {city} rejected: {err:#}");
            CurrentState::Unavailable {
                message: MALFORMED_MESSAGE.to_string(),
            }
        }
        Err(err) => {
            tracing::warn!("Fetching weather for {city} failed: {err:#}");
            CurrentState::Unavailable {
                message: format!("{err:#}"),
            }
        }
    };

    let forecast = forecast.unwrap_or_else(|err| {
        tracing::warn!("Fetching forecast failed, showing placeholders: {err:#}");
        RawForecastPayload::default()
    });

    DashboardView {
        city: city.to_string(),
        current,
        hourly: build_hourly_buckets(&forecast, reference, placeholders),
        humidity: build_humidity(main.as_ref().ok()),
        siblings: build_sibling_cities(&sibling_payloads),
    }
}
