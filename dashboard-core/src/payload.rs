//! Raw payloads as served by the weather backend.
//!
//! Field names follow the OpenWeather JSON layout; anything not listed here is
//! ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::error::ViewModelError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMain {
    /// Kelvin.
    pub temp: f64,
    /// Kelvin.
    pub feels_like: f64,
    pub humidity: u8,
    /// hPa.
    pub pressure: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCondition {
    /// Primary label, e.g. "Clouds".
    pub main: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWind {
    /// m/s.
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSys {
    pub country: String,
}

/// Current conditions for a single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWeatherPayload {
    pub name: String,
    pub sys: RawSys,
    pub main: RawMain,
    pub weather: Vec<RawCondition>,
    pub wind: RawWind,
    /// Meters. Some stations omit it.
    #[serde(default)]
    pub visibility: Option<u32>,
}

impl RawWeatherPayload {
    pub fn from_json(body: &str) -> Result<Self, ViewModelError> {
        Ok(serde_json::from_str(body)?)
    }

    /// First condition entry, if the provider sent any.
    pub fn primary_condition(&self) -> Option<&RawCondition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastMain {
    /// Kelvin.
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastEntry {
    /// Unix timestamp, seconds.
    pub dt: i64,
    pub main: RawForecastMain,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
}

impl RawForecastEntry {
    /// Primary condition label, or an empty string when absent.
    pub fn condition_label(&self) -> &str {
        self.weather.first().map(|w| w.main.as_str()).unwrap_or("")
    }
}

/// Forecast list in provider order (3-hour steps for OpenWeather).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawForecastPayload {
    #[serde(default)]
    pub list: Vec<RawForecastEntry>,
}

impl RawForecastPayload {
    pub fn from_json(body: &str) -> Result<Self, ViewModelError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELHI: &str = r#"{
        "coord": {"lon": 77.22, "lat": 28.67},
        "weather": [{"id": 721, "main": "Haze", "description": "haze", "icon": "50d"}],
        "main": {"temp": 303.2, "feels_like": 301.9, "temp_min": 303.2, "temp_max": 303.2,
                 "pressure": 1012, "humidity": 28},
        "visibility": 3500,
        "wind": {"speed": 2.57, "deg": 290},
        "sys": {"country": "IN", "sunrise": 1700000000, "sunset": 1700040000},
        "name": "Delhi"
    }"#;

    #[test]
    fn parses_openweather_current_payload() {
        let p = RawWeatherPayload::from_json(DELHI).expect("payload should parse");
        assert_eq!(p.name, "Delhi");
        assert_eq!(p.sys.country, "IN");
        assert_eq!(p.main.humidity, 28);
        assert_eq!(p.main.pressure, 1012);
        assert_eq!(p.visibility, Some(3500));
        assert_eq!(p.primary_condition().map(|c| c.main.as_str()), Some("Haze"));
    }

    #[test]
    fn visibility_is_optional() {
        let body = DELHI.replace("\"visibility\": 3500,", "");
        let p = RawWeatherPayload::from_json(&body).expect("payload should parse");
        assert_eq!(p.visibility, None);
    }

    #[test]
    fn missing_main_is_malformed() {
        let err = RawWeatherPayload::from_json(r#"{"name": "Delhi", "weather": []}"#).unwrap_err();
        assert!(matches!(err, ViewModelError::MalformedPayload(_)));
    }

    #[test]
    fn forecast_entries_tolerate_missing_weather() {
        let f = RawForecastPayload::from_json(r#"{"list": [{"dt": 1, "main": {"temp": 280.0}}]}"#)
            .expect("forecast should parse");
        assert_eq!(f.list.len(), 1);
        assert_eq!(f.list[0].condition_label(), "");
    }
}
