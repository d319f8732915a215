//! Symbolic keys picked by keyword matching on condition labels and city names.
//!
//! Every picker here is total: unmatched input maps to a fixed default.

use serde::{Deserialize, Serialize};

use crate::view::Bucket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconToken {
    Sun,
    Moon,
    Cloud,
    Rain,
    Snow,
    Storm,
    Fog,
    PartlyCloudy,
}

impl IconToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconToken::Sun => "sun",
            IconToken::Moon => "moon",
            IconToken::Cloud => "cloud",
            IconToken::Rain => "rain",
            IconToken::Snow => "snow",
            IconToken::Storm => "storm",
            IconToken::Fog => "fog",
            IconToken::PartlyCloudy => "partly_cloudy",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconToken::Sun => "☀️",
            IconToken::Moon => "🌙",
            IconToken::Cloud => "☁️",
            IconToken::Rain => "🌧️",
            IconToken::Snow => "❄️",
            IconToken::Storm => "⛈️",
            IconToken::Fog => "🌫️",
            IconToken::PartlyCloudy => "🌤️",
        }
    }
}

impl std::fmt::Display for IconToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientToken {
    Paris,
    Dubai,
    Seoul,
    Rio,
    Default,
}

impl GradientToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientToken::Paris => "paris",
            GradientToken::Dubai => "dubai",
            GradientToken::Seoul => "seoul",
            GradientToken::Rio => "rio",
            GradientToken::Default => "default",
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            GradientToken::Paris => "linear-gradient(to right, #6a11cb, #2575fc)",
            GradientToken::Dubai => "linear-gradient(to right, #f12711, #f5af19)",
            GradientToken::Seoul => "linear-gradient(to right, #11998e, #38ef7d)",
            GradientToken::Rio => "linear-gradient(to right, #0082c8, #0082c8, #92fe9d)",
            GradientToken::Default => "linear-gradient(to right, #4facfe, #00f2fe)",
        }
    }
}

impl std::fmt::Display for GradientToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key into the static animation asset set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationToken {
    Sunny,
    Cloudy,
    Rainy,
}

impl AnimationToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationToken::Sunny => "sunny",
            AnimationToken::Cloudy => "cloudy",
            AnimationToken::Rainy => "rainy",
        }
    }

    pub fn asset_path(&self) -> String {
        format!("/animations/{}.json", self.as_str())
    }
}

impl std::fmt::Display for AnimationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Icon for a condition label. Keywords are tried in a fixed order.
pub fn pick_icon(condition_label: &str) -> IconToken {
    let label = condition_label.to_lowercase();

    if contains_any(&label, &["clear", "sunny"]) {
        IconToken::Sun
    } else if label.contains("cloud") {
        IconToken::Cloud
    } else if contains_any(&label, &["rain", "shower", "drizzle"]) {
        IconToken::Rain
    } else if label.contains("snow") {
        IconToken::Snow
    } else if label.contains("thunder") {
        IconToken::Storm
    } else if contains_any(&label, &["fog", "mist"]) {
        IconToken::Fog
    } else {
        IconToken::PartlyCloudy
    }
}

/// Like [`pick_icon`], but a clear night shows the moon.
pub fn pick_bucket_icon(condition_label: &str, bucket: Bucket) -> IconToken {
    match pick_icon(condition_label) {
        IconToken::Sun if bucket == Bucket::Night => IconToken::Moon,
        icon => icon,
    }
}

pub fn pick_gradient(city_name: &str) -> GradientToken {
    let city = city_name.to_lowercase();

    if city.contains("paris") {
        GradientToken::Paris
    } else if city.contains("dubai") {
        GradientToken::Dubai
    } else if city.contains("seoul") {
        GradientToken::Seoul
    } else if city.contains("rio") {
        GradientToken::Rio
    } else {
        GradientToken::Default
    }
}

pub fn pick_animation(condition_label: &str) -> AnimationToken {
    let label = condition_label.to_lowercase();

    if label.contains("clear") {
        AnimationToken::Sunny
    } else if label.contains("cloud") {
        AnimationToken::Cloudy
    } else if contains_any(&label, &["rain", "drizzle"]) {
        AnimationToken::Rainy
    } else {
        AnimationToken::Cloudy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_keywords() {
        assert_eq!(pick_icon("Clear"), IconToken::Sun);
        assert_eq!(pick_icon("Clouds"), IconToken::Cloud);
        assert_eq!(pick_icon("Rain"), IconToken::Rain);
        assert_eq!(pick_icon("Drizzle"), IconToken::Rain);
        assert_eq!(pick_icon("Snow"), IconToken::Snow);
        assert_eq!(pick_icon("Thunderstorm"), IconToken::Storm);
        assert_eq!(pick_icon("Mist"), IconToken::Fog);
        assert_eq!(pick_icon("Fog"), IconToken::Fog);
    }

    #[test]
    fn icon_defaults_on_unknown_or_empty_label() {
        assert_eq!(pick_icon("Haze"), IconToken::PartlyCloudy);
        assert_eq!(pick_icon(""), IconToken::PartlyCloudy);
    }

    #[test]
    fn earlier_keyword_wins() {
        // "cloud" is checked before "rain".
        assert_eq!(pick_icon("rain clouds"), IconToken::Cloud);
    }

    #[test]
    fn clear_night_shows_moon() {
        assert_eq!(pick_bucket_icon("Clear", Bucket::Night), IconToken::Moon);
        assert_eq!(pick_bucket_icon("Clear", Bucket::Evening), IconToken::Sun);
        assert_eq!(pick_bucket_icon("Clouds", Bucket::Night), IconToken::Cloud);
    }

    #[test]
    fn gradient_is_case_insensitive() {
        assert_eq!(pick_gradient("Paris, FR"), pick_gradient("paris"));
        assert_eq!(pick_gradient("PARIS"), GradientToken::Paris);
        assert_eq!(pick_gradient("Dubai"), GradientToken::Dubai);
        assert_eq!(pick_gradient("Seoul"), GradientToken::Seoul);
        assert_eq!(pick_gradient("Rio de Janeiro"), GradientToken::Rio);
    }

    #[test]
    fn gradient_defaults_for_unknown_city() {
        assert_eq!(pick_gradient("Unknownville"), GradientToken::Default);
        assert_eq!(pick_gradient(""), GradientToken::Default);
        assert!(GradientToken::Default.css().starts_with("linear-gradient"));
    }

    #[test]
    fn animation_assets() {
        assert_eq!(pick_animation("Clear"), AnimationToken::Sunny);
        assert_eq!(pick_animation("Drizzle"), AnimationToken::Rainy);
        assert_eq!(pick_animation("Snow"), AnimationToken::Cloudy);
        assert_eq!(AnimationToken::Rainy.asset_path(), "/animations/rainy.json");
    }
}
