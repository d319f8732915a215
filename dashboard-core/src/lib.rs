//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Raw provider payloads and their parsing
//! - The view-model builder (unit conversion, time-of-day buckets, tokens)
//! - A small HTTP fetch layer with per-branch failure tolerance
//! - Configuration handling
//!
//! It is used by `dashboard-cli`, but the builder can be reused by any
//! presentation layer.

pub mod builder;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod payload;
pub mod tokens;
pub mod units;
pub mod view;

pub use builder::{build_current, build_humidity, build_hourly_buckets, build_sibling_cities};
pub use client::{ApiClient, WeatherSource, fetch_many};
pub use config::Config;
pub use dashboard::{CurrentState, DashboardView, load_dashboard};
pub use error::ViewModelError;
pub use payload::{RawForecastPayload, RawWeatherPayload};
pub use tokens::{
    AnimationToken, GradientToken, IconToken, pick_animation, pick_bucket_icon, pick_gradient,
    pick_icon,
};
pub use view::{
    Bucket, BucketSource, DisplayCurrent, DisplayHourlyBucket, DisplayHumidity,
    DisplaySiblingCity, HourlyPlaceholders,
};
