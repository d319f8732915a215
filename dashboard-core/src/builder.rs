//! Turns raw provider payloads into display records.
//!
//! Every function here is synchronous and pure. The reference instant for the
//! hourly outlook is passed in by the caller; nothing reads the system clock.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};

use crate::{
    error::ViewModelError,
    payload::{RawForecastEntry, RawForecastPayload, RawWeatherPayload},
    tokens::{pick_animation, pick_bucket_icon, pick_gradient, pick_icon},
    units::{kelvin_to_celsius, meters_to_km},
    view::{
        Bucket, BucketSource, DisplayCurrent, DisplayHourlyBucket, DisplayHumidity,
        DisplaySiblingCity, HourlyPlaceholders,
    },
};

/// An entry qualifies for a bucket when its hour is strictly closer than this.
pub const HOUR_TOLERANCE: u32 = 3;

/// Humidity shown when no payload is available or it reports zero.
pub const DEFAULT_HUMIDITY_PCT: u8 = 75;

pub fn build_current(raw: &RawWeatherPayload) -> Result<DisplayCurrent, ViewModelError> {
    let condition = raw.primary_condition().ok_or_else(|| {
        ViewModelError::MalformedPayload(format!(
            "payload for '{}' has an empty weather array",
            raw.name
        ))
    })?;

    let (visibility_km, visibility_defaulted) = match raw.visibility {
        Some(meters) => (meters_to_km(meters), false),
        None => (0.0, true),
    };

    let animation = pick_animation(&condition.main);

    Ok(DisplayCurrent {
        location: format!("{}, {}", raw.name, raw.sys.country),
        temp_c: kelvin_to_celsius(raw.main.temp),
        feels_like_c: kelvin_to_celsius(raw.main.feels_like),
        humidity_pct: raw.main.humidity,
        pressure_hpa: raw.main.pressure,
        visibility_km,
        visibility_defaulted,
        wind_speed_mps: raw.wind.speed,
        condition: condition.main.clone(),
        description: condition.description.clone(),
        icon: pick_icon(&condition.main),
        animation,
        animation_asset: animation.asset_path(),
    })
}

/// Summarise a forecast list into Morning, Afternoon, Evening and Night.
///
/// For each bucket the first entry (in input order) that falls on the
/// reference's calendar day, in the reference's timezone, and lies within
/// [`HOUR_TOLERANCE`] hours of the bucket's target hour is used. Otherwise the
/// entry at the bucket's position is used, and failing that the placeholder.
pub fn build_hourly_buckets<Tz: TimeZone>(
    raw: &RawForecastPayload,
    reference: &DateTime<Tz>,
    placeholders: &HourlyPlaceholders,
) -> [DisplayHourlyBucket; 4] {
    let tz = reference.timezone();
    let day = reference.date_naive();

    Bucket::all().map(|bucket| {
        if let Some(entry) = raw.list.iter().find(|e| in_window(e, &tz, day, bucket)) {
            return bucket_from_entry(bucket, entry, BucketSource::Matched);
        }

        if let Some(entry) = raw.list.get(bucket.index()) {
            return bucket_from_entry(bucket, entry, BucketSource::Positional);
        }

        tracing::debug!(%bucket, entries = raw.list.len(), "no forecast entry, using placeholder");
        let slot = placeholders.slot(bucket);
        DisplayHourlyBucket {
            bucket,
            temp_c: slot.temp_c,
            icon: slot.icon,
            source: BucketSource::Placeholder,
        }
    })
}

fn in_window<Tz: TimeZone>(
    entry: &RawForecastEntry,
    tz: &Tz,
    day: NaiveDate,
    bucket: Bucket,
) -> bool {
    let Some(utc) = DateTime::<Utc>::from_timestamp(entry.dt, 0) else {
        return false;
    };
    let local = utc.with_timezone(tz);

    local.date_naive() == day && local.hour().abs_diff(bucket.target_hour()) < HOUR_TOLERANCE
}

fn bucket_from_entry(
    bucket: Bucket,
    entry: &RawForecastEntry,
    source: BucketSource,
) -> DisplayHourlyBucket {
    DisplayHourlyBucket {
        bucket,
        temp_c: kelvin_to_celsius(entry.main.temp),
        icon: pick_bucket_icon(entry.condition_label(), bucket),
        source,
    }
}

/// Summaries for the "other cities" list. Failed fetches (`None`) are skipped,
/// as are payloads without any condition entry.
pub fn build_sibling_cities(raw_list: &[Option<RawWeatherPayload>]) -> Vec<DisplaySiblingCity> {
    raw_list
        .iter()
        .flatten()
        .filter_map(|raw| {
            let Some(condition) = raw.primary_condition() else {
                tracing::debug!(city = %raw.name, "dropping sibling city without conditions");
                return None;
            };

            let gradient = pick_gradient(&raw.name);

            Some(DisplaySiblingCity {
                name: raw.name.clone(),
                temp_c: kelvin_to_celsius(raw.main.temp),
                condition: condition.main.clone(),
                icon: pick_icon(&condition.main),
                gradient,
                gradient_css: gradient.css().to_string(),
            })
        })
        .collect()
}

pub fn build_humidity(raw: Option<&RawWeatherPayload>) -> DisplayHumidity {
    let humidity_pct = match raw.map(|p| p.main.humidity) {
        Some(h) if h > 0 => h,
        _ => DEFAULT_HUMIDITY_PCT,
    };

    DisplayHumidity { humidity_pct }
}
