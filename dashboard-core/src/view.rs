use serde::{Deserialize, Serialize};

use crate::tokens::{AnimationToken, GradientToken, IconToken};

/// Fixed time-of-day windows summarising a forecast list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Bucket {
    pub const fn all() -> [Bucket; 4] {
        [Bucket::Morning, Bucket::Afternoon, Bucket::Evening, Bucket::Night]
    }

    /// Hour of day (0-23) the bucket is centred on.
    pub fn target_hour(&self) -> u32 {
        match self {
            Bucket::Morning => 9,
            Bucket::Afternoon => 15,
            Bucket::Evening => 18,
            Bucket::Night => 21,
        }
    }

    /// Position in the output array, also used for the positional fallback.
    pub fn index(&self) -> usize {
        match self {
            Bucket::Morning => 0,
            Bucket::Afternoon => 1,
            Bucket::Evening => 2,
            Bucket::Night => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Morning => "Morning",
            Bucket::Afternoon => "Afternoon",
            Bucket::Evening => "Evening",
            Bucket::Night => "Night",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a bucket's values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketSource {
    /// An entry on the reference day within the hour tolerance.
    Matched,
    /// The entry at the bucket's position in the raw list.
    Positional,
    /// The caller-supplied placeholder.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCurrent {
    /// "City, Country".
    pub location: String,
    pub temp_c: i32,
    pub feels_like_c: i32,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub visibility_km: f64,
    /// Set when the payload carried no visibility and `visibility_km` is the zero sentinel.
    pub visibility_defaulted: bool,
    pub wind_speed_mps: f64,
    pub condition: String,
    pub description: String,
    pub icon: IconToken,
    pub animation: AnimationToken,
    /// Asset path of `animation`, e.g. `/animations/sunny.json`.
    pub animation_asset: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayHourlyBucket {
    pub bucket: Bucket,
    pub temp_c: i32,
    pub icon: IconToken,
    pub source: BucketSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySiblingCity {
    pub name: String,
    pub temp_c: i32,
    pub condition: String,
    pub icon: IconToken,
    /// Card background keyed on the city name.
    pub gradient: GradientToken,
    /// CSS value of `gradient`.
    pub gradient_css: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayHumidity {
    pub humidity_pct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderSlot {
    pub temp_c: i32,
    pub icon: IconToken,
}

/// Static values shown for buckets that no forecast entry can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPlaceholders {
    pub slots: [PlaceholderSlot; 4],
}

impl HourlyPlaceholders {
    pub fn slot(&self, bucket: Bucket) -> PlaceholderSlot {
        self.slots[bucket.index()]
    }
}

impl Default for HourlyPlaceholders {
    fn default() -> Self {
        Self {
            slots: [
                PlaceholderSlot {
                    temp_c: 20,
                    icon: IconToken::PartlyCloudy,
                },
                PlaceholderSlot {
                    temp_c: 24,
                    icon: IconToken::Sun,
                },
                PlaceholderSlot {
                    temp_c: 28,
                    icon: IconToken::PartlyCloudy,
                },
                PlaceholderSlot {
                    temp_c: 22,
                    icon: IconToken::Moon,
                },
            ],
        }
    }
}
