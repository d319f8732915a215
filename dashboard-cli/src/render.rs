use std::fmt;

use dashboard_core::{BucketSource, CurrentState, DashboardView, DisplayCurrent};

/// Plain-text rendering of every dashboard card.
pub struct DashboardText<'a>(pub &'a DashboardView);

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        match &view.current {
            CurrentState::Ready(current) => write_current(f, current)?,
            CurrentState::Unavailable { message } => writeln!(f, "{}: {message}", view.city)?,
        }

        writeln!(f, "\nHow is the temperature today?")?;
        for b in &view.hourly {
            let marker = if b.source == BucketSource::Placeholder { " *" } else { "" };
            writeln!(
                f,
                "  {:<10} {} {:>3}°{marker}",
                b.bucket.label(),
                b.icon.glyph(),
                b.temp_c
            )?;
        }

        writeln!(f, "\nHumidity: {}%", view.humidity.humidity_pct)?;

        if !view.siblings.is_empty() {
            writeln!(f, "\nOther cities")?;
            for city in &view.siblings {
                writeln!(
                    f,
                    "  {} {:<12} {:>3}°C  {}",
                    city.icon.glyph(),
                    city.name,
                    city.temp_c,
                    city.condition
                )?;
            }
        }

        Ok(())
    }
}

fn write_current(f: &mut fmt::Formatter<'_>, current: &DisplayCurrent) -> fmt::Result {
    writeln!(f, "{} {}", current.icon.glyph(), current.location)?;
    writeln!(f, "  {}°C, feels like {}°C", current.temp_c, current.feels_like_c)?;
    writeln!(f, "  {} ({})", current.condition, current.description)?;
    writeln!(f, "  Humidity:   {}%", current.humidity_pct)?;
    writeln!(f, "  Wind speed: {} m/s", current.wind_speed_mps)?;
    writeln!(f, "  Pressure:   {} hPa", current.pressure_hpa)?;
    writeln!(f, "  Visibility: {:.1} km", current.visibility_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{
        AnimationToken, Bucket, DisplayHourlyBucket, DisplayHumidity, DisplaySiblingCity,
        GradientToken, IconToken,
    };

    fn hourly() -> [DisplayHourlyBucket; 4] {
        Bucket::all().map(|bucket| DisplayHourlyBucket {
            bucket,
            temp_c: 20,
            icon: IconToken::Cloud,
            source: if bucket == Bucket::Night {
                BucketSource::Placeholder
            } else {
                BucketSource::Matched
            },
        })
    }

    fn view(current: CurrentState) -> DashboardView {
        DashboardView {
            city: "Delhi".to_string(),
            current,
            hourly: hourly(),
            humidity: DisplayHumidity { humidity_pct: 75 },
            siblings: vec![DisplaySiblingCity {
                name: "Mumbai".to_string(),
                temp_c: 29,
                condition: "Rain".to_string(),
                icon: IconToken::Rain,
                gradient: GradientToken::Default,
                gradient_css: GradientToken::Default.css().to_string(),
            }],
        }
    }

    #[test]
    fn renders_current_conditions() {
        let current = DisplayCurrent {
            location: "Delhi, IN".to_string(),
            temp_c: 31,
            feels_like_c: 33,
            humidity_pct: 40,
            pressure_hpa: 1008,
            visibility_km: 6.0,
            visibility_defaulted: false,
            wind_speed_mps: 2.57,
            condition: "Haze".to_string(),
            description: "haze".to_string(),
            icon: IconToken::PartlyCloudy,
            animation: AnimationToken::Cloudy,
            animation_asset: AnimationToken::Cloudy.asset_path(),
        };

        let text = DashboardText(&view(CurrentState::Ready(current))).to_string();

        assert!(text.contains("Delhi, IN"));
        assert!(text.contains("31°C, feels like 33°C"));
        assert!(text.contains("Visibility: 6.0 km"));
        assert!(text.contains("Wind speed: 2.57 m/s"));
        assert!(text.contains("Humidity: 75%"));
        assert!(text.contains("Mumbai"));
    }

    #[test]
    fn marks_placeholder_buckets() {
        let text = DashboardText(&view(CurrentState::Unavailable {
            message: "could not read weather data".to_string(),
        }))
        .to_string();

        assert!(text.starts_with("Delhi: could not read weather data"));
        let night = text.lines().find(|l| l.contains("Night")).expect("night line");
        assert!(night.ends_with('*'));
        let morning = text.lines().find(|l| l.contains("Morning")).expect("morning line");
        assert!(!morning.ends_with('*'));
    }
}
