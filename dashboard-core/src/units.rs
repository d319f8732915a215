//! Unit conversions shared by every display record.

const KELVIN_OFFSET: f64 = 273.15;

/// Kelvin to whole degrees Celsius. Halves round up (towards +inf), so
/// -0.5 becomes 0 and -2.5 becomes -2.
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - KELVIN_OFFSET + 0.5).floor() as i32
}

/// Meters to kilometers, rounded to one decimal place.
pub fn meters_to_km(meters: u32) -> f64 {
    (f64::from(meters) / 100.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_to_celsius_rounds() {
        assert_eq!(kelvin_to_celsius(273.15), 0);
        assert_eq!(kelvin_to_celsius(298.0), 25);
        assert_eq!(kelvin_to_celsius(300.9), 28);
        assert_eq!(kelvin_to_celsius(263.0), -10);
    }

    #[test]
    fn kelvin_to_celsius_rounds_negative_halves_up() {
        assert_eq!(kelvin_to_celsius(272.65), 0);
        assert_eq!(kelvin_to_celsius(270.65), -2);
        assert_eq!(kelvin_to_celsius(260.64), -13);
        assert_eq!(kelvin_to_celsius(274.15), 1);
    }

    #[test]
    fn meters_to_km_keeps_one_decimal() {
        assert_eq!(meters_to_km(10_000), 10.0);
        assert_eq!(meters_to_km(6_437), 6.4);
        assert_eq!(meters_to_km(6_450), 6.5);
        assert_eq!(meters_to_km(0), 0.0);
    }
}
