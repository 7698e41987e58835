use serde::{Deserialize, Serialize};

use crate::codes;

/// Geographic coordinates resolved by the geocoding service.
///
/// Deserializes straight out of a geocoding result entry; extra fields in
/// the payload are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw current-conditions sample as reported by the forecast provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentObservation {
    pub temperature_c: f64,
    pub weather_code: u32,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
}

/// Display-ready weather. Starts empty and is fully replaced (never merged
/// field-by-field) on each successful fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherState {
    pub temperature_c: Option<i32>,
    pub condition: String,
    pub humidity_pct: Option<f64>,
    pub wind_speed_kmh: Option<i32>,
    pub icon_id: String,
}

impl WeatherState {
    /// Build display weather from a raw observation: temperature and wind
    /// round to the nearest integer, humidity passes through unrounded,
    /// condition and icon come from the static code maps.
    pub fn from_observation(obs: &CurrentObservation) -> Self {
        Self {
            temperature_c: Some(obs.temperature_c.round() as i32),
            condition: codes::description(obs.weather_code).to_string(),
            humidity_pct: Some(obs.humidity_pct),
            wind_speed_kmh: Some(obs.wind_speed_kmh.round() as i32),
            icon_id: codes::icon(obs.weather_code).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_maps_to_display_weather() {
        let obs = CurrentObservation {
            temperature_c: 3.6,
            weather_code: 71,
            humidity_pct: 80.0,
            wind_speed_kmh: 12.4,
        };

        let state = WeatherState::from_observation(&obs);

        assert_eq!(state.temperature_c, Some(4));
        assert_eq!(state.condition, "Snow");
        assert_eq!(state.humidity_pct, Some(80.0));
        assert_eq!(state.wind_speed_kmh, Some(12));
        assert_eq!(state.icon_id, "13d");
    }

    #[test]
    fn empty_state_has_no_readings() {
        let state = WeatherState::default();
        assert_eq!(state.temperature_c, None);
        assert_eq!(state.humidity_pct, None);
        assert_eq!(state.wind_speed_kmh, None);
        assert!(state.condition.is_empty());
        assert!(state.icon_id.is_empty());
    }
}
