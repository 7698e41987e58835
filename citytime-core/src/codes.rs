//! Static mapping from Open-Meteo weather codes to display strings.
//!
//! The forecast endpoint reports sky/precipitation conditions as a WMO
//! integer code. Only the codes below are distinguished; everything else
//! falls back to "Unknown" with a neutral icon.

/// Human-readable condition for a weather code.
pub fn description(code: u32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        51 => "Drizzle",
        61 => "Light rain",
        65 => "Heavy rain",
        71 => "Snow",
        95 => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Icon identifier for a weather code (OpenWeatherMap icon-set ids).
pub fn icon(code: u32) -> &'static str {
    match code {
        0 => "01d",
        1 => "02d",
        2 => "03d",
        3 => "04d",
        45 => "50d",
        51 => "09d",
        61 => "10d",
        65 => "11d",
        71 => "13d",
        95 => "11d",
        _ => "50d",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_description_and_icon() {
        assert_eq!(description(0), "Clear sky");
        assert_eq!(icon(0), "01d");
        assert_eq!(description(71), "Snow");
        assert_eq!(icon(71), "13d");
        assert_eq!(description(95), "Thunderstorm");
        assert_eq!(icon(95), "11d");
    }

    #[test]
    fn unmapped_codes_fall_back() {
        assert_eq!(description(999), "Unknown");
        assert_eq!(icon(999), "50d");
    }
}
