use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{Coordinates, CurrentObservation},
};

use super::ForecastProvider;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Live provider backed by the two Open-Meteo services. No API key needed.
#[derive(Debug, Clone, Default)]
pub struct OpenMeteoProvider {
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn geocode(&self, name: &str) -> Result<Option<Coordinates>, FetchError> {
        debug!("geocoding '{name}'");

        let res = self
            .http
            .get(GEOCODING_URL)
            .query(&[("name", name), ("count", "1")])
            .send()
            .await?;

        let parsed: GeoResponse = res.json().await?;
        let hit = parsed.results.into_iter().next();

        debug!("geocoding '{name}' -> {hit:?}");
        Ok(hit)
    }

    async fn current(&self, coords: Coordinates) -> Result<CurrentObservation, FetchError> {
        debug!("fetching conditions at {:.2},{:.2}", coords.latitude, coords.longitude);

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,weathercode,relative_humidity_2m,windspeed_10m".to_string(),
                ),
                // The provider picks a display time zone; the value is not
                // used anywhere in the widget.
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            debug!("forecast request failed with status {status}");
            return Err(FetchError::DataUnavailable);
        }

        let parsed: ForecastResponse = res.json().await?;

        Ok(CurrentObservation {
            temperature_c: parsed.current.temperature_2m,
            weather_code: parsed.current.weathercode,
            humidity_pct: parsed.current.relative_humidity_2m,
            wind_speed_kmh: parsed.current.windspeed_10m,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    /// Absent entirely when the service finds nothing.
    #[serde(default)]
    results: Vec<Coordinates>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: ForecastCurrent,
}

#[derive(Debug, Deserialize)]
struct ForecastCurrent {
    temperature_2m: f64,
    weathercode: u32,
    relative_humidity_2m: f64,
    windspeed_10m: f64,
}
