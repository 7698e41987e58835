use crate::{
    error::FetchError,
    model::{Coordinates, CurrentObservation},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// Seam over the two network services a fetch attempt talks to.
///
/// The live implementation is [`OpenMeteoProvider`]; tests substitute an
/// in-memory fake. Calls are strictly sequential: a fetch geocodes first and
/// only then asks for conditions, with no retries and no caching between
/// attempts.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Resolve a city name to coordinates. `Ok(None)` means the service
    /// answered but had no match.
    async fn geocode(&self, name: &str) -> Result<Option<Coordinates>, FetchError>;

    /// Current conditions at the given coordinates.
    async fn current(&self, coords: Coordinates) -> Result<CurrentObservation, FetchError>;
}
