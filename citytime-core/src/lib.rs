//! Core library for the `citytime` widget.
//!
//! This crate defines:
//! - The static registry of supported Canadian cities and their UTC offsets
//! - The simulated local clock and the daylight-saving heuristic
//! - Abstraction over the geocoding/forecast services, with the Open-Meteo
//!   implementation
//! - The single owned widget state and its named transitions
//!
//! It is used by `citytime-cli`, but can also be reused by other binaries or services.

pub mod app;
pub mod clock;
pub mod codes;
pub mod error;
pub mod model;
pub mod provider;
pub mod registry;

pub use app::{App, FetchToken, perform_fetch};
pub use clock::{ClockState, detect_dst};
pub use error::FetchError;
pub use model::{Coordinates, CurrentObservation, WeatherState};
pub use provider::{ForecastProvider, OpenMeteoProvider};
pub use registry::{CANADIAN_LOCATIONS, DEFAULT_LOCATION, Location};
