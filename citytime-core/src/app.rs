//! The widget's single owned state record and its transitions.
//!
//! All mutable state lives in one [`App`] value with exactly one owner;
//! there are no ambient globals. Every mutation is a named transition, and
//! the fetch pipeline is split in two so the caller can overlap attempts:
//! [`App::begin_fetch`] does the synchronous half (registry lookup and the
//! optimistic clock update) and issues a token, [`perform_fetch`] does the
//! network half without touching the state, and [`App::complete_fetch`]
//! applies the outcome only if its token is still the latest issued. A slow
//! response from a superseded attempt is dropped instead of clobbering the
//! newer one.

use chrono::{DateTime, Utc};
use log::debug;

use crate::{
    clock::ClockState,
    error::FetchError,
    model::WeatherState,
    provider::ForecastProvider,
    registry::{self, DEFAULT_LOCATION},
};

/// Identifies one fetch attempt. Tokens are issued in increasing order and
/// only the newest one may write state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Everything the presentation layer reads, plus the transitions it drives.
#[derive(Debug)]
pub struct App {
    pub clock: ClockState,
    pub weather: WeatherState,
    /// Name of the city the display currently belongs to.
    pub location: String,
    /// Raw text the user is typing.
    pub input: String,
    /// Prefix-filtered autocomplete candidates, in registry order.
    pub suggestions: Vec<&'static str>,
    /// Distinct from `suggestions` being empty: typing a non-matching
    /// prefix shows an empty list, clearing the input hides it.
    pub show_suggestions: bool,
    pub loading: bool,
    pub error: Option<String>,
    last_token: u64,
}

impl App {
    /// Fresh widget state: default city's clock, empty weather, no input.
    /// The DST flag is decided once, before construction, and stays fixed
    /// for the life of the widget.
    pub fn new(now: DateTime<Utc>, is_daylight_saving: bool) -> Self {
        let default = registry::find_by_name(DEFAULT_LOCATION)
            .map(|loc| loc.utc_offset_hours)
            .unwrap_or(0.0);

        Self {
            clock: ClockState::new(default, is_daylight_saving, now),
            weather: WeatherState::default(),
            location: DEFAULT_LOCATION.to_string(),
            input: String::new(),
            suggestions: Vec::new(),
            show_suggestions: false,
            loading: false,
            error: None,
            last_token: 0,
        }
    }

    /// Scheduled once-per-second recomputation of the displayed time.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.clock.tick(now);
    }

    /// The user edited the input text: refilter suggestions and decide
    /// visibility. Empty input hides the list outright.
    pub fn input_changed(&mut self, text: &str) {
        self.input = text.to_string();

        if text.is_empty() {
            self.show_suggestions = false;
        } else {
            self.suggestions = registry::filter_by_prefix(text)
                .iter()
                .map(|loc| loc.name)
                .collect();
            self.show_suggestions = true;
        }
    }

    /// The user picked an autocomplete candidate. The caller follows up
    /// with a fetch for the chosen name.
    pub fn select_suggestion(&mut self, name: &str) {
        self.input = name.to_string();
        self.show_suggestions = false;
    }

    /// Synchronous half of a fetch attempt.
    ///
    /// Resolves the requested name (explicit argument, else current input,
    /// else the default city), clears any prior error, raises the loading
    /// flag, and applies the clock offset optimistically before any network
    /// I/O. Returns the issued token and the resolved name, or `None` when
    /// the name is not in the registry, in which case the attempt has
    /// already failed and the error line is set.
    pub fn begin_fetch(&mut self, requested: Option<&str>, now: DateTime<Utc>) -> Option<(FetchToken, String)> {
        let name = match requested {
            Some(name) => name.to_string(),
            None if !self.input.is_empty() => self.input.clone(),
            None => DEFAULT_LOCATION.to_string(),
        };

        self.loading = true;
        self.error = None;

        let Some(location) = registry::find_by_name(&name) else {
            self.fail_fetch(&FetchError::location_not_found(&name));
            return None;
        };

        self.clock.set_offset(location.utc_offset_hours, now);

        self.last_token += 1;
        debug!("fetch #{} started for '{name}'", self.last_token);
        Some((FetchToken(self.last_token), name))
    }

    /// Apply the outcome of the network half. Outcomes from superseded
    /// attempts are dropped.
    pub fn complete_fetch(
        &mut self,
        token: FetchToken,
        name: &str,
        outcome: Result<WeatherState, FetchError>,
        now: DateTime<Utc>,
    ) {
        if token.0 != self.last_token {
            debug!("fetch #{} for '{name}' superseded by #{}, dropping", token.0, self.last_token);
            return;
        }

        match outcome {
            Ok(weather) => {
                self.weather = weather;
                self.location = name.to_string();
                self.clock.tick(now);
                self.loading = false;
                self.show_suggestions = false;
            }
            Err(err) => self.fail_fetch(&err),
        }
    }

    /// Run a full fetch attempt against the given provider.
    pub async fn fetch_weather(&mut self, provider: &dyn ForecastProvider, requested: Option<&str>) {
        let Some((token, name)) = self.begin_fetch(requested, Utc::now()) else {
            return;
        };

        let outcome = perform_fetch(provider, &name).await;
        self.complete_fetch(token, &name, outcome, Utc::now());
    }

    /// A fetch attempt failed: drop the loading flag and set the single
    /// error line. Weather from an earlier successful fetch stays on
    /// display untouched.
    fn fail_fetch(&mut self, err: &FetchError) {
        self.loading = false;
        self.error = Some(format!("Could not retrieve weather data. {err}"));
    }
}

/// Network half of a fetch attempt: geocode the name, then read current
/// conditions at the returned coordinates. Pure with respect to [`App`].
pub async fn perform_fetch(
    provider: &dyn ForecastProvider,
    name: &str,
) -> Result<WeatherState, FetchError> {
    let coords = provider
        .geocode(name)
        .await?
        .ok_or_else(|| FetchError::coordinates_not_found(name))?;

    let observation = provider.current(coords).await?;
    Ok(WeatherState::from_observation(&observation))
}
