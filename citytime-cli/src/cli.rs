use std::io::{self, Write};
use std::time::Duration;

use chrono::{Local, Utc};
use citytime_core::{App, OpenMeteoProvider, clock, registry};
use clap::{Parser, Subcommand};
use inquire::{Autocomplete, CustomUserError, Text, autocompletion::Replacement};
use log::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citytime", version, about = "Local time & weather for Canadian cities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the city's local time and current weather once.
    Show {
        /// City name; prompts interactively when omitted.
        city: Option<String>,
    },

    /// Like `show`, then keep the clock ticking until Ctrl-C.
    Watch {
        /// City name; prompts interactively when omitted.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { city } => {
                let app = init_app(city).await?;
                render(&app);
                Ok(())
            }
            Command::Watch { city } => {
                let app = init_app(city).await?;
                render(&app);
                run_clock(app).await
            }
        }
    }
}

/// Build the widget state and run the startup sequence: decide DST once,
/// then fetch weather for the requested (or default) city. Fetch failures
/// end up on the widget's error line, not as a process error.
async fn init_app(city: Option<String>) -> anyhow::Result<App> {
    let city = match city {
        Some(city) => city,
        None => prompt_city()?,
    };

    let is_dst = clock::detect_dst(Local::now());
    debug!("daylight-saving heuristic says active={is_dst}");

    let mut app = App::new(Utc::now(), is_dst);
    let provider = OpenMeteoProvider::new();
    let requested = if city.is_empty() { None } else { Some(city.as_str()) };
    app.fetch_weather(&provider, requested).await;

    Ok(app)
}

/// Autocomplete source for the city prompt, backed by the registry's
/// prefix filter.
#[derive(Debug, Clone, Default)]
struct CityCompleter;

impl Autocomplete for CityCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        Ok(registry::filter_by_prefix(input)
            .iter()
            .map(|loc| loc.name.to_string())
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

fn prompt_city() -> anyhow::Result<String> {
    let city = Text::new("Enter a city:")
        .with_autocomplete(CityCompleter)
        .with_help_message(&format!("Empty input defaults to {}", registry::DEFAULT_LOCATION))
        .prompt()?;

    Ok(city.trim().to_string())
}

/// Print the full widget surface once.
fn render(app: &App) {
    println!();
    println!("Weather & Time in {}", app.location);
    println!("  {}", app.clock.format_time());
    println!("  {}", app.clock.format_date());

    if app.clock.is_daylight_saving {
        println!("  Daylight Saving Time (DST) Active");
    } else {
        println!("  Standard Time");
    }

    println!("  Temperature: {}°C", fmt_reading(app.weather.temperature_c));
    println!("  Condition:   {}", fmt_text(&app.weather.condition));
    println!("  Humidity:    {}%", fmt_reading(app.weather.humidity_pct));
    println!("  Wind Speed:  {} km/h", fmt_reading(app.weather.wind_speed_kmh));

    if let Some(error) = &app.error {
        println!();
        println!("  {error}");
    }
}

/// One-second repeating tick redrawing the clock line in place. The timer
/// lives inside this function; returning (on Ctrl-C) tears it down.
async fn run_clock(mut app: App) -> anyhow::Result<()> {
    let mut timer = tokio::time::interval(Duration::from_secs(1));
    timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    println!();
    println!("Press Ctrl-C to stop.");

    loop {
        tokio::select! {
            _ = timer.tick() => {
                app.tick(Utc::now());
                print!("\r  {}  {}", app.clock.format_time(), app.clock.format_date());
                io::stdout().flush()?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    println!();
    Ok(())
}

fn fmt_reading<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "--".to_string(), |v| v.to_string())
}

fn fmt_text(text: &str) -> &str {
    if text.is_empty() { "--" } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completer_suggests_by_prefix() {
        let mut completer = CityCompleter;

        let hits = completer.get_suggestions("ca").expect("suggestions");
        assert_eq!(hits, ["Calgary"]);

        let hits = completer.get_suggestions("").expect("suggestions");
        assert!(hits.is_empty());
    }

    #[test]
    fn completer_replaces_input_with_highlight() {
        let mut completer = CityCompleter;
        let replacement = completer
            .get_completion("ca", Some("Calgary".to_string()))
            .expect("completion");
        assert_eq!(replacement, Some("Calgary".to_string()));
    }

    #[test]
    fn missing_readings_render_as_placeholder() {
        assert_eq!(fmt_reading::<i32>(None), "--");
        assert_eq!(fmt_reading(Some(4)), "4");
        assert_eq!(fmt_text(""), "--");
        assert_eq!(fmt_text("Snow"), "Snow");
    }
}
