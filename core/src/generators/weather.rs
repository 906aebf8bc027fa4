use chrono::{Days, NaiveDate};
use log::debug;
use serde::Serialize;
use std::fmt;

use crate::error::{checked_count, GenError};
use crate::random::{choose, RandomSource};

pub const MIN_TEMPERATURE: i64 = -10;
pub const MAX_TEMPERATURE: i64 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Windy,
    Foggy,
}

impl Condition {
    pub const ALL: [Condition; 7] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Stormy,
        Condition::Snowy,
        Condition::Windy,
        Condition::Foggy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Stormy => "Stormy",
            Condition::Snowy => "Snowy",
            Condition::Windy => "Windy",
            Condition::Foggy => "Foggy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
            Condition::Stormy => "⛈️",
            Condition::Snowy => "❄️",
            Condition::Windy => "💨",
            Condition::Foggy => "🌫️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherDay {
    pub date: NaiveDate,
    pub condition: Condition,
    pub temperature: i64,
}

impl fmt::Display for WeatherDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} {:<6}  {:>3}°C",
            self.date.format("%Y-%m-%d"),
            self.condition.icon(),
            self.condition.label(),
            self.temperature
        )
    }
}

/// One sampled day per requested day, starting at `today`.
pub fn forecast(
    rng: &mut dyn RandomSource,
    today: NaiveDate,
    days: i64,
) -> Result<Vec<WeatherDay>, GenError> {
    let count = checked_count("days", days)?;

    // the last date must exist before anything is sampled or allocated
    if count > 0 && today.checked_add_days(Days::new(count as u64 - 1)).is_none() {
        return Err(GenError::invalid(
            "days",
            days,
            "runs past the last representable date",
        ));
    }
    debug!("[-] building {} day forecast from {}", count, today);

    let mut forecast = Vec::with_capacity(count);
    let mut date = today;
    for offset in 0..count {
        if offset > 0 {
            date = date.succ_opt().ok_or_else(|| {
                GenError::invalid("days", days, "runs past the last representable date")
            })?;
        }
        let condition = *choose(rng, &Condition::ALL);
        let temperature = rng.range_inclusive(MIN_TEMPERATURE, MAX_TEMPERATURE);

        forecast.push(WeatherDay {
            date,
            condition,
            temperature,
        });
    }

    Ok(forecast)
}

pub fn render_forecast(days: &[WeatherDay]) -> String {
    days.iter()
        .map(|day| day.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
