//! Hourly series windowing
//!
//! Produces forward-looking slices of an hourly series for the hourly strip
//! and the temperature/precipitation chart. Windows stop early when the
//! series runs out of data; truncation is silent.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use super::classifier::{self, WeatherCategory};
use crate::models::{HourlySeries, PrecipitationUnit};

/// Horizon for the compact summary strip
pub const COMPACT_HORIZON: usize = 8;
/// Horizon for the hourly display strip
pub const HOURLY_HORIZON: usize = 24;
/// Horizon for the chart series
pub const CHART_HORIZON: usize = 48;

/// One displayable hour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyEntry {
    /// Timestamp of this hour
    pub timestamp: NaiveDateTime,
    /// Display label: `H:00`, prefixed with a weekday abbreviation at the
    /// midnight boundary
    pub label: String,
    /// Temperature in °C
    pub temperature: f32,
    /// Condition category for this hour
    pub category: WeatherCategory,
    /// Precipitation value, unit per the window's tag
    pub precipitation: f32,
}

/// A truncated forward-looking slice of an hourly series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayWindow {
    /// Entries in chronological order
    pub entries: Vec<HourlyEntry>,
    /// Unit of the precipitation values, passed through untouched
    pub precipitation_unit: PrecipitationUnit,
}

impl DisplayWindow {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dutch weekday abbreviation, as used to mark day transitions.
fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "ma",
        Weekday::Tue => "di",
        Weekday::Wed => "wo",
        Weekday::Thu => "do",
        Weekday::Fri => "vr",
        Weekday::Sat => "za",
        Weekday::Sun => "zo",
    }
}

/// Label for one entry: plain `H:00`, or `weekday H:00` at midnight.
fn entry_label(timestamp: NaiveDateTime) -> String {
    let hour = timestamp.hour();
    if hour == 0 {
        format!("{} {}:00", weekday_short(timestamp.weekday()), hour)
    } else {
        format!("{hour}:00")
    }
}

/// Slice `series` starting at `start_index`, emitting consecutive entries
/// until `horizon_hours` entries are produced or the temperature value for
/// an hour is absent, whichever comes first.
#[must_use]
pub fn window(series: &HourlySeries, start_index: usize, horizon_hours: usize) -> DisplayWindow {
    let mut entries = Vec::new();

    for i in start_index..start_index.saturating_add(horizon_hours) {
        let Some(&timestamp) = series.time.get(i) else {
            break;
        };
        let Some(temperature) = series.temperature.get(i).copied().flatten() else {
            break;
        };

        let category = series
            .weather_code
            .get(i)
            .copied()
            .flatten()
            .map_or_else(classifier::unknown_category, classifier::classify);
        let precipitation = series
            .precipitation
            .get(i)
            .copied()
            .flatten()
            .unwrap_or(0.0);

        entries.push(HourlyEntry {
            timestamp,
            label: entry_label(timestamp),
            temperature,
            category,
            precipitation,
        });
    }

    DisplayWindow {
        entries,
        precipitation_unit: series.precipitation_unit,
    }
}
