//! Weather snapshot and hourly series models

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unit of a precipitation series.
///
/// Depending on the requested feed fields the same series holds either an
/// absolute amount (mm) or a probability (%). The tag travels with the data
/// so consumers can label it; nothing in the engine interprets the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecipitationUnit {
    /// Absolute precipitation amount in millimetres
    Millimeters,
    /// Precipitation probability in percent
    Percent,
}

impl fmt::Display for PrecipitationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecipitationUnit::Millimeters => write!(f, "mm"),
            PrecipitationUnit::Percent => write!(f, "%"),
        }
    }
}

/// Current conditions for one engine invocation. Immutable input; all
/// derived values are recomputed from scratch per snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in °C
    pub temperature: f32,
    /// Apparent ("feels like") temperature in °C
    pub apparent_temperature: f32,
    /// Wind speed in km/h
    pub wind_speed_kmh: f32,
    /// Wind direction in degrees from north, when reported
    pub wind_direction_deg: Option<u16>,
    /// Weather condition code (open-ended domain)
    pub weather_code: u16,
    /// Dew point in °C, read from the hourly series at the reference hour
    pub dew_point: f32,
    /// Hour of day (0-23) used to index the hourly series
    pub reference_hour: u32,
    /// Precipitation value at the reference hour, unit per the series tag
    pub precipitation: f32,
}

/// Parallel hourly sequences, index `i` across all of them describes the
/// same hour. Absent per-hour values stay `None`; consumers truncate or
/// substitute locally instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    /// Hour timestamps (local time of the forecast location)
    pub time: Vec<NaiveDateTime>,
    /// Temperature in °C
    pub temperature: Vec<Option<f32>>,
    /// Weather condition code
    pub weather_code: Vec<Option<u16>>,
    /// Dew point in °C
    pub dew_point: Vec<Option<f32>>,
    /// Precipitation, unit per `precipitation_unit`
    pub precipitation: Vec<Option<f32>>,
    /// Unit of the precipitation values
    pub precipitation_unit: PrecipitationUnit,
}

impl HourlySeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Start index for a series that begins at local midnight of the
    /// current day: the hour of day is the index.
    #[must_use]
    pub fn index_for_hour(&self, hour: u32) -> usize {
        hour as usize
    }

    /// First index whose timestamp is at or after `instant`. Falls back to
    /// the series start when every timestamp lies before it.
    #[must_use]
    pub fn index_at_or_after(&self, instant: NaiveDateTime) -> usize {
        self.time.iter().position(|t| *t >= instant).unwrap_or(0)
    }

    /// Dew point at the given index, when present.
    #[must_use]
    pub fn dew_point_at(&self, index: usize) -> Option<f32> {
        self.dew_point.get(index).copied().flatten()
    }

    /// Precipitation at the given index, when present.
    #[must_use]
    pub fn precipitation_at(&self, index: usize) -> Option<f32> {
        self.precipitation.get(index).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hourly(start_day: u32, hours: usize) -> HourlySeries {
        let start = NaiveDate::from_ymd_opt(2024, 6, start_day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        HourlySeries {
            time: (0..hours)
                .map(|h| start + chrono::Duration::hours(h as i64))
                .collect(),
            temperature: vec![Some(12.0); hours],
            weather_code: vec![Some(1); hours],
            dew_point: (0..hours).map(|h| Some(h as f32)).collect(),
            precipitation: vec![None; hours],
            precipitation_unit: PrecipitationUnit::Millimeters,
        }
    }

    #[test]
    fn test_index_at_or_after_finds_first_match() {
        let series = hourly(1, 48);
        let instant = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        assert_eq!(series.index_at_or_after(instant), 14);
    }

    #[test]
    fn test_index_at_or_after_falls_back_to_start() {
        let series = hourly(1, 24);
        let late = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(series.index_at_or_after(late), 0);
    }

    #[test]
    fn test_dew_point_at() {
        let series = hourly(1, 24);
        assert_eq!(series.dew_point_at(5), Some(5.0));
        assert_eq!(series.dew_point_at(100), None);
    }

    #[test]
    fn test_precipitation_unit_display() {
        assert_eq!(PrecipitationUnit::Millimeters.to_string(), "mm");
        assert_eq!(PrecipitationUnit::Percent.to_string(), "%");
    }
}
