//! `OpenMeteo` API response structures and conversion utilities

use chrono::{NaiveDateTime, Timelike, Utc};
use serde::Deserialize;

use super::{Forecast, HourlySeries, Location, PrecipitationUnit, WeatherSnapshot};
use crate::error::LoopweerError;

/// Timestamp format used by the feed, e.g. `2024-06-01T14:00`
const FEED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Current weather and forecast response from `OpenMeteo` API
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
    pub current: Option<CurrentData>,
    pub hourly: Option<HourlyData>,
}

/// Current weather block from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct CurrentData {
    pub time: String,
    #[serde(rename = "temperature_2m")]
    pub temperature: f32,
    pub apparent_temperature: f32,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: Option<f32>,
    pub is_day: Option<u8>,
    pub weather_code: u16,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f32,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: Option<u16>,
}

/// Hourly weather data from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<Vec<Option<f32>>>,
    pub weather_code: Option<Vec<Option<u16>>>,
    #[serde(rename = "dew_point_2m")]
    pub dew_point: Option<Vec<Option<f32>>>,
    pub precipitation: Option<Vec<Option<f32>>>,
    pub precipitation_probability: Option<Vec<Option<f32>>>,
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Self {
            latitude: result.latitude,
            longitude: result.longitude,
            name: result.name,
            country: result.country,
        }
    }
}

/// Parse a feed timestamp, falling back to the current instant so one
/// malformed stamp cannot sink the whole series.
fn parse_feed_time(stamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(stamp, FEED_TIME_FORMAT)
        .unwrap_or_else(|_| Utc::now().naive_utc())
}

/// Align an optional feed column to the time axis length. Absent columns
/// and short columns become `None` entries.
fn column<T: Copy>(values: Option<&Vec<Option<T>>>, len: usize) -> Vec<Option<T>> {
    match values {
        Some(v) => (0..len).map(|i| v.get(i).copied().flatten()).collect(),
        None => vec![None; len],
    }
}

impl HourlySeries {
    /// Build the hourly series from an `OpenMeteo` hourly block. The
    /// precipitation column is picked by the requested unit.
    #[must_use]
    pub fn from_openmeteo(hourly: &HourlyData, unit: PrecipitationUnit) -> Self {
        let len = hourly.time.len();
        let precipitation = match unit {
            PrecipitationUnit::Millimeters => column(hourly.precipitation.as_ref(), len),
            PrecipitationUnit::Percent => column(hourly.precipitation_probability.as_ref(), len),
        };

        Self {
            time: hourly.time.iter().map(|t| parse_feed_time(t)).collect(),
            temperature: column(hourly.temperature.as_ref(), len),
            weather_code: column(hourly.weather_code.as_ref(), len),
            dew_point: column(hourly.dew_point.as_ref(), len),
            precipitation,
            precipitation_unit: unit,
        }
    }
}

impl WeatherSnapshot {
    /// Build the snapshot from an `OpenMeteo` current block. Dew point and
    /// precipitation are not part of the current block; both are read from
    /// the hourly series at the current hour.
    #[must_use]
    pub fn from_openmeteo(current: &CurrentData, hourly: &HourlySeries) -> Self {
        let reference_hour = NaiveDateTime::parse_from_str(&current.time, FEED_TIME_FORMAT)
            .map(|dt| dt.hour())
            .unwrap_or(0);
        let index = hourly.index_for_hour(reference_hour);

        Self {
            temperature: current.temperature,
            apparent_temperature: current.apparent_temperature,
            wind_speed_kmh: current.wind_speed,
            wind_direction_deg: current.wind_direction,
            weather_code: current.weather_code,
            dew_point: hourly.dew_point_at(index).unwrap_or(0.0),
            reference_hour,
            precipitation: hourly.precipitation_at(index).unwrap_or(0.0),
        }
    }
}

impl Forecast {
    /// Create a forecast bundle from an `OpenMeteo` API response.
    ///
    /// # Errors
    /// Returns an API error when the response lacks the current or hourly
    /// block.
    pub fn from_openmeteo(
        response: &ForecastResponse,
        location: Location,
        unit: PrecipitationUnit,
    ) -> crate::Result<Self> {
        let current = response
            .current
            .as_ref()
            .ok_or_else(|| LoopweerError::api("forecast response has no current weather block"))?;
        let hourly_data = response
            .hourly
            .as_ref()
            .ok_or_else(|| LoopweerError::api("forecast response has no hourly block"))?;

        let hourly = HourlySeries::from_openmeteo(hourly_data, unit);
        let snapshot = WeatherSnapshot::from_openmeteo(current, &hourly);
        Ok(Self::new(location, snapshot, hourly))
    }
}
