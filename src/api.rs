//! Weather API client for `OpenMeteo` integration
//!
//! This module provides HTTP client functionality for retrieving forecast
//! and geocoding data from the `OpenMeteo` API. Retrieval is a single
//! best-effort attempt per request: a failure is reported to the caller,
//! never retried.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use tracing::{debug, info, warn};

use crate::config::LoopweerConfig;
use crate::error::LoopweerError;
use crate::models::{Forecast, Location, PrecipitationUnit, openmeteo};

/// Weather API client for `OpenMeteo`
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: LoopweerConfig,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: LoopweerConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.weather.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("loopweer/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Fetch the current + hourly forecast for a location.
    ///
    /// The hourly precipitation column follows the configured unit: the
    /// feed serves either an absolute amount or a probability under the
    /// same series slot.
    pub fn fetch_forecast(&self, location: &Location) -> Result<Forecast> {
        info!(
            "Fetching forecast for {} ({:.4}, {:.4})",
            location.name, location.latitude, location.longitude
        );
        let start_time = Instant::now();

        let unit = self.config.weather.precipitation_unit();
        let precipitation_field = match unit {
            PrecipitationUnit::Millimeters => "precipitation",
            PrecipitationUnit::Percent => "precipitation_probability",
        };

        let url = format!(
            "{}?latitude={}&longitude={}\
             &current=temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,wind_speed_10m,wind_direction_10m\
             &hourly=temperature_2m,weather_code,dew_point_2m,{}\
             &timezone=auto&forecast_days={}",
            self.config.weather.forecast_url,
            location.latitude,
            location.longitude,
            precipitation_field,
            self.config.weather.forecast_days,
        );

        let response = self.make_request(&url)?;

        let forecast_response: openmeteo::ForecastResponse = response
            .json()
            .with_context(|| "Failed to parse OpenMeteo forecast response")?;

        let forecast = Forecast::from_openmeteo(&forecast_response, location.clone(), unit)?;

        let total_duration = start_time.elapsed();
        info!(
            "Retrieved forecast with {} hourly points in {:.3}s",
            forecast.hourly.len(),
            total_duration.as_secs_f64()
        );
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow forecast API response: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(forecast)
    }

    /// Geocode a location name. Returns the best match when the API knows
    /// the name, an empty list otherwise.
    pub fn geocode(&self, location_name: &str) -> Result<Vec<Location>> {
        info!("Geocoding location: '{}'", location_name);

        let url = format!(
            "{}?name={}&count=1&language=nl&format=json",
            self.config.weather.geocoding_url,
            urlencoding::encode(location_name)
        );

        let response = self.make_request(&url)?;

        let geocoding_response: openmeteo::GeocodingResponse = response
            .json()
            .with_context(|| "Failed to parse OpenMeteo geocoding response")?;

        let locations: Vec<Location> = geocoding_response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect();

        if locations.is_empty() {
            warn!("No results found for location '{}'", location_name);
        } else {
            debug!(
                "Geocoding results: {:?}",
                locations
                    .iter()
                    .map(Location::format_coordinates)
                    .collect::<Vec<_>>()
            );
        }

        Ok(locations)
    }

    /// Make a single request, mapping transport and status failures to an
    /// API error.
    fn make_request(&self, url: &str) -> Result<Response> {
        debug!("OpenMeteo API request URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| LoopweerError::api(format!("Network error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoopweerError::api(format!(
                "API request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            ))
            .into());
        }

        Ok(response)
    }
}

/// Location parsing utilities
pub struct LocationParser;

impl LocationParser {
    /// Parse location input: raw coordinates or a place name
    pub fn parse(input: &str) -> Result<LocationInput> {
        let input = input.trim();

        if input.is_empty() {
            return Err(LoopweerError::validation("Location cannot be empty").into());
        }

        // Try to parse as coordinates (lat,lon)
        if let Ok(coords) = Self::parse_coordinates(input) {
            return Ok(LocationInput::Coordinates(coords.0, coords.1));
        }

        // Otherwise treat as location name
        Ok(LocationInput::Name(input.to_string()))
    }

    /// Parse coordinates from string like "52.3676,4.9041" or "52.3676 4.9041"
    fn parse_coordinates(input: &str) -> Result<(f64, f64)> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(
                LoopweerError::validation("Coordinates must be in format 'lat,lon'").into(),
            );
        }

        let lat = parts[0]
            .parse::<f64>()
            .with_context(|| format!("Invalid latitude: {}", parts[0]))?;
        let lon = parts[1]
            .parse::<f64>()
            .with_context(|| format!("Invalid longitude: {}", parts[1]))?;

        // Validate coordinate ranges
        if !(-90.0..=90.0).contains(&lat) {
            return Err(LoopweerError::validation(format!(
                "Latitude must be between -90 and 90, got: {lat}"
            ))
            .into());
        }

        if !(-180.0..=180.0).contains(&lon) {
            return Err(LoopweerError::validation(format!(
                "Longitude must be between -180 and 180, got: {lon}"
            ))
            .into());
        }

        Ok((lat, lon))
    }
}

/// Types of location input
#[derive(Debug, Clone)]
pub enum LocationInput {
    /// Coordinates (latitude, longitude)
    Coordinates(f64, f64),
    /// Location name (city, region, etc.)
    Name(String),
}
