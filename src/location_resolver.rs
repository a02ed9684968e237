//! Location Resolution Module
//!
//! Resolves location inputs (coordinates or names) into structured
//! Location objects for forecasting.

use anyhow::Result;
use tracing::debug;

use crate::models::Location;
use crate::{LocationInput, LoopweerError, WeatherApiClient};

/// Service for resolving location inputs
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a location input into a structured Location
    pub fn resolve_location(
        api_client: &WeatherApiClient,
        location_input: LocationInput,
    ) -> Result<Location> {
        debug!("Resolving location input: {:?}", location_input);

        let location = match location_input {
            LocationInput::Coordinates(lat, lon) => Self::resolve_coordinates(lat, lon),
            LocationInput::Name(name) => Self::resolve_name(api_client, &name)?,
        };

        debug!(
            "Resolved location: {} at ({}, {})",
            location.name, location.latitude, location.longitude
        );

        Ok(location)
    }

    /// Raw coordinates keep a formatted coordinate string as their name;
    /// the geocoding API has no reverse lookup.
    fn resolve_coordinates(lat: f64, lon: f64) -> Location {
        Location::new(lat, lon, format!("{lat:.4}, {lon:.4}"))
    }

    /// Resolve a location name to coordinates via geocoding
    fn resolve_name(api_client: &WeatherApiClient, name: &str) -> Result<Location> {
        debug!("Geocoding location name: {}", name);

        let mut results = api_client.geocode(name)?;
        if results.is_empty() {
            return Err(LoopweerError::location_not_found(name).into());
        }

        // Use the first (best) result
        let location = results.remove(0);
        debug!(
            "Found location: {} ({:.4}, {:.4})",
            location.name, location.latitude, location.longitude
        );

        Ok(location)
    }
}
