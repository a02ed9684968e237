//! Data models for the loopweer application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Weather: Current snapshot and hourly series
//! - Forecast: The retrieved snapshot + series bundle
//! - Openmeteo: Open-Meteo API response types and conversions

pub mod forecast;
pub mod location;
pub mod openmeteo;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::Forecast;
pub use location::Location;
pub use weather::{HourlySeries, PrecipitationUnit, WeatherSnapshot};
