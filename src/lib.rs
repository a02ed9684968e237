//! `loopweer` - personal running weather advisory
//!
//! This library retrieves an Open-Meteo forecast for a location and derives
//! human-facing guidance from it: clothing advice, a running comfort
//! rating, hazard warnings, and hourly display windows.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod location_resolver;
pub mod models;

// Re-export core types for public API
pub use api::{LocationInput, LocationParser, WeatherApiClient};
pub use config::LoopweerConfig;
pub use engine::{WeatherReport, WindReport, interpret};
pub use error::LoopweerError;
pub use location_resolver::LocationResolver;
pub use models::{Forecast, HourlySeries, Location, PrecipitationUnit, WeatherSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, LoopweerError>;
