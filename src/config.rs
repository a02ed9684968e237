//! Configuration management for the loopweer application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::LoopweerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::PrecipitationUnit;

/// Root configuration structure for the loopweer application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoopweerConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the forecast API
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Number of forecast days to request
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    /// Precipitation series to request: "amount" (mm) or "probability" (%)
    #[serde(default = "default_precipitation")]
    pub precipitation: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Fallback city name when no location is given
    #[serde(default = "default_city")]
    pub city: String,
    /// Fallback latitude
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Fallback longitude
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

// Default value functions
fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_forecast_days() -> u32 {
    2
}

fn default_precipitation() -> String {
    "amount".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_city() -> String {
    "Amsterdam".to_string()
}

fn default_latitude() -> f64 {
    52.3676
}

fn default_longitude() -> f64 {
    4.9041
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_url: default_forecast_url(),
            geocoding_url: default_geocoding_url(),
            timeout_seconds: default_weather_timeout(),
            forecast_days: default_forecast_days(),
            precipitation: default_precipitation(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            city: default_city(),
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl WeatherConfig {
    /// The precipitation unit requested from the feed
    #[must_use]
    pub fn precipitation_unit(&self) -> PrecipitationUnit {
        if self.precipitation == "probability" {
            PrecipitationUnit::Percent
        } else {
            PrecipitationUnit::Millimeters
        }
    }
}

impl LoopweerConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with LOOPWEER_ prefix
        builder = builder.add_source(
            Environment::with_prefix("LOOPWEER")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: LoopweerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("loopweer").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.forecast_url.is_empty() {
            self.weather.forecast_url = default_forecast_url();
        }
        if self.weather.geocoding_url.is_empty() {
            self.weather.geocoding_url = default_geocoding_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.weather.forecast_days == 0 {
            self.weather.forecast_days = default_forecast_days();
        }
        if self.weather.precipitation.is_empty() {
            self.weather.precipitation = default_precipitation();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.city.is_empty() {
            self.defaults.city = default_city();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds > 300 {
            return Err(
                LoopweerError::config("Weather API timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.weather.forecast_days > 16 {
            return Err(LoopweerError::config("Forecast days cannot exceed 16").into());
        }

        if !(-90.0..=90.0).contains(&self.defaults.latitude) {
            return Err(
                LoopweerError::config("Default latitude must be between -90 and 90").into(),
            );
        }

        if !(-180.0..=180.0).contains(&self.defaults.longitude) {
            return Err(
                LoopweerError::config("Default longitude must be between -180 and 180").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(LoopweerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(LoopweerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let valid_precipitation = ["amount", "probability"];
        if !valid_precipitation.contains(&self.weather.precipitation.as_str()) {
            return Err(LoopweerError::config(format!(
                "Invalid precipitation setting '{}'. Must be one of: {}",
                self.weather.precipitation,
                valid_precipitation.join(", ")
            ))
            .into());
        }

        for url in [&self.weather.forecast_url, &self.weather.geocoding_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(LoopweerError::config(
                    "Weather API URLs must be valid HTTP or HTTPS URLs",
                )
                .into());
            }
        }

        Ok(())
    }
}
