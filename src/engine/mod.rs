//! Weather interpretation engine
//!
//! Pure, deterministic transformation from one forecast snapshot plus its
//! hourly series into everything the presentation layer shows: wind report,
//! condition category, comfort rating, clothing/hazard recommendation, and
//! the display windows. Every function here is a total, side-effect-free
//! computation over its arguments; results are recomputed from scratch on
//! each invocation.

pub mod classifier;
pub mod comfort;
pub mod recommend;
pub mod scales;
pub mod window;

use serde::Serialize;

pub use classifier::WeatherCategory;
pub use comfort::{ComfortClass, ComfortRating};
pub use recommend::{Recommendation, Severity};
pub use window::{DisplayWindow, HourlyEntry};

use crate::models::{HourlySeries, WeatherSnapshot};

/// Wind conditions: both the discretized force and the raw speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindReport {
    /// Beaufort force (0-12)
    pub force: u8,
    /// Raw wind speed in km/h
    pub speed_kmh: f32,
    /// Direction the wind comes from, degrees from north
    pub direction_deg: Option<u16>,
    /// Direction as a 16-point compass label
    pub cardinal: Option<&'static str>,
}

impl WindReport {
    /// Derive the wind report from a snapshot.
    #[must_use]
    pub fn analyze(snapshot: &WeatherSnapshot) -> Self {
        Self {
            force: scales::wind_force(snapshot.wind_speed_kmh),
            speed_kmh: snapshot.wind_speed_kmh,
            direction_deg: snapshot.wind_direction_deg,
            cardinal: snapshot.wind_direction_deg.map(Self::direction_to_cardinal),
        }
    }

    /// Convert wind direction from degrees to a cardinal direction
    #[must_use]
    pub fn direction_to_cardinal(degrees: u16) -> &'static str {
        match degrees {
            0..=11 | 349..=360 => "N",
            12..=33 => "NNO",
            34..=56 => "NO",
            57..=78 => "ONO",
            79..=101 => "O",
            102..=123 => "OZO",
            124..=146 => "ZO",
            147..=168 => "ZZO",
            169..=191 => "Z",
            192..=213 => "ZZW",
            214..=236 => "ZW",
            237..=258 => "WZW",
            259..=281 => "W",
            282..=303 => "WNW",
            304..=326 => "NW",
            327..=348 => "NNW",
            _ => "?",
        }
    }
}

/// Everything derived from one snapshot + hourly series pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    /// Condition category for the current weather code
    pub category: WeatherCategory,
    /// Running comfort rating
    pub comfort: ComfortRating,
    /// Wind report
    pub wind: WindReport,
    /// Clothing advice and hazards
    pub recommendation: Recommendation,
    /// Hourly strip window (24 h)
    pub hourly: DisplayWindow,
    /// Chart window (48 h)
    pub chart: DisplayWindow,
}

/// Interpret one snapshot against its hourly series.
///
/// The component order fixes the report's field presentation only; no
/// component depends on another's output.
#[must_use]
pub fn interpret(snapshot: &WeatherSnapshot, hourly: &HourlySeries) -> WeatherReport {
    let category = classifier::classify(snapshot.weather_code);
    let comfort = comfort::comfort_rating(snapshot.temperature, snapshot.dew_point);
    let wind = WindReport::analyze(snapshot);
    let recommendation = recommend::recommend(
        snapshot.temperature,
        snapshot.apparent_temperature,
        wind.force,
        snapshot.dew_point,
    );

    let start = hourly.index_for_hour(snapshot.reference_hour);
    let hourly_window = window::window(hourly, start, window::HOURLY_HORIZON);
    let chart_window = window::window(hourly, start, window::CHART_HORIZON);

    WeatherReport {
        category,
        comfort,
        wind,
        recommendation,
        hourly: hourly_window,
        chart: chart_window,
    }
}
