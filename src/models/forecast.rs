//! Retrieved forecast bundle

use serde::{Deserialize, Serialize};

use super::{HourlySeries, Location, WeatherSnapshot};

/// One retrieved forecast: the location it was fetched for, the current
/// conditions snapshot, and the hourly series behind the displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Location for this forecast
    pub location: Location,
    /// Current conditions
    pub current: WeatherSnapshot,
    /// Hourly series (typically two days from local midnight)
    pub hourly: HourlySeries,
}

impl Forecast {
    /// Create a new forecast bundle
    #[must_use]
    pub fn new(location: Location, current: WeatherSnapshot, hourly: HourlySeries) -> Self {
        Self {
            location,
            current,
            hourly,
        }
    }
}
