//! Weather code classifier
//!
//! Maps Open-Meteo weather condition codes to a display category. Codes
//! without a table entry get the generic fallback category, never an error.

use serde::Serialize;

/// Display category for a weather condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCategory {
    /// Human-readable condition description
    pub label: &'static str,
    /// Emoji glyph for compact displays (hourly strip)
    pub glyph: &'static str,
    /// Icon identifier for the large condition icon
    pub icon: &'static str,
}

/// Known condition codes as ordered `(code, category)` pairs.
const WEATHER_CODES: [(u16, WeatherCategory); 9] = [
    (
        0,
        WeatherCategory {
            label: "Strakblauwe lucht, heerlijk!",
            glyph: "\u{2600}\u{fe0f}",
            icon: "sun",
        },
    ),
    (
        1,
        WeatherCategory {
            label: "Appeltje-eitje zonnetje",
            glyph: "\u{1f324}\u{fe0f}",
            icon: "sun",
        },
    ),
    (
        2,
        WeatherCategory {
            label: "Wat wolkjes, prima zo",
            glyph: "\u{26c5}",
            icon: "cloud",
        },
    ),
    (
        3,
        WeatherCategory {
            label: "Helemaal grijs, maar ach",
            glyph: "\u{2601}\u{fe0f}",
            icon: "cloud",
        },
    ),
    (
        45,
        WeatherCategory {
            label: "Mist! Pas op de paaltjes",
            glyph: "\u{1f32b}\u{fe0f}",
            icon: "cloud",
        },
    ),
    (
        51,
        WeatherCategory {
            label: "Miezeren, word je hard van!",
            glyph: "\u{1f326}\u{fe0f}",
            icon: "cloud-drizzle",
        },
    ),
    (
        61,
        WeatherCategory {
            label: "Regen! Gratis verfrissing",
            glyph: "\u{1f327}\u{fe0f}",
            icon: "cloud-rain",
        },
    ),
    (
        71,
        WeatherCategory {
            label: "Sneeuw! Pas op voor de gladheid",
            glyph: "\u{2744}\u{fe0f}",
            icon: "snowflake",
        },
    ),
    (
        95,
        WeatherCategory {
            label: "Onweer! Blijf maar lekker binnen",
            glyph: "\u{26c8}\u{fe0f}",
            icon: "cloud-lightning",
        },
    ),
];

/// Fallback for codes not present in the table.
const UNKNOWN_CATEGORY: WeatherCategory = WeatherCategory {
    label: "Vreemd weertje vandaag",
    glyph: "\u{1f321}\u{fe0f}",
    icon: "thermometer",
};

/// Classify a weather condition code into its display category.
///
/// Total function: unknown codes map to the fallback category.
#[must_use]
pub fn classify(code: u16) -> WeatherCategory {
    WEATHER_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(UNKNOWN_CATEGORY, |(_, category)| *category)
}

/// The category used for unknown or missing condition codes.
#[must_use]
pub fn unknown_category() -> WeatherCategory {
    UNKNOWN_CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for (code, category) in &WEATHER_CODES {
            assert_eq!(classify(*code), *category);
        }
    }

    #[test]
    fn test_clear_sky() {
        let category = classify(0);
        assert_eq!(category.label, "Strakblauwe lucht, heerlijk!");
        assert_eq!(category.icon, "sun");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(classify(999), unknown_category());
        assert_eq!(classify(999).icon, "thermometer");
    }

    #[test]
    fn test_unlisted_drizzle_variant_falls_back() {
        // 53 (moderate drizzle) is not in the table, only 51 is
        assert_eq!(classify(53), unknown_category());
    }
}
