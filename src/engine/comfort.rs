//! Running comfort engine
//!
//! Rates how pleasant it is to run by summing temperature and dew point in
//! Fahrenheit and selecting one of ten severity bands. The thresholds are
//! empirically tuned; treat them as fixed constants.

use std::fmt;

use serde::Serialize;

use super::scales;

/// Coarse severity class behind a comfort band, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComfortClass {
    VeryComfortable,
    Comfortable,
    Humid,
    Uncomfortable,
    Oppressive,
}

impl fmt::Display for ComfortClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComfortClass::VeryComfortable => write!(f, "very-comfortable"),
            ComfortClass::Comfortable => write!(f, "comfortable"),
            ComfortClass::Humid => write!(f, "humid"),
            ComfortClass::Uncomfortable => write!(f, "uncomfortable"),
            ComfortClass::Oppressive => write!(f, "oppressive"),
        }
    }
}

/// One comfort band: label plus the pace adjustment that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComfortRating {
    /// Band label
    pub label: &'static str,
    /// Pace adjustment advice for this band
    pub pace_note: &'static str,
    /// Severity class
    pub class: ComfortClass,
}

/// Comfort bands as ordered `(inclusive upper bound, rating)` pairs over
/// the Fahrenheit sum. First match wins, so a sum of exactly 100 lands in
/// the mildest band.
const COMFORT_BANDS: [(f32, ComfortRating); 9] = [
    (
        100.0,
        ComfortRating {
            label: "Perfect: gaan met die banaan!",
            pace_note: "Lekker knallen op volle snelheid!",
            class: ComfortClass::VeryComfortable,
        },
    ),
    (
        110.0,
        ComfortRating {
            label: "Prima renweertje",
            pace_note: "Tempo: 0% - 0.5% langzamer",
            class: ComfortClass::Comfortable,
        },
    ),
    (
        120.0,
        ComfortRating {
            label: "Beetje klammig hoor",
            pace_note: "Tempo: 0.5% - 1.0% langzamer",
            class: ComfortClass::Humid,
        },
    ),
    (
        130.0,
        ComfortRating {
            label: "Lekker warmpjes!",
            pace_note: "Tempo: 1.0% - 2.0% langzamer",
            class: ComfortClass::Uncomfortable,
        },
    ),
    (
        140.0,
        ComfortRating {
            label: "Plakkerig!",
            pace_note: "Tempo: 2.0% - 3.0% langzamer",
            class: ComfortClass::Uncomfortable,
        },
    ),
    (
        150.0,
        ComfortRating {
            label: "Pittig hoor, rustig aan!",
            pace_note: "Tempo: 3.0% - 4.5% langzamer",
            class: ComfortClass::Oppressive,
        },
    ),
    (
        160.0,
        ComfortRating {
            label: "Zwaar hoor, pas op jezelf",
            pace_note: "Tempo: 4.5% - 6.0% langzamer",
            class: ComfortClass::Oppressive,
        },
    ),
    (
        170.0,
        ComfortRating {
            label: "Poeh, echt afzien dit!",
            pace_note: "Tempo: 6.0% - 8.0% langzamer",
            class: ComfortClass::Oppressive,
        },
    ),
    (
        180.0,
        ComfortRating {
            label: "Extreem! Blijf drinken!",
            pace_note: "Tempo: 8.0% - 10.0% langzamer",
            class: ComfortClass::Oppressive,
        },
    ),
];

/// Open-ended band above the last breakpoint.
const BEYOND_LIMIT: ComfortRating = ComfortRating {
    label: "Niet doen! Veel te risicovol",
    pace_note: "Stop met rennen, zoek de schaduw!",
    class: ComfortClass::Oppressive,
};

/// Rate running comfort for a temperature / dew point pair (both °C).
#[must_use]
pub fn comfort_rating(temp_c: f32, dew_point_c: f32) -> ComfortRating {
    let sum = scales::comfort_index(temp_c, dew_point_c);
    for &(upper, rating) in &COMFORT_BANDS {
        if sum <= upper {
            return rating;
        }
    }
    BEYOND_LIMIT
}
