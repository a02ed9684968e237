//! Integration tests: a canned Open-Meteo payload driven end-to-end
//! through deserialization, conversion, and the interpretation engine.

use loopweer::engine;
use loopweer::models::openmeteo::ForecastResponse;
use loopweer::models::{Forecast, Location, PrecipitationUnit};

/// Saturday evening payload: 26 hourly points starting at local midnight,
/// so the series crosses into Sunday.
const FORECAST_JSON: &str = r#"{
    "latitude": 52.3676,
    "longitude": 4.9041,
    "timezone": "Europe/Amsterdam",
    "current": {
        "time": "2024-06-01T20:15",
        "temperature_2m": 3.2,
        "relative_humidity_2m": 85,
        "apparent_temperature": -1.4,
        "is_day": 0,
        "weather_code": 61,
        "wind_speed_10m": 20.4,
        "wind_direction_10m": 240
    },
    "hourly": {
        "time": [
            "2024-06-01T00:00", "2024-06-01T01:00", "2024-06-01T02:00", "2024-06-01T03:00",
            "2024-06-01T04:00", "2024-06-01T05:00", "2024-06-01T06:00", "2024-06-01T07:00",
            "2024-06-01T08:00", "2024-06-01T09:00", "2024-06-01T10:00", "2024-06-01T11:00",
            "2024-06-01T12:00", "2024-06-01T13:00", "2024-06-01T14:00", "2024-06-01T15:00",
            "2024-06-01T16:00", "2024-06-01T17:00", "2024-06-01T18:00", "2024-06-01T19:00",
            "2024-06-01T20:00", "2024-06-01T21:00", "2024-06-01T22:00", "2024-06-01T23:00",
            "2024-06-02T00:00", "2024-06-02T01:00"
        ],
        "temperature_2m": [
            6.0, 5.8, 5.5, 5.2, 5.0, 4.8, 5.0, 5.5, 6.2, 7.0, 7.8, 8.5,
            9.0, 9.2, 9.0, 8.5, 7.6, 6.5, 5.5, 4.5, 3.0, 2.5, 2.0, 1.5,
            1.0, 0.8
        ],
        "weather_code": [
            3, 3, 3, 61, 61, 61, 61, 3, 3, 2, 2, 2,
            1, 1, 1, 2, 2, 3, 61, 61, 61, 61, 63, 63,
            71, 71
        ],
        "dew_point_2m": [
            4.0, 4.0, 3.8, 3.8, 3.5, 3.5, 3.2, 3.0, 3.0, 3.2, 3.5, 3.5,
            3.2, 3.0, 2.8, 2.5, 2.5, 2.2, 2.2, 2.0, 2.0, 1.8, 1.5, 1.2,
            1.0, 0.8
        ],
        "precipitation": [
            0.0, 0.0, 0.0, 0.2, 0.4, 0.3, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6,
            0.2, 0.1
        ],
        "precipitation_probability": [
            5.0, 5.0, 5.0, 40.0, 60.0, 55.0, 30.0, 10.0, 5.0, 5.0, 5.0, 5.0,
            5.0, 5.0, 5.0, 5.0, 5.0, 10.0, 35.0, 45.0, 55.0, 65.0, 70.0, 75.0,
            50.0, 30.0
        ]
    }
}"#;

fn amsterdam() -> Location {
    Location::new(52.3676, 4.9041, "Amsterdam".to_string())
}

fn parse_forecast(unit: PrecipitationUnit) -> Forecast {
    let response: ForecastResponse =
        serde_json::from_str(FORECAST_JSON).expect("fixture should deserialize");
    Forecast::from_openmeteo(&response, amsterdam(), unit).expect("fixture should convert")
}

/// The snapshot picks up current conditions plus the hourly dew point and
/// precipitation at the current hour.
#[test]
fn test_snapshot_conversion() {
    let forecast = parse_forecast(PrecipitationUnit::Millimeters);
    let current = &forecast.current;

    assert_eq!(current.temperature, 3.2);
    assert_eq!(current.apparent_temperature, -1.4);
    assert_eq!(current.wind_speed_kmh, 20.4);
    assert_eq!(current.wind_direction_deg, Some(240));
    assert_eq!(current.weather_code, 61);
    assert_eq!(current.reference_hour, 20);
    assert_eq!(current.dew_point, 2.0);
    assert_eq!(current.precipitation, 0.3);
}

/// Full engine run over the payload.
#[test]
fn test_interpret_full_report() {
    let forecast = parse_forecast(PrecipitationUnit::Millimeters);
    let report = engine::interpret(&forecast.current, &forecast.hourly);

    // Rain category for code 61
    assert_eq!(report.category.label, "Regen! Gratis verfrissing");
    assert_eq!(report.category.icon, "cloud-rain");

    // 20.4 km/h is force 4, blowing from the west-southwest
    assert_eq!(report.wind.force, 4);
    assert_eq!(report.wind.speed_kmh, 20.4);
    assert_eq!(report.wind.cardinal, Some("WZW"));

    // 3.2 °C + 2.0 °C dew point stays well below the first comfort bound
    assert_eq!(report.comfort.label, "Perfect: gaan met die banaan!");

    // Chilly tier, with the glove clause (feels like -1.4 °C)
    assert_eq!(report.recommendation.badge, "Lekker frisjes hoor!");
    assert!(report.recommendation.clothing.contains("handschoentjes"));
    assert!(report.recommendation.hazards.is_empty());
}

/// Windows start at the current hour and truncate at the series end.
#[test]
fn test_display_windows() {
    let forecast = parse_forecast(PrecipitationUnit::Millimeters);
    let report = engine::interpret(&forecast.current, &forecast.hourly);

    // 26 hourly points, starting at hour 20: six entries remain
    assert_eq!(report.hourly.len(), 6);
    assert_eq!(report.chart.len(), 6);

    let labels: Vec<&str> = report
        .hourly
        .entries
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["20:00", "21:00", "22:00", "23:00", "zo 0:00", "1:00"]
    );

    assert_eq!(report.hourly.entries[0].temperature, 3.0);
    assert_eq!(report.hourly.entries[0].precipitation, 0.3);

    // Code 71 at Sunday midnight is the snow category
    assert_eq!(
        report.hourly.entries[4].category.label,
        "Sneeuw! Pas op voor de gladheid"
    );

    // Code 63 has no table entry and falls back
    assert_eq!(
        report.hourly.entries[2].category.label,
        "Vreemd weertje vandaag"
    );
}

/// The same payload served as probabilities: the series swaps column and
/// unit, and everything downstream tags along.
#[test]
fn test_probability_unit_passes_through() {
    let forecast = parse_forecast(PrecipitationUnit::Percent);
    let report = engine::interpret(&forecast.current, &forecast.hourly);

    assert_eq!(report.hourly.precipitation_unit, PrecipitationUnit::Percent);
    assert_eq!(report.hourly.entries[0].precipitation, 55.0);
    assert_eq!(forecast.current.precipitation, 55.0);
}

/// Identical inputs give identical reports; the engine holds no state.
#[test]
fn test_interpret_is_idempotent() {
    let forecast = parse_forecast(PrecipitationUnit::Millimeters);
    let first = engine::interpret(&forecast.current, &forecast.hourly);
    let second = engine::interpret(&forecast.current, &forecast.hourly);
    assert_eq!(first, second);
}
