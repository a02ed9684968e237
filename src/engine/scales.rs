//! Stateless scale converters: wind speed to Beaufort force, temperature
//! pair to the running comfort index.

/// Beaufort scale as ordered `(upper bound km/h, force)` pairs.
///
/// Upper bounds are inclusive except the first step, which is exclusive
/// (calm is anything below 1 km/h). Evaluation is first match wins.
const BEAUFORT_SCALE: [(f32, u8); 12] = [
    (1.0, 0),
    (5.0, 1),
    (11.0, 2),
    (19.0, 3),
    (28.0, 4),
    (38.0, 5),
    (49.0, 6),
    (61.0, 7),
    (74.0, 8),
    (88.0, 9),
    (102.0, 10),
    (117.0, 11),
];

/// Maximum Beaufort force, used for anything above the last breakpoint.
const BEAUFORT_MAX: u8 = 12;

/// Convert a wind speed in km/h to a Beaufort force (0-12).
///
/// Total over all reals: negative speeds fall below the calm threshold
/// and map to force 0.
#[must_use]
pub fn wind_force(speed_kmh: f32) -> u8 {
    let (calm_bound, calm) = BEAUFORT_SCALE[0];
    if speed_kmh < calm_bound {
        return calm;
    }
    for &(upper, force) in &BEAUFORT_SCALE[1..] {
        if speed_kmh <= upper {
            return force;
        }
    }
    BEAUFORT_MAX
}

/// Convert Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Running comfort index: the sum of temperature and dew point, both in
/// Fahrenheit. Only meaningful as input to the comfort band selection.
#[must_use]
pub fn comfort_index(temp_c: f32, dew_point_c: f32) -> f32 {
    celsius_to_fahrenheit(temp_c) + celsius_to_fahrenheit(dew_point_c)
}
