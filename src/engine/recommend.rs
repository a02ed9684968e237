//! Clothing and hazard recommendations
//!
//! Combines temperature, apparent temperature, wind force, and dew point
//! into a clothing tip plus zero or more hazard warnings.

use std::fmt;

use serde::Serialize;

/// Badge severity for the recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Normal,
    Caution,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Normal => write!(f, "normal"),
            Severity::Caution => write!(f, "caution"),
        }
    }
}

/// Clothing advice and hazard warnings for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Short badge text
    pub badge: &'static str,
    /// Badge severity
    pub severity: Severity,
    /// Clothing advice
    pub clothing: String,
    /// Active hazard warnings, in fixed order: wind, heat, humidity.
    /// Empty when nothing applies.
    pub hazards: Vec<&'static str>,
}

const COLD_BADGE: &str = "Brrr, ijskoud!";
const COLD_TIP: &str = "Onder de 0\u{b0}C zijn we geen helden: lange broek (tights) is een must! \
    Trek ook een lekker jasje, een muts en handschoentjes aan.";

const CHILLY_BADGE: &str = "Lekker frisjes hoor!";
const CHILLY_TIP: &str =
    "Korte broek kan prima tot 0 graden voor de bikkels! Maar gooi er wel een jasje overheen.";
const CHILLY_GLOVES_TIP: &str = " Door die gure wind die snijdt zijn handschoentjes misschien \
    toch een goed idee voor je vingertoppen.";

const WARM_BADGE: &str = "Heerlijk renweertje!";
const WARM_TIP: &str = "Boven de 7 graden is het T-shirt weer! Korte broek aan en vlammen maar.";

const WIND_HAZARD: &str =
    "\u{1f4a8} Oei, flinke wind (6+ Bft)! Blijf uit de buurt van krakende takken.";
const HEAT_HAZARD: &str = "\u{1f525} Heet hoor! Drink genoeg water, anders droog je uit.";
const HUMIDITY_HAZARD: &str = "\u{1f4a6} Pfff, wat een luchtvochtigheid. Rustig aan doen!";

/// Build a clothing recommendation and hazard list.
///
/// Clothing tiers are evaluated in order, first match wins: below zero,
/// zero through 7 °C, above 7 °C. The middle tier gains a glove clause
/// when it feels freezing or the wind reaches force 4.
#[must_use]
pub fn recommend(temp_c: f32, apparent_c: f32, wind_force: u8, dew_point_c: f32) -> Recommendation {
    let (badge, severity, clothing) = if temp_c < 0.0 {
        (COLD_BADGE, Severity::Caution, COLD_TIP.to_string())
    } else if temp_c <= 7.0 {
        let mut tip = CHILLY_TIP.to_string();
        if apparent_c < 0.0 || wind_force >= 4 {
            tip.push_str(CHILLY_GLOVES_TIP);
        }
        (CHILLY_BADGE, Severity::Normal, tip)
    } else {
        (WARM_BADGE, Severity::Normal, WARM_TIP.to_string())
    };

    let mut hazards = Vec::new();
    if wind_force >= 6 {
        hazards.push(WIND_HAZARD);
    }
    if temp_c > 25.0 {
        hazards.push(HEAT_HAZARD);
    }
    if dew_point_c > 18.0 {
        hazards.push(HUMIDITY_HAZARD);
    }

    Recommendation {
        badge,
        severity,
        clothing,
        hazards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_tier_wins_regardless_of_other_inputs() {
        let rec = recommend(-1.0, 10.0, 0, 5.0);
        assert_eq!(rec.badge, COLD_BADGE);
        assert_eq!(rec.severity, Severity::Caution);
        assert!(rec.clothing.contains("lange broek"));
    }

    #[test]
    fn test_chilly_tier_adds_gloves_when_it_feels_freezing() {
        let rec = recommend(3.0, -1.0, 0, 5.0);
        assert_eq!(rec.badge, CHILLY_BADGE);
        assert!(rec.clothing.contains("handschoentjes"));
    }

    #[test]
    fn test_chilly_tier_adds_gloves_in_strong_wind() {
        let rec = recommend(3.0, 5.0, 4, 5.0);
        assert!(rec.clothing.contains("handschoentjes"));
    }

    #[test]
    fn test_chilly_tier_without_gloves() {
        let rec = recommend(3.0, 5.0, 2, 5.0);
        assert_eq!(rec.severity, Severity::Normal);
        assert!(!rec.clothing.contains("handschoentjes"));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(recommend(0.0, 5.0, 0, 5.0).badge, CHILLY_BADGE);
        assert_eq!(recommend(7.0, 5.0, 0, 5.0).badge, CHILLY_BADGE);
        assert_eq!(recommend(7.1, 5.0, 0, 5.0).badge, WARM_BADGE);
    }

    #[test]
    fn test_no_hazards_is_a_normal_result() {
        let rec = recommend(15.0, 15.0, 2, 10.0);
        assert!(rec.hazards.is_empty());
    }

    #[test]
    fn test_all_hazards_in_fixed_order() {
        let rec = recommend(30.0, 30.0, 7, 20.0);
        assert_eq!(rec.hazards, vec![WIND_HAZARD, HEAT_HAZARD, HUMIDITY_HAZARD]);
    }

    #[test]
    fn test_single_hazards_trigger_independently() {
        assert_eq!(recommend(15.0, 15.0, 6, 10.0).hazards, vec![WIND_HAZARD]);
        assert_eq!(recommend(26.0, 26.0, 2, 10.0).hazards, vec![HEAT_HAZARD]);
        assert_eq!(
            recommend(15.0, 15.0, 2, 18.5).hazards,
            vec![HUMIDITY_HAZARD]
        );
    }

    #[test]
    fn test_hazard_boundaries_are_exclusive() {
        // Exactly at the thresholds nothing triggers
        let rec = recommend(25.0, 25.0, 5, 18.0);
        assert!(rec.hazards.is_empty());
    }
}
