//! Derived view-model types for normalized forecast data
//!
//! These are the row-oriented records handed to rendering code. They are
//! produced fresh on every normalization pass and never mutated afterwards;
//! missing upstream data shows up as `None` fields or shorter vectors,
//! never as an error.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One hour within a day window, re-keyed by hour of day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourPoint {
    /// Hour of day (0-23), taken from this entry's own timestamp
    pub hour_of_day: u32,
    /// Temperature in degrees Celsius, if reported
    pub temperature: Option<f64>,
    /// Precipitation probability percentage (0-100), if reported
    pub precip_probability: Option<f64>,
    /// Precipitation amount in millimetres, if reported
    pub precip_amount: Option<f64>,
}

/// One day of the forward-looking outlook window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOutlook {
    /// Calendar date of this outlook entry
    pub date: NaiveDate,
    /// WMO weather code for the day, if reported
    pub weather_code: Option<i32>,
    /// Maximum temperature in degrees Celsius
    pub temp_max: Option<f64>,
    /// Minimum temperature in degrees Celsius
    pub temp_min: Option<f64>,
    /// Precipitation sum in millimetres
    pub precip_sum: Option<f64>,
    /// Maximum precipitation probability percentage (0-100)
    pub precip_probability_max: Option<f64>,
    /// Sunrise time
    pub sunrise: Option<NaiveDateTime>,
    /// Sunset time
    pub sunset: Option<NaiveDateTime>,
}

/// Short-horizon rain onset/cessation alert
///
/// Recomputed fresh on every normalization pass relative to the reference
/// instant captured at parse time; absent (`None` at the call site) when
/// nothing notable is happening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainAlert {
    /// Human-readable alert text
    pub message: String,
    /// Minutes until the alerted transition (0 for "starting now")
    pub minutes_away: i64,
    /// True when the alert describes rain ending rather than starting
    pub stopping: bool,
}

/// Snapshot of current conditions from the raw document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Timestamp of the snapshot
    pub time: Option<NaiveDateTime>,
    /// Temperature in degrees Celsius
    pub temperature: Option<f64>,
    /// Apparent ("feels like") temperature in degrees Celsius
    pub apparent_temperature: Option<f64>,
    /// Precipitation amount in millimetres
    pub precipitation: Option<f64>,
    /// WMO weather code
    pub weather_code: Option<i32>,
    /// Wind speed in km/h
    pub wind_speed: Option<f64>,
    /// Relative humidity percentage (0-100)
    pub relative_humidity: Option<f64>,
}

/// The fully normalized view handed to rendering collaborators
///
/// Owned exclusively by the caller that requested the normalization; there
/// is no shared state between normalization passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedView {
    /// Current conditions snapshot, if the document carried one
    pub current: Option<CurrentConditions>,
    /// Hourly temperatures for the calendar day before the reference instant
    pub yesterday_hours: Vec<HourPoint>,
    /// Hourly data for the calendar day containing the reference instant
    pub today_hours: Vec<HourPoint>,
    /// Hourly data for the calendar day after the reference instant
    pub tomorrow_hours: Vec<HourPoint>,
    /// Forward-looking daily outlook starting at today
    pub daily: Vec<DayOutlook>,
    /// Short-horizon rain alert, if any
    pub rain_alert: Option<RainAlert>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_hour_point_serialization_roundtrip() {
        let point = HourPoint {
            hour_of_day: 14,
            temperature: Some(18.5),
            precip_probability: Some(40.0),
            precip_amount: None,
        };

        let json = serde_json::to_string(&point).expect("Failed to serialize HourPoint");
        let back: HourPoint = serde_json::from_str(&json).expect("Failed to deserialize HourPoint");

        assert_eq!(back, point);
    }

    #[test]
    fn test_day_outlook_allows_missing_fields() {
        let outlook = DayOutlook {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            weather_code: None,
            temp_max: None,
            temp_min: None,
            precip_sum: None,
            precip_probability_max: None,
            sunrise: None,
            sunset: None,
        };

        let json = serde_json::to_string(&outlook).expect("Failed to serialize DayOutlook");
        let back: DayOutlook =
            serde_json::from_str(&json).expect("Failed to deserialize DayOutlook");

        assert_eq!(back, outlook);
    }

    #[test]
    fn test_rain_alert_roundtrip() {
        let alert = RainAlert {
            message: "Rain expected in 10 min".to_string(),
            minutes_away: 10,
            stopping: false,
        };

        let json = serde_json::to_string(&alert).expect("Failed to serialize RainAlert");
        let back: RainAlert = serde_json::from_str(&json).expect("Failed to deserialize RainAlert");

        assert_eq!(back, alert);
    }
}
