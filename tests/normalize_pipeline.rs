//! Full-document integration test: raw Open-Meteo JSON in, normalized view out

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::json;

use raincheck::codes;
use raincheck::{NormalizedView, Normalizer, RawForecastDocument};

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(13, 0, 0)
        .unwrap()
}

/// Builds a realistic full-coverage payload: one past day plus eight
/// forecast days of hourly data, four hours of 15-minute data, nine daily
/// entries, and a current snapshot.
fn full_document() -> RawForecastDocument {
    let hourly_start = NaiveDate::from_ymd_opt(2024, 1, 14)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let mut hourly_times = Vec::new();
    let mut hourly_temps = Vec::new();
    let mut hourly_probs = Vec::new();
    let mut hourly_precip = Vec::new();
    for i in 0..(24 * 9) {
        let t = hourly_start + Duration::hours(i);
        hourly_times.push(t.format("%Y-%m-%dT%H:%M").to_string());
        hourly_temps.push(5.0 + (i % 24) as f64 * 0.5);
        hourly_probs.push(10.0);
        hourly_precip.push(0.0);
    }

    // 15-minute slots covering one hour behind and three ahead of the
    // reference instant; the slot 30 minutes out crosses the probability
    // trigger.
    let fine_start = reference() - Duration::hours(1);
    let mut fine_times = Vec::new();
    let mut fine_probs = Vec::new();
    let mut fine_precip = Vec::new();
    for i in 0..16 {
        let t = fine_start + Duration::minutes(15 * i);
        fine_times.push(t.format("%Y-%m-%dT%H:%M").to_string());
        let minutes_from_reference = (t - reference()).num_minutes();
        fine_probs.push(if minutes_from_reference == 30 { 60.0 } else { 5.0 });
        fine_precip.push(0.0);
    }

    let mut daily_times = Vec::new();
    for i in 0..9 {
        let d = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap() + Duration::days(i);
        daily_times.push(d.format("%Y-%m-%d").to_string());
    }

    let payload = json!({
        "current": {
            "time": "2024-01-15T13:00",
            "temperature_2m": 7.4,
            "apparent_temperature": 4.9,
            "precipitation": 0.0,
            "weather_code": 3,
            "wind_speed_10m": 21.0,
            "relative_humidity_2m": 78.0
        },
        "hourly": {
            "time": hourly_times,
            "temperature_2m": hourly_temps,
            "precipitation_probability": hourly_probs,
            "precipitation": hourly_precip
        },
        "minutely_15": {
            "time": fine_times,
            "precipitation_probability": fine_probs,
            "precipitation": fine_precip
        },
        "daily": {
            "time": daily_times,
            "weather_code": [61, 63, 3, 2, 1, 0, 80, 95, 45],
            "temperature_2m_max": [8.0, 9.0, 10.0, 11.0, 12.0, 11.0, 10.0, 9.0, 8.0],
            "temperature_2m_min": [2.0, 3.0, 4.0, 5.0, 6.0, 5.0, 4.0, 3.0, 2.0],
            "precipitation_sum": [4.0, 2.5, 0.0, 0.0, 0.0, 0.0, 1.2, 6.0, 0.0],
            "precipitation_probability_max": [90.0, 75.0, 10.0, 5.0, 5.0, 5.0, 45.0, 85.0, 20.0],
            "sunrise": [
                "2024-01-14T08:02", "2024-01-15T08:01", "2024-01-16T08:00",
                "2024-01-17T07:59", "2024-01-18T07:58", "2024-01-19T07:57",
                "2024-01-20T07:55", "2024-01-21T07:54", "2024-01-22T07:53"
            ],
            "sunset": [
                "2024-01-14T16:19", "2024-01-15T16:21", "2024-01-16T16:23",
                "2024-01-17T16:24", "2024-01-18T16:26", "2024-01-19T16:28",
                "2024-01-20T16:30", "2024-01-21T16:31", "2024-01-22T16:33"
            ]
        }
    });

    serde_json::from_value(payload).expect("Failed to parse full document")
}

fn normalize_full() -> NormalizedView {
    Normalizer::new()
        .normalize(&full_document(), reference())
        .expect("Full document should normalize")
}

#[test]
fn full_document_yields_three_complete_day_windows() {
    let view = normalize_full();

    assert_eq!(view.yesterday_hours.len(), 24);
    assert_eq!(view.today_hours.len(), 24);
    assert_eq!(view.tomorrow_hours.len(), 24);

    for window in [&view.yesterday_hours, &view.today_hours, &view.tomorrow_hours] {
        for (i, point) in window.iter().enumerate() {
            assert_eq!(point.hour_of_day, i as u32);
        }
    }

    // Yesterday is temperature-only; today carries precipitation fields
    assert!(view.yesterday_hours[0].temperature.is_some());
    assert!(view.yesterday_hours[0].precip_probability.is_none());
    assert!(view.today_hours[0].precip_probability.is_some());
    assert!(view.today_hours[0].precip_amount.is_some());
    assert!(view.tomorrow_hours[0].precip_probability.is_some());
    assert!(view.tomorrow_hours[0].precip_amount.is_none());
}

#[test]
fn daily_window_skips_the_past_day_and_spans_a_week() {
    let view = normalize_full();

    assert_eq!(view.daily.len(), 7);
    assert_eq!(
        view.daily[0].date,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );
    assert_eq!(view.daily[0].weather_code, Some(63));
    assert!((view.daily[0].temp_max.unwrap() - 9.0).abs() < 0.01);
    assert!((view.daily[0].precip_probability_max.unwrap() - 75.0).abs() < 0.01);
    assert_eq!(
        view.daily[6].date,
        NaiveDate::from_ymd_opt(2024, 1, 21).unwrap()
    );
}

#[test]
fn rain_alert_fires_from_the_fine_grained_series() {
    let view = normalize_full();

    let alert = view.rain_alert.expect("Expected a rain alert");
    assert_eq!(alert.message, "Rain expected in 30 min");
    assert_eq!(alert.minutes_away, 30);
    assert!(!alert.stopping);
}

#[test]
fn current_conditions_pass_through() {
    let view = normalize_full();

    let current = view.current.expect("Expected current conditions");
    assert!((current.temperature.unwrap() - 7.4).abs() < 0.01);
    assert!((current.apparent_temperature.unwrap() - 4.9).abs() < 0.01);
    assert_eq!(current.weather_code, Some(3));

    // The catalog resolves the code independently of normalization
    let info = codes::lookup(current.weather_code.unwrap());
    assert_eq!(info.label, "Overcast");
    assert!(!codes::is_rainy(current.weather_code.unwrap()));
}

#[test]
fn partial_document_still_renders_a_partial_view() {
    let payload = json!({
        "hourly": {
            "time": ["2024-01-15T00:00", "2024-01-15T01:00"],
            "temperature_2m": [5.0, null]
        }
    });
    let doc: RawForecastDocument =
        serde_json::from_value(payload).expect("Failed to parse partial document");

    let view = Normalizer::new()
        .normalize(&doc, reference())
        .expect("Partial document should normalize");

    assert!(view.current.is_none());
    assert!(view.yesterday_hours.is_empty());
    assert_eq!(view.today_hours.len(), 2);
    assert_eq!(view.today_hours[1].temperature, None);
    assert!(view.tomorrow_hours.is_empty());
    assert!(view.daily.is_empty());
    assert!(view.rain_alert.is_none());
}

#[test]
fn normalization_is_repeatable() {
    let doc = full_document();
    let normalizer = Normalizer::new();

    let first = normalizer.normalize(&doc, reference()).unwrap();
    let second = normalizer.normalize(&doc, reference()).unwrap();

    assert_eq!(first, second);
}
