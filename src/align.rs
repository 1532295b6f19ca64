//! Series aligner: slices the flat hourly series into day windows
//!
//! Splits one hourly array (ascending by timestamp) into three 24-hour
//! windows relative to a reference instant: yesterday, today, and tomorrow.
//! Windows that run past either end of the input are simply shorter; the
//! aligner never pads and never fails.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::document::HourSample;
use crate::model::HourPoint;

/// Index of the second day in a series carrying one past day, used as the
/// fallback start when the reference day cannot be located
const FALLBACK_TODAY_START: usize = 24;

/// The three aligned day windows
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedHours {
    /// The calendar day before the reference instant (temperature only)
    pub yesterday: Vec<HourPoint>,
    /// The calendar day containing the reference instant
    pub today: Vec<HourPoint>,
    /// The calendar day after the reference instant
    pub tomorrow: Vec<HourPoint>,
}

/// Finds the first index whose timestamp falls on the given calendar day.
pub fn find_day_start(hours: &[HourSample], day: NaiveDate) -> Option<usize> {
    hours.iter().position(|sample| sample.time.date() == day)
}

/// Aligns the hourly series into yesterday/today/tomorrow windows around the
/// reference instant.
///
/// "Today" starts at the first entry whose timestamp shares the reference
/// instant's calendar day; when no such entry exists the aligner falls back
/// to index 24 (the second day of a series carrying one past day). Each
/// window is re-keyed by hour of day taken from its own timestamp, so a
/// repeated or skipped hour around a timezone transition is preserved as-is.
pub fn align(hours: &[HourSample], reference: NaiveDateTime) -> AlignedHours {
    let today_start =
        find_day_start(hours, reference.date()).unwrap_or(FALLBACK_TODAY_START);

    let len = hours.len();
    let today_start = today_start.min(len);
    let tomorrow_start = (today_start + 24).min(len);
    let tomorrow_end = (today_start + 48).min(len);

    let yesterday = hours[today_start.saturating_sub(24)..today_start]
        .iter()
        .map(|sample| HourPoint {
            hour_of_day: sample.time.hour(),
            temperature: sample.temperature,
            precip_probability: None,
            precip_amount: None,
        })
        .collect();

    let today = hours[today_start..tomorrow_start]
        .iter()
        .map(|sample| HourPoint {
            hour_of_day: sample.time.hour(),
            temperature: sample.temperature,
            precip_probability: sample.precip_probability,
            precip_amount: sample.precip_amount,
        })
        .collect();

    let tomorrow = hours[tomorrow_start..tomorrow_end]
        .iter()
        .map(|sample| HourPoint {
            hour_of_day: sample.time.hour(),
            temperature: sample.temperature,
            precip_probability: sample.precip_probability,
            precip_amount: None,
        })
        .collect();

    AlignedHours {
        yesterday,
        today,
        tomorrow,
    }
}
