//! Daily outlook extractor: forward-looking window over the daily series

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::DayOutlook;

/// Default number of days in the outlook window
pub const DEFAULT_OUTLOOK_DAYS: usize = 7;

/// Finds the first index whose date equals the given calendar day.
pub fn find_date_index(days: &[DayOutlook], date: NaiveDate) -> Option<usize> {
    days.iter().position(|day| day.date == date)
}

/// Extracts up to `window` consecutive outlook entries starting at the
/// reference instant's calendar day.
///
/// When that day is absent from the series the window starts at index 0
/// instead. Fewer than `window` remaining entries yields a shorter vector,
/// not an error.
pub fn extract_daily(
    days: &[DayOutlook],
    reference: NaiveDateTime,
    window: usize,
) -> Vec<DayOutlook> {
    let start = find_date_index(days, reference.date()).unwrap_or(0);
    days.iter().skip(start).take(window).cloned().collect()
}
