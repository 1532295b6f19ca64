//! Raw Open-Meteo forecast document and its row-oriented translation
//!
//! The upstream payload is columnar: each series is a set of equal-length
//! arrays keyed by variable name, sharing one array of zone-less ISO-8601
//! timestamps. This module isolates that awkward indexing to one boundary
//! step, turning each series into a sequence of typed row records before any
//! windowing logic runs.
//!
//! Absent blocks and absent or null-bearing columns degrade to empty vectors
//! and `None` fields. Unparseable timestamps are the one fatal failure: the
//! engine does not attempt timestamp repair.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{CurrentConditions, DayOutlook};

/// Errors produced while translating a raw document into rows
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A timestamp column entry could not be parsed
    #[error("Invalid timestamp in document: {0}")]
    InvalidTimestamp(String),

    /// A date column entry could not be parsed
    #[error("Invalid date in document: {0}")]
    InvalidDate(String),
}

/// Raw forecast payload as returned by the Open-Meteo forecast endpoint
///
/// Every block is optional so a partial payload still translates into a
/// partial (possibly empty) view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawForecastDocument {
    /// Current conditions snapshot
    #[serde(default)]
    pub current: Option<CurrentBlock>,
    /// Hourly series, spanning at least one past day plus the forecast horizon
    #[serde(default)]
    pub hourly: Option<HourlyBlock>,
    /// 15-minute resolution precipitation series for the next few hours
    #[serde(default)]
    pub minutely_15: Option<FineGrainedBlock>,
    /// Daily series spanning the forecast horizon
    #[serde(default)]
    pub daily: Option<DailyBlock>,
}

/// Current conditions block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentBlock {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<i32>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Option<f64>,
}

/// Hourly columnar series
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyBlock {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub precipitation_probability: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub precipitation: Option<Vec<Option<f64>>>,
}

/// 15-minute resolution columnar series
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FineGrainedBlock {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub precipitation_probability: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub precipitation: Option<Vec<Option<f64>>>,
}

/// Daily columnar series
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyBlock {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub weather_code: Option<Vec<Option<i32>>>,
    #[serde(default)]
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub precipitation_probability_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub sunrise: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub sunset: Option<Vec<Option<String>>>,
}

/// One hourly entry as a typed row
#[derive(Debug, Clone, PartialEq)]
pub struct HourSample {
    pub time: NaiveDateTime,
    pub temperature: Option<f64>,
    pub precip_probability: Option<f64>,
    pub precip_amount: Option<f64>,
}

/// One 15-minute entry as a typed row
#[derive(Debug, Clone, PartialEq)]
pub struct FineSample {
    pub time: NaiveDateTime,
    pub precip_probability: Option<f64>,
    pub precip_amount: Option<f64>,
}

impl RawForecastDocument {
    /// Translates the hourly block into typed rows, one per timestamp.
    ///
    /// An absent hourly block yields an empty vector. Columns shorter than
    /// the timestamp array yield `None` for the missing tail.
    pub fn hour_samples(&self) -> Result<Vec<HourSample>, DocumentError> {
        let Some(hourly) = &self.hourly else {
            return Ok(Vec::new());
        };

        let mut samples = Vec::with_capacity(hourly.time.len());
        for (i, stamp) in hourly.time.iter().enumerate() {
            samples.push(HourSample {
                time: parse_datetime(stamp)?,
                temperature: float_cell(&hourly.temperature_2m, i),
                precip_probability: float_cell(&hourly.precipitation_probability, i),
                precip_amount: float_cell(&hourly.precipitation, i),
            });
        }
        Ok(samples)
    }

    /// Translates the 15-minute block into typed rows.
    pub fn fine_samples(&self) -> Result<Vec<FineSample>, DocumentError> {
        let Some(fine) = &self.minutely_15 else {
            return Ok(Vec::new());
        };

        let mut samples = Vec::with_capacity(fine.time.len());
        for (i, stamp) in fine.time.iter().enumerate() {
            samples.push(FineSample {
                time: parse_datetime(stamp)?,
                precip_probability: float_cell(&fine.precipitation_probability, i),
                precip_amount: float_cell(&fine.precipitation, i),
            });
        }
        Ok(samples)
    }

    /// Translates the daily block into [`DayOutlook`] rows, field for field.
    pub fn day_outlooks(&self) -> Result<Vec<DayOutlook>, DocumentError> {
        let Some(daily) = &self.daily else {
            return Ok(Vec::new());
        };

        let mut outlooks = Vec::with_capacity(daily.time.len());
        for (i, stamp) in daily.time.iter().enumerate() {
            outlooks.push(DayOutlook {
                date: parse_date(stamp)?,
                weather_code: daily
                    .weather_code
                    .as_ref()
                    .and_then(|col| col.get(i))
                    .copied()
                    .flatten(),
                temp_max: float_cell(&daily.temperature_2m_max, i),
                temp_min: float_cell(&daily.temperature_2m_min, i),
                precip_sum: float_cell(&daily.precipitation_sum, i),
                precip_probability_max: float_cell(&daily.precipitation_probability_max, i),
                sunrise: datetime_cell(&daily.sunrise, i)?,
                sunset: datetime_cell(&daily.sunset, i)?,
            });
        }
        Ok(outlooks)
    }

    /// Translates the current block into a typed snapshot, if present.
    pub fn current_conditions(&self) -> Result<Option<CurrentConditions>, DocumentError> {
        let Some(current) = &self.current else {
            return Ok(None);
        };

        let time = match &current.time {
            Some(stamp) => Some(parse_datetime(stamp)?),
            None => None,
        };

        Ok(Some(CurrentConditions {
            time,
            temperature: current.temperature_2m,
            apparent_temperature: current.apparent_temperature,
            precipitation: current.precipitation,
            weather_code: current.weather_code,
            wind_speed: current.wind_speed_10m,
            relative_humidity: current.relative_humidity_2m,
        }))
    }
}

/// Reads one value from an optional numeric column, tolerating a missing
/// column, a short column, and a null entry alike.
fn float_cell(column: &Option<Vec<Option<f64>>>, index: usize) -> Option<f64> {
    column
        .as_ref()
        .and_then(|col| col.get(index))
        .copied()
        .flatten()
}

/// Reads and parses one timestamp from an optional string column.
fn datetime_cell(
    column: &Option<Vec<Option<String>>>,
    index: usize,
) -> Result<Option<NaiveDateTime>, DocumentError> {
    match column.as_ref().and_then(|col| col.get(index)) {
        Some(Some(stamp)) => Ok(Some(parse_datetime(stamp)?)),
        _ => Ok(None),
    }
}

/// Parses a zone-less ISO 8601 datetime (e.g. "2024-01-15T14:30")
pub(crate) fn parse_datetime(stamp: &str) -> Result<NaiveDateTime, DocumentError> {
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M")
        .map_err(|_| DocumentError::InvalidTimestamp(stamp.to_string()))
}

/// Parses a day-granularity date (e.g. "2024-01-15")
fn parse_date(stamp: &str) -> Result<NaiveDate, DocumentError> {
    NaiveDate::parse_from_str(stamp, "%Y-%m-%d")
        .map_err(|_| DocumentError::InvalidDate(stamp.to_string()))
}
