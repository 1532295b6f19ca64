//! View model assembler
//!
//! Composes the document translation, series aligner, daily extractor, and
//! rain alert inferrer into one [`NormalizedView`]. A single raw document
//! plus one reference instant in, one immutable view out; the assembler
//! holds no state between calls and performs no I/O.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::align;
use crate::daily::{self, DEFAULT_OUTLOOK_DAYS};
use crate::document::{DocumentError, RawForecastDocument};
use crate::model::NormalizedView;
use crate::rain;

/// How to treat a reference instant whose calendar day is absent from the
/// hourly or daily series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Fall back to fixed indices (hourly index 24, daily index 0), as the
    /// upstream payload shape makes those the likely intended windows
    #[default]
    Lenient,
    /// Refuse with [`NormalizeError::ReferenceOutOfRange`]
    Strict,
}

/// Errors produced while assembling a normalized view
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The raw document could not be translated into rows
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Strict mode: the reference instant's calendar day is not covered by
    /// the document
    #[error("Reference instant {reference} is outside the document's {series} series")]
    ReferenceOutOfRange {
        reference: NaiveDateTime,
        series: &'static str,
    },
}

/// Assembles normalized views from raw forecast documents
///
/// # Example
///
/// ```
/// use raincheck::normalize::{Normalizer, Strictness};
///
/// let normalizer = Normalizer::new().with_strictness(Strictness::Strict);
/// let doc: raincheck::document::RawForecastDocument =
///     serde_json::from_str("{}").unwrap();
/// let reference = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let view = normalizer.normalize(&doc, reference).unwrap();
/// assert!(view.today_hours.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    strictness: Strictness,
}

impl Normalizer {
    /// Creates a normalizer with the default lenient fallback behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how an out-of-range reference instant is handled.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Normalizes one raw document relative to the reference instant.
    ///
    /// Short or absent series degrade to shorter windows and `None` fields;
    /// the only failures are unparseable timestamps and, in strict mode, a
    /// reference instant whose day the document does not cover.
    pub fn normalize(
        &self,
        document: &RawForecastDocument,
        reference: NaiveDateTime,
    ) -> Result<NormalizedView, NormalizeError> {
        let hours = document.hour_samples()?;
        let days = document.day_outlooks()?;
        let fine = document.fine_samples()?;
        let current = document.current_conditions()?;

        if self.strictness == Strictness::Strict {
            if !hours.is_empty() && align::find_day_start(&hours, reference.date()).is_none() {
                return Err(NormalizeError::ReferenceOutOfRange {
                    reference,
                    series: "hourly",
                });
            }
            if !days.is_empty() && daily::find_date_index(&days, reference.date()).is_none() {
                return Err(NormalizeError::ReferenceOutOfRange {
                    reference,
                    series: "daily",
                });
            }
        }

        let aligned = align::align(&hours, reference);
        let outlook = daily::extract_daily(&days, reference, DEFAULT_OUTLOOK_DAYS);
        let rain_alert = rain::infer_rain_alert(&fine, reference);

        Ok(NormalizedView {
            current,
            yesterday_hours: aligned.yesterday,
            today_hours: aligned.today,
            tomorrow_hours: aligned.tomorrow,
            daily: outlook,
            rain_alert,
        })
    }
}
