//! Raincheck: forecast normalization and rain alerting for Open-Meteo data
//!
//! Takes one raw forecast payload (hourly, 15-minute, and daily columnar
//! series anchored to absolute timestamps) plus an explicit reference
//! instant, and produces a normalized view: three aligned 24-hour
//! temperature windows (yesterday, today, tomorrow), a 7-day outlook, and a
//! short-horizon rain onset/cessation alert.
//!
//! The engine is a pure, synchronous pipeline; the only I/O lives in the
//! optional [`client`] module that fetches the raw document.

pub mod align;
pub mod client;
pub mod codes;
pub mod daily;
pub mod document;
pub mod model;
pub mod normalize;
pub mod rain;

pub use client::{ClientError, ForecastClient, GeoMatch};
pub use document::{DocumentError, RawForecastDocument};
pub use model::{CurrentConditions, DayOutlook, HourPoint, NormalizedView, RainAlert};
pub use normalize::{NormalizeError, Normalizer, Strictness};
