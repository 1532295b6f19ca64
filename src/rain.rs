//! Rain alert inferrer: short-horizon onset/cessation detection
//!
//! Scans the 15-minute precipitation series relative to a reference instant
//! and decides, in strict precedence order, whether rain is imminent,
//! ongoing, or ending soon. Absence of an alert is a valid, common outcome.
//!
//! The thresholds below are fixed policy, not configuration.

use chrono::NaiveDateTime;

use crate::document::FineSample;
use crate::model::RainAlert;

/// Precipitation probability (%) at or above which an upcoming slot triggers
const ONSET_PROBABILITY: f64 = 50.0;

/// Precipitation amount (mm) above which a slot counts as rain
const RAIN_AMOUNT: f64 = 0.1;

/// Probability (%) below which a slot counts as rain having cleared
const CESSATION_PROBABILITY: f64 = 30.0;

/// How far ahead (minutes) the upcoming-rain scan looks
const LOOKAHEAD_MINUTES: i64 = 120;

/// Slots this close (minutes) to the reference instant report "starting now"
const STARTING_NOW_MINUTES: i64 = 5;

/// Half-width (seconds) of the window in which a wet slot counts as rain
/// falling right now
const AMBIENT_WINDOW_SECONDS: i64 = 15 * 60;

/// Infers a rain alert from the fine-grained series, relative to the
/// reference instant.
///
/// Precedence:
/// 1. First upcoming slot within the two-hour lookahead whose probability
///    reaches [`ONSET_PROBABILITY`] or whose amount exceeds [`RAIN_AMOUNT`]
///    produces an onset alert ("starting now" inside the five-minute cutoff).
/// 2. Otherwise, if any slot within fifteen minutes of the reference instant
///    is wet, the series is re-scanned for the first upcoming slot that is
///    both dry and below [`CESSATION_PROBABILITY`], producing a cessation
///    alert. No lookahead bound applies to this scan.
/// 3. Otherwise there is no alert.
pub fn infer_rain_alert(slots: &[FineSample], reference: NaiveDateTime) -> Option<RainAlert> {
    for slot in slots {
        if slot.time < reference {
            continue;
        }

        let minutes_away = minutes_between(reference, slot.time);
        if minutes_away > LOOKAHEAD_MINUTES {
            break;
        }

        let probability = slot.precip_probability.unwrap_or(0.0);
        let amount = slot.precip_amount.unwrap_or(0.0);
        if probability >= ONSET_PROBABILITY || amount > RAIN_AMOUNT {
            if minutes_away <= STARTING_NOW_MINUTES {
                return Some(RainAlert {
                    message: "Rain starting now".to_string(),
                    minutes_away: 0,
                    stopping: false,
                });
            }
            return Some(RainAlert {
                message: format!("Rain expected in {} min", minutes_away),
                minutes_away,
                stopping: false,
            });
        }
    }

    if currently_raining(slots, reference) {
        for slot in slots {
            if slot.time < reference {
                continue;
            }

            let probability = slot.precip_probability.unwrap_or(0.0);
            let amount = slot.precip_amount.unwrap_or(0.0);
            if amount <= RAIN_AMOUNT && probability < CESSATION_PROBABILITY {
                let minutes_away = minutes_between(reference, slot.time);
                return Some(RainAlert {
                    message: format!("Rain stopping in {} min", minutes_away),
                    minutes_away,
                    stopping: true,
                });
            }
        }
    }

    None
}

/// Whether any slot within fifteen minutes of the reference instant is wet.
fn currently_raining(slots: &[FineSample], reference: NaiveDateTime) -> bool {
    slots.iter().any(|slot| {
        let offset = (slot.time - reference).num_seconds().abs();
        offset < AMBIENT_WINDOW_SECONDS && slot.precip_amount.unwrap_or(0.0) > RAIN_AMOUNT
    })
}

/// Signed distance in whole minutes, rounded to nearest.
fn minutes_between(reference: NaiveDateTime, slot: NaiveDateTime) -> i64 {
    ((slot - reference).num_seconds() as f64 / 60.0).round() as i64
}
