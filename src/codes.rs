//! WMO weather interpretation code catalog
//!
//! Static lookup from an Open-Meteo / WMO weather condition code to a
//! human-readable label and an icon class used by rendering code. Codes
//! outside the known table fall back to an "Unknown" entry rather than
//! erroring.

use serde::Serialize;

/// Label and icon class for a weather condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeInfo {
    /// Human-readable condition label
    pub label: &'static str,
    /// Icon class consumed by rendering code
    pub icon: &'static str,
}

/// Fallback entry for codes outside the known table
const UNKNOWN: CodeInfo = CodeInfo {
    label: "Unknown",
    icon: "thermometer",
};

/// Looks up the label and icon class for a WMO weather code.
///
/// Covers the full Open-Meteo code table:
/// - 0: Clear sky
/// - 1-3: Mainly clear / partly cloudy / overcast
/// - 45, 48: Fog
/// - 51-55: Drizzle
/// - 61-65: Rain
/// - 66-67: Freezing rain
/// - 71-77: Snow
/// - 80-82: Showers
/// - 85-86: Snow showers
/// - 95-99: Thunderstorm
///
/// Unknown codes map to the `"Unknown"` fallback, never an error.
pub fn lookup(code: i32) -> CodeInfo {
    let (label, icon) = match code {
        0 => ("Clear sky", "sun"),
        1 => ("Mainly clear", "sun-cloud"),
        2 => ("Partly cloudy", "sun-cloud"),
        3 => ("Overcast", "cloud"),
        45 => ("Fog", "fog"),
        48 => ("Icy fog", "fog"),
        51 => ("Light drizzle", "sun-rain"),
        53 => ("Drizzle", "sun-rain"),
        55 => ("Heavy drizzle", "rain"),
        61 => ("Light rain", "rain"),
        63 => ("Rain", "rain"),
        65 => ("Heavy rain", "rain"),
        66 => ("Freezing rain", "snow"),
        67 => ("Heavy freezing rain", "snow"),
        71 => ("Light snow", "snow"),
        73 => ("Snow", "snowflake"),
        75 => ("Heavy snow", "snowflake"),
        77 => ("Snow grains", "snow"),
        80 => ("Light showers", "sun-rain"),
        81 => ("Showers", "rain"),
        82 => ("Heavy showers", "storm"),
        85 => ("Snow showers", "snow"),
        86 => ("Heavy snow showers", "snow"),
        95 => ("Thunderstorm", "storm"),
        96 | 99 => ("Thunderstorm + hail", "storm"),
        _ => return UNKNOWN,
    };
    CodeInfo { label, icon }
}

/// Whether a weather code is in the rain-coded subset.
///
/// Rendering uses this to decide rain-specific treatment; the member set is
/// exact (drizzle, rain, freezing rain, showers, thunderstorm).
pub fn is_rainy(code: i32) -> bool {
    matches!(
        code,
        51 | 53 | 55 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 | 95 | 96 | 99
    )
}
