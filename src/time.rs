use crate::error::KnowledgeError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::borrow::Cow;

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const SECONDS_PER_DAY: i64 = 86_400;

/// Appends `:00` to a `YYYY-MM-DDTHH:MM` timestamp, leaves anything else alone.
pub fn normalize_timestamp(timestamp: &str) -> Cow<'_, str> {
    let b = timestamp.as_bytes();
    if b.len() == 16 && b[10] == b'T' && b[13] == b':' {
        Cow::Owned(format!("{timestamp}:00"))
    } else {
        Cow::Borrowed(timestamp)
    }
}

pub fn parse_local(timestamp: &str) -> Result<NaiveDateTime, KnowledgeError> {
    let normalized = normalize_timestamp(timestamp.trim());
    NaiveDateTime::parse_from_str(&normalized, LOCAL_FORMAT)
        .map_err(|e| KnowledgeError::InvalidInput(format!("timestamp {timestamp:?}: {e}")))
}

/// Reads a wall-clock timestamp as local time in `zone`. A time repeated by a
/// DST fall-back resolves to its earlier instant.
pub fn local_to_instant(timestamp: &str, zone: Tz) -> Result<DateTime<Utc>, KnowledgeError> {
    let local = parse_local(timestamp)?;
    zone.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            KnowledgeError::InvalidInput(format!(
                "timestamp {timestamp:?} does not exist in {}",
                zone.name()
            ))
        })
}

/// Elapsed whole seconds between two instants. Hours are not wrapped at a
/// day when displayed.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Serialize)]
pub struct FlightDuration(pub i64);

impl FlightDuration {
    pub fn between(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> FlightDuration {
        FlightDuration((arrival - departure).num_seconds())
    }

    pub fn seconds(self) -> i64 {
        self.0
    }

    /// Adjustment applied by the FlightRadar24 export to a negative
    /// difference: `sec + (sec + 86400)`. Non-negative values are untouched.
    pub fn with_rollover_correction(self) -> FlightDuration {
        if self.0 < 0 {
            FlightDuration(self.0 + (self.0 + SECONDS_PER_DAY))
        } else {
            self
        }
    }
}

impl std::fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0.div_euclid(3600);
        let remaining = self.0.rem_euclid(3600);
        let mins = remaining / 60;
        let secs = remaining % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, mins, secs)
    }
}
