//! Time utilities: parsing durations, elapsed seconds, readable formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local};
use regex::Regex;

/// Parse a duration into whole seconds.
///
/// Accepted forms: `90` (seconds), `90s`, `15m`, `2h`, `1h30m`, `1h 30m 10s`,
/// `01:30` (HH:MM) and `1:02:03` (H:MM:SS).
pub fn parse_duration(input: &str) -> AppResult<u64> {
    let s = input.trim();
    let invalid = || AppError::InvalidDuration(input.to_string());

    if s.is_empty() {
        return Err(invalid());
    }

    if let Ok(secs) = s.parse::<u64>() {
        return Ok(secs);
    }

    if s.contains(':') {
        let parts: Vec<&str> = s.split(':').collect();
        let nums: Vec<u64> = parts
            .iter()
            .map(|p| p.parse::<u64>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;

        return match nums.as_slice() {
            [h, m] if *m < 60 => to_seconds(*h, *m, 0).ok_or_else(invalid),
            [h, m, sec] if *m < 60 && *sec < 60 => to_seconds(*h, *m, *sec).ok_or_else(invalid),
            _ => Err(invalid()),
        };
    }

    let re = Regex::new(r"(?i)^(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?\s*(?:(\d+)\s*s)?$")
        .map_err(|e| AppError::Other(e.to_string()))?;
    let caps = re.captures(s).ok_or_else(invalid)?;

    let part = |i: usize| -> AppResult<Option<u64>> {
        caps.get(i)
            .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
            .transpose()
    };

    let (h, m, sec) = (part(1)?, part(2)?, part(3)?);
    if h.is_none() && m.is_none() && sec.is_none() {
        return Err(invalid());
    }

    to_seconds(h.unwrap_or(0), m.unwrap_or(0), sec.unwrap_or(0)).ok_or_else(invalid)
}

/// `None` when the total does not fit in a `u64`.
fn to_seconds(hours: u64, minutes: u64, seconds: u64) -> Option<u64> {
    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

pub fn parse_timestamp(raw: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).map_err(|e| AppError::Other(format!("bad timestamp '{raw}': {e}")))
}

/// Whole seconds from `start` to now; a start in the future counts as zero.
pub fn elapsed_seconds(start: &DateTime<FixedOffset>) -> u64 {
    let secs = (Local::now().fixed_offset() - *start).num_seconds();
    secs.max(0) as u64
}
