//! Timestamp helpers.
//!
//! Publish and comment timestamps use `YYYY-MM-DDTHH:MM:SSZ` in UTC with
//! whole seconds. Fractional seconds or offsets other than a literal `Z` are
//! rejected rather than guessed at.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use devto_core::constants::TIMESTAMP_FORMAT;
use devto_core::error::{DevError, DevResult};

/// Parse a wire timestamp into a UTC instant.
pub fn parse_utc_date(input: &str) -> DevResult<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT).map_err(|e| {
        DevError::InvalidDate {
            input: input.to_string(),
            reason: e.to_string(),
        }
    })?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Check that timestamps are in non-increasing order (newest first).
///
/// Fails on the first timestamp that does not parse.
pub fn is_descending<I, S>(timestamps: I) -> DevResult<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut previous: Option<DateTime<Utc>> = None;
    for ts in timestamps {
        let current = parse_utc_date(ts.as_ref())?;
        if let Some(prev) = previous {
            if current > prev {
                return Ok(false);
            }
        }
        previous = Some(current);
    }
    Ok(true)
}
