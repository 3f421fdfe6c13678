//! Timezone-aware wall-clock parsing.
//!
//! The prayer-times API returns boundaries as local "HH:MM" strings plus an
//! IANA zone name. This module anchors those to absolute UTC instants.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::CoreError;

/// Resolve a 24-hour "HH:MM" wall-clock string on a calendar date in an IANA
/// zone to an absolute UTC instant.
///
/// Uses a two-step offset probe: the calendar fields are first treated
/// naively as UTC to get a reference instant, then the zone's offset *at
/// roughly that instant* is measured by rendering the reference in the target
/// zone and diffing the wall clocks in whole minutes. Subtracting the offset
/// from the naive instant yields the true instant.
///
/// Within the same minute as a DST transition the probe can land in the
/// wrong offset bucket. This is a known limitation of the single-pass probe,
/// not silently corrected.
pub fn resolve_wall_clock(
    time_str: &str,
    date: NaiveDate,
    zone_name: &str,
) -> Result<DateTime<Utc>, CoreError> {
    let time = NaiveTime::parse_from_str(time_str.trim(), "%H:%M")
        .map_err(|_| CoreError::InvalidFormat(time_str.to_string()))?;

    let tz: Tz = zone_name
        .parse()
        .map_err(|_| CoreError::InvalidTimeZone(zone_name.to_string()))?;

    // Reference instant: calendar fields read as if they were UTC.
    let naive = date.and_time(time);
    let probe = Utc.from_utc_datetime(&naive);

    // Zone offset near the probe, as whole minutes of wall-clock difference.
    let zone_wall = probe.with_timezone(&tz).naive_local();
    let offset = Duration::minutes((zone_wall - naive).num_minutes());

    Ok(probe - offset)
}
