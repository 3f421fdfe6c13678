//! Typed errors for the countdown core.
//!
//! The core keeps a small closed set of error kinds so callers can present a
//! single terminal error state instead of a partial or garbled countdown.
//! Application plumbing above the core converts these into `anyhow` errors
//! with context.

use chrono::{DateTime, Utc};

/// Errors produced by the countdown core and its upstream clients.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The wall-clock string did not match 24-hour `H:MM`/`HH:MM`.
    #[error("invalid time string '{0}' (expected 24-hour HH:MM)")]
    InvalidFormat(String),

    /// The IANA zone name could not be resolved.
    #[error("unknown IANA timezone '{0}'")]
    InvalidTimeZone(String),

    /// A network query to a data source failed or returned non-success.
    #[error("upstream fetch failed: {0}")]
    UpstreamFetch(String),

    /// Day-window boundaries are not strictly increasing. Surfaced rather
    /// than clamped: clamping could mask a wrong-timezone or wrong-method
    /// configuration.
    #[error(
        "malformed day window: expected fajr < maghrib < next fajr, \
         got {today_fajr} / {maghrib} / {tomorrow_fajr}"
    )]
    MalformedWindow {
        today_fajr: DateTime<Utc>,
        maghrib: DateTime<Utc>,
        tomorrow_fajr: DateTime<Utc>,
    },
}
