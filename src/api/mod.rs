//! HTTP clients for the upstream data sources.
//!
//! Two collaborators feed the countdown: the Aladhan prayer-times API and a
//! pair of geocoding endpoints (forward place-name search, reverse
//! coordinate lookup). All requests are synchronous blocking calls - the
//! application is a single-threaded 1 Hz loop and fetches happen strictly
//! between ticks, so a stale response can never race a newer one.
//!
//! No retry or backoff policy: a failed fetch surfaces as a single
//! [`CoreError::UpstreamFetch`] and the user re-triggers by re-running or
//! re-selecting location/method.

pub mod aladhan;
pub mod geocode;

pub use aladhan::{AladhanClient, PrayerSchedule};
pub use geocode::{GeoCandidate, GeocodeClient};

use crate::constants::FETCH_TIMEOUT;
use crate::error::CoreError;

/// Build the shared blocking HTTP client.
pub(crate) fn build_client() -> Result<reqwest::blocking::Client, CoreError> {
    reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("iftarr/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| CoreError::UpstreamFetch(e.to_string()))
}
