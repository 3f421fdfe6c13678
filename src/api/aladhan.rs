//! Aladhan prayer-times client.
//!
//! One schedule refresh issues two queries - today and tomorrow - because a
//! full fasting cycle needs three boundaries: today's Fajr, today's Maghrib,
//! and tomorrow's Fajr. If either query fails the whole refresh fails; no
//! partial window is ever constructed.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::constants::ALADHAN_BASE_URL;
use crate::error::CoreError;
use crate::location::Location;
use crate::methods::CalcMethod;
use crate::wallclock::resolve_wall_clock;
use crate::window::DayWindow;

/// Timings subset the countdown consumes.
#[derive(Debug, Deserialize)]
pub struct AladhanTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
}

#[derive(Debug, Deserialize)]
pub struct AladhanHijriMonth {
    pub en: String,
}

#[derive(Debug, Deserialize)]
pub struct AladhanHijriDate {
    pub day: String,
    pub month: AladhanHijriMonth,
    pub year: String,
}

#[derive(Debug, Deserialize)]
pub struct AladhanDate {
    pub readable: String,
    pub hijri: AladhanHijriDate,
}

#[derive(Debug, Deserialize)]
pub struct AladhanMeta {
    pub timezone: String,
}

#[derive(Debug, Deserialize)]
pub struct AladhanData {
    pub timings: AladhanTimings,
    pub date: AladhanDate,
    pub meta: AladhanMeta,
}

/// Top-level response of `/v1/timings/{date}`.
#[derive(Debug, Deserialize)]
pub struct AladhanResponse {
    pub data: AladhanData,
}

/// Everything one refresh produces: the absolute window plus the labels the
/// display shows verbatim.
#[derive(Debug, Clone)]
pub struct PrayerSchedule {
    pub window: DayWindow,
    /// Fajr wall-clock string as served, e.g. "05:21".
    pub fajr_display: String,
    /// Maghrib wall-clock string as served.
    pub maghrib_display: String,
    /// Religious-calendar label, e.g. "15 Ramadan 1446 AH".
    pub hijri_date: String,
    /// Civil date label as served, e.g. "15 Mar 2025".
    pub gregorian_date: String,
    /// IANA zone the wall-clock strings were anchored in.
    pub timezone: String,
}

/// Format a calendar date the way the Aladhan path segment expects.
pub fn format_date_for_api(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{}", date.day(), date.month(), date.year())
}

#[derive(Debug)]
pub struct AladhanClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl AladhanClient {
    pub fn new() -> Result<Self, CoreError> {
        Ok(Self {
            client: super::build_client()?,
            base_url: ALADHAN_BASE_URL.to_string(),
        })
    }

    /// Client pointed at a non-default endpoint. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CoreError> {
        Ok(Self {
            client: super::build_client()?,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, date: NaiveDate, location: &Location, method: &CalcMethod) -> String {
        format!(
            "{}/{}?latitude={}&longitude={}&{}",
            self.base_url,
            format_date_for_api(date),
            location.latitude,
            location.longitude,
            method.params
        )
    }

    /// Fetch one day's timings.
    pub fn fetch_timings(
        &self,
        date: NaiveDate,
        location: &Location,
        method: &CalcMethod,
    ) -> Result<AladhanResponse, CoreError> {
        let url = self.build_url(date, location, method);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CoreError::UpstreamFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CoreError::UpstreamFetch(format!(
                "Aladhan API error: {}",
                response.status().as_u16()
            )));
        }

        response
            .json::<AladhanResponse>()
            .map_err(|e| CoreError::UpstreamFetch(format!("malformed Aladhan response: {e}")))
    }

    /// Fetch today's and tomorrow's timings and assemble a full schedule.
    ///
    /// All three boundaries are anchored in the timezone reported by today's
    /// response; the window constructor rejects non-monotonic boundaries.
    pub fn fetch_schedule(
        &self,
        today: NaiveDate,
        location: &Location,
        method: &CalcMethod,
    ) -> Result<PrayerSchedule, CoreError> {
        let tomorrow = today
            .succ_opt()
            .ok_or_else(|| CoreError::UpstreamFetch("date out of range".to_string()))?;

        let today_response = self.fetch_timings(today, location, method)?;
        let tomorrow_response = self.fetch_timings(tomorrow, location, method)?;

        let timezone = today_response.data.meta.timezone.clone();

        let today_fajr = resolve_wall_clock(&today_response.data.timings.fajr, today, &timezone)?;
        let maghrib = resolve_wall_clock(&today_response.data.timings.maghrib, today, &timezone)?;
        let tomorrow_fajr =
            resolve_wall_clock(&tomorrow_response.data.timings.fajr, tomorrow, &timezone)?;

        let window = DayWindow::new(today_fajr, maghrib, tomorrow_fajr)?;

        let hijri = &today_response.data.date.hijri;
        Ok(PrayerSchedule {
            window,
            fajr_display: today_response.data.timings.fajr.clone(),
            maghrib_display: today_response.data.timings.maghrib.clone(),
            hijri_date: format!("{} {} {} AH", hijri.day, hijri.month.en, hijri.year),
            gregorian_date: today_response.data.date.readable.clone(),
            timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::DEFAULT_METHOD;
    use chrono::TimeZone;

    fn istanbul() -> Location {
        Location {
            latitude: 41.0082,
            longitude: 28.9784,
            label: "Istanbul, Turkey".to_string(),
            country_code: Some("TR".to_string()),
        }
    }

    fn timings_json(fajr: &str, maghrib: &str, readable: &str) -> String {
        format!(
            r#"{{
              "data": {{
                "timings": {{ "Fajr": "{fajr}", "Maghrib": "{maghrib}", "Isha": "20:11" }},
                "date": {{
                  "readable": "{readable}",
                  "hijri": {{ "day": "15", "month": {{ "en": "Ramadan" }}, "year": "1446" }}
                }},
                "meta": {{ "timezone": "Europe/Istanbul" }}
              }}
            }}"#
        )
    }

    #[test]
    fn date_formatting_is_dd_mm_yyyy() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_date_for_api(date), "05-03-2025");
    }

    #[test]
    fn response_parsing_ignores_extra_timings() {
        let parsed: AladhanResponse =
            serde_json::from_str(&timings_json("05:21", "19:08", "15 Mar 2025")).unwrap();
        assert_eq!(parsed.data.timings.fajr, "05:21");
        assert_eq!(parsed.data.timings.maghrib, "19:08");
        assert_eq!(parsed.data.meta.timezone, "Europe/Istanbul");
        assert_eq!(parsed.data.date.hijri.month.en, "Ramadan");
    }

    #[test]
    fn schedule_is_assembled_from_two_queries() {
        let mut server = mockito::Server::new();
        let today = server
            .mock("GET", "/15-03-2025")
            .match_query(mockito::Matcher::Regex("method=3".to_string()))
            .with_body(timings_json("05:21", "19:08", "15 Mar 2025"))
            .create();
        let tomorrow = server
            .mock("GET", "/16-03-2025")
            .match_query(mockito::Matcher::Regex("method=3".to_string()))
            .with_body(timings_json("05:19", "19:09", "16 Mar 2025"))
            .create();

        let client = AladhanClient::with_base_url(server.url()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let schedule = client
            .fetch_schedule(date, &istanbul(), DEFAULT_METHOD)
            .unwrap();

        // Istanbul is UTC+3: 05:21 local -> 02:21Z.
        assert_eq!(
            schedule.window.today_fajr,
            chrono::Utc.with_ymd_and_hms(2025, 3, 15, 2, 21, 0).unwrap()
        );
        assert_eq!(
            schedule.window.tomorrow_fajr,
            chrono::Utc.with_ymd_and_hms(2025, 3, 16, 2, 19, 0).unwrap()
        );
        assert_eq!(schedule.hijri_date, "15 Ramadan 1446 AH");
        assert_eq!(schedule.maghrib_display, "19:08");

        today.assert();
        tomorrow.assert();
    }

    #[test]
    fn non_success_status_is_upstream_fetch_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(503)
            .create();

        let client = AladhanClient::with_base_url(server.url()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let err = client
            .fetch_schedule(date, &istanbul(), DEFAULT_METHOD)
            .unwrap_err();
        assert!(matches!(err, CoreError::UpstreamFetch(_)));
    }

    #[test]
    fn inverted_boundaries_surface_as_malformed_window() {
        let mut server = mockito::Server::new();
        // Maghrib before Fajr: upstream data is broken and must not be
        // clamped into a plausible-looking window.
        server
            .mock("GET", "/15-03-2025")
            .match_query(mockito::Matcher::Any)
            .with_body(timings_json("19:08", "05:21", "15 Mar 2025"))
            .create();
        server
            .mock("GET", "/16-03-2025")
            .match_query(mockito::Matcher::Any)
            .with_body(timings_json("19:07", "05:22", "16 Mar 2025"))
            .create();

        let client = AladhanClient::with_base_url(server.url()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let err = client
            .fetch_schedule(date, &istanbul(), DEFAULT_METHOD)
            .unwrap_err();
        assert!(matches!(err, CoreError::MalformedWindow { .. }));
    }
}
