//! The three absolute boundaries that frame one fasting day.

use chrono::{DateTime, Utc};

use crate::error::CoreError;

/// Today's Fajr, today's Maghrib, and tomorrow's Fajr as absolute instants.
///
/// Construction enforces strict monotonicity. Upstream data that violates it
/// (wrong timezone, wrong method, malformed response) is rejected with
/// [`CoreError::MalformedWindow`] instead of being clamped into something
/// that merely looks plausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub today_fajr: DateTime<Utc>,
    pub maghrib: DateTime<Utc>,
    pub tomorrow_fajr: DateTime<Utc>,
}

impl DayWindow {
    /// Build a window, validating `today_fajr < maghrib < tomorrow_fajr`.
    pub fn new(
        today_fajr: DateTime<Utc>,
        maghrib: DateTime<Utc>,
        tomorrow_fajr: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if today_fajr >= maghrib || maghrib >= tomorrow_fajr {
            return Err(CoreError::MalformedWindow {
                today_fajr,
                maghrib,
                tomorrow_fajr,
            });
        }
        Ok(Self {
            today_fajr,
            maghrib,
            tomorrow_fajr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, d, h, 0, 0).unwrap()
    }

    #[test]
    fn accepts_strictly_increasing_boundaries() {
        assert!(DayWindow::new(at(10, 6), at(10, 18), at(11, 6)).is_ok());
    }

    #[test]
    fn rejects_non_monotonic_boundaries() {
        // Fajr at or after Maghrib.
        assert!(matches!(
            DayWindow::new(at(10, 18), at(10, 18), at(11, 6)),
            Err(CoreError::MalformedWindow { .. })
        ));
        assert!(matches!(
            DayWindow::new(at(10, 19), at(10, 18), at(11, 6)),
            Err(CoreError::MalformedWindow { .. })
        ));
        // Maghrib at or after tomorrow's Fajr.
        assert!(matches!(
            DayWindow::new(at(10, 6), at(11, 6), at(11, 6)),
            Err(CoreError::MalformedWindow { .. })
        ));
    }
}
