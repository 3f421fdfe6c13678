//! Phase classification and countdown derivation.
//!
//! The day is partitioned into exactly three phases by the two fasting
//! boundaries. Classification is recomputed from `now` on every tick and is
//! never persisted; all derived values (target, progress, countdown) are
//! pure functions of `now` and the current [`DayWindow`].

use chrono::{DateTime, Utc};

use crate::window::DayWindow;

/// Where "now" falls relative to the fasting window.
///
/// Boundaries are half-open on the lower side: at exactly Fajr the phase is
/// already `Fasting`, and at exactly Maghrib it is already `AfterMaghrib`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Phase {
    /// Before today's Fajr - counting down to the start of the fast.
    BeforeFajr,
    /// Between Fajr and Maghrib - the fast is in progress.
    Fasting,
    /// After Maghrib - counting down to tomorrow's Fajr (Suhoor).
    AfterMaghrib,
}

impl Phase {
    /// Classify `now` against the window boundaries.
    pub fn classify(now: DateTime<Utc>, window: &DayWindow) -> Self {
        if now < window.today_fajr {
            Phase::BeforeFajr
        } else if now < window.maghrib {
            Phase::Fasting
        } else {
            Phase::AfterMaghrib
        }
    }

    /// The boundary this phase counts down to.
    pub fn active_target(&self, window: &DayWindow) -> DateTime<Utc> {
        match self {
            Phase::BeforeFajr => window.today_fajr,
            Phase::Fasting => window.maghrib,
            Phase::AfterMaghrib => window.tomorrow_fajr,
        }
    }

    /// Normalized position within the current phase's span, clamped to
    /// [0, 1]. `None` for `BeforeFajr`, which carries no progress bar.
    pub fn progress_ratio(&self, now: DateTime<Utc>, window: &DayWindow) -> Option<f64> {
        let (start, end) = match self {
            Phase::BeforeFajr => return None,
            Phase::Fasting => (window.today_fajr, window.maghrib),
            Phase::AfterMaghrib => (window.maghrib, window.tomorrow_fajr),
        };
        let span = (end - start).num_milliseconds() as f64;
        let elapsed = (now - start).num_milliseconds() as f64;
        Some((elapsed / span).clamp(0.0, 1.0))
    }

    /// Returns true while the fast is in progress.
    pub fn is_fasting(&self) -> bool {
        matches!(self, Phase::Fasting)
    }

    /// Short label describing what the countdown is running toward.
    pub fn countdown_label(&self) -> &'static str {
        match self {
            Phase::BeforeFajr => "until Fajr / Suhoor ends",
            Phase::Fasting => "until Iftar",
            Phase::AfterMaghrib => "until Suhoor",
        }
    }

    /// Display name for logs and the status line.
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::BeforeFajr => "Before Fajr",
            Phase::Fasting => "Fasting",
            Phase::AfterMaghrib => "After Maghrib",
        }
    }
}

/// Non-negative decomposition of the time remaining until a target instant.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct CountdownState {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub is_complete: bool,
}

impl CountdownState {
    /// Decompose `target - now` into hours/minutes/seconds, floored to whole
    /// seconds. A target at or before `now` yields the all-zero complete
    /// state.
    pub fn until(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let diff = (target - now).num_seconds();
        if diff <= 0 {
            return Self {
                hours: 0,
                minutes: 0,
                seconds: 0,
                is_complete: true,
            };
        }
        Self {
            hours: diff / 3600,
            minutes: (diff % 3600) / 60,
            seconds: diff % 60,
            is_complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> DayWindow {
        DayWindow::new(
            Utc.with_ymd_and_hms(2025, 3, 10, 6, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 11, 6, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, s).unwrap()
    }

    #[test]
    fn classification_partitions_the_day() {
        let w = window();
        assert_eq!(Phase::classify(at(5, 59, 59), &w), Phase::BeforeFajr);
        assert_eq!(Phase::classify(at(12, 0, 0), &w), Phase::Fasting);
        assert_eq!(Phase::classify(at(23, 0, 0), &w), Phase::AfterMaghrib);
    }

    #[test]
    fn boundaries_belong_to_the_following_phase() {
        let w = window();
        // Exactly at Fajr the fast has begun.
        assert_eq!(Phase::classify(w.today_fajr, &w), Phase::Fasting);
        // Exactly at Maghrib the fast is over.
        assert_eq!(Phase::classify(w.maghrib, &w), Phase::AfterMaghrib);
    }

    #[test]
    fn targets_follow_the_phase() {
        let w = window();
        assert_eq!(Phase::BeforeFajr.active_target(&w), w.today_fajr);
        assert_eq!(Phase::Fasting.active_target(&w), w.maghrib);
        assert_eq!(Phase::AfterMaghrib.active_target(&w), w.tomorrow_fajr);
    }

    #[test]
    fn progress_at_phase_midpoint_is_half() {
        let w = window();
        let p = Phase::Fasting.progress_ratio(at(12, 0, 0), &w).unwrap();
        assert!((p - 0.5).abs() < 1e-9);

        let start = Phase::AfterMaghrib.progress_ratio(w.maghrib, &w).unwrap();
        assert_eq!(start, 0.0);
        let midnight = Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap();
        let p = Phase::AfterMaghrib.progress_ratio(midnight, &w).unwrap();
        assert!((p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn progress_is_clamped_against_overshoot() {
        let w = window();
        // A tick landing slightly past the boundary must not exceed 1.0.
        let p = Phase::Fasting
            .progress_ratio(w.maghrib + chrono::Duration::seconds(2), &w)
            .unwrap();
        assert_eq!(p, 1.0);
        // And clock skew before the phase start must not go negative.
        let p = Phase::Fasting
            .progress_ratio(w.today_fajr - chrono::Duration::seconds(2), &w)
            .unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn before_fajr_has_no_progress() {
        let w = window();
        assert_eq!(Phase::BeforeFajr.progress_ratio(at(3, 0, 0), &w), None);
    }

    #[test]
    fn countdown_decomposition_identity() {
        let now = at(12, 0, 0);
        let target = at(18, 30, 45);
        let c = CountdownState::until(now, target);
        assert!(!c.is_complete);
        assert_eq!(
            c.hours * 3600 + c.minutes * 60 + c.seconds,
            (target - now).num_seconds()
        );
        assert_eq!((c.hours, c.minutes, c.seconds), (6, 30, 45));
    }

    #[test]
    fn countdown_complete_at_or_past_target() {
        let target = at(18, 0, 0);
        for now in [target, target + chrono::Duration::seconds(1)] {
            let c = CountdownState::until(now, target);
            assert_eq!(
                c,
                CountdownState {
                    hours: 0,
                    minutes: 0,
                    seconds: 0,
                    is_complete: true
                }
            );
        }
    }
}
