//! Stateful countdown session with phase-transition detection.
//!
//! The session owns the current [`DayWindow`] and the previously observed
//! [`Phase`]. An external scheduler advances it with [`FastSession::tick`]
//! once per second; the session reports the freshly classified phase and,
//! for exactly one tick, the Fasting → AfterMaghrib transition.

use chrono::{DateTime, Utc};

use crate::constants::IFTAR_MESSAGE_DURATION;
use crate::phase::Phase;
use crate::window::DayWindow;

/// One-shot event emitted when the fast ends.
///
/// Only the Fasting → AfterMaghrib transition produces this. Any other
/// transition, including those caused by swapping in a new window, stays
/// silent.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct FastBroken;

/// Countdown session state advanced by the 1 Hz tick.
#[derive(Debug)]
pub struct FastSession {
    window: DayWindow,
    previous: Phase,
    /// While set, the celebratory banner is shown instead of the countdown.
    message_until: Option<DateTime<Utc>>,
}

impl FastSession {
    /// Start a session over a window. The initial phase is remembered
    /// without emitting any event, so (re)loading data never triggers a
    /// spurious celebration.
    pub fn new(window: DayWindow, now: DateTime<Utc>) -> Self {
        Self {
            window,
            previous: Phase::classify(now, &window),
            message_until: None,
        }
    }

    /// Swap in a new window (new location, date, or calculation method).
    ///
    /// Resets the remembered phase silently and cancels any pending
    /// celebratory banner so a stale message never shows against new data.
    pub fn replace_window(&mut self, window: DayWindow, now: DateTime<Utc>) {
        self.window = window;
        self.previous = Phase::classify(now, &window);
        self.message_until = None;
    }

    /// Advance the session to `now`. Returns the current phase and, on the
    /// single tick where the fast breaks, the [`FastBroken`] event.
    pub fn tick(&mut self, now: DateTime<Utc>) -> (Phase, Option<FastBroken>) {
        let current = Phase::classify(now, &self.window);
        let event = if current != self.previous
            && self.previous == Phase::Fasting
            && current == Phase::AfterMaghrib
        {
            self.message_until = Some(now + IFTAR_MESSAGE_DURATION);
            Some(FastBroken)
        } else {
            None
        };
        self.previous = current;
        (current, event)
    }

    /// Whether the transient "fast broken" banner is active at `now`.
    pub fn message_active(&mut self, now: DateTime<Utc>) -> bool {
        match self.message_until {
            Some(deadline) if now < deadline => true,
            Some(_) => {
                self.message_until = None;
                false
            }
            None => false,
        }
    }

    pub fn window(&self) -> &DayWindow {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

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
    fn fast_broken_fires_exactly_once() {
        let mut session = FastSession::new(window(), at(17, 59, 58));
        assert_eq!(session.tick(at(17, 59, 59)), (Phase::Fasting, None));
        assert_eq!(
            session.tick(at(18, 0, 0)),
            (Phase::AfterMaghrib, Some(FastBroken))
        );
        // One second later: phase unchanged, no repeat event.
        assert_eq!(session.tick(at(18, 0, 1)), (Phase::AfterMaghrib, None));
    }

    #[test]
    fn dawn_transition_is_silent() {
        let mut session = FastSession::new(window(), at(5, 59, 59));
        assert_eq!(session.tick(at(6, 0, 0)), (Phase::Fasting, None));
    }

    #[test]
    fn banner_lasts_five_seconds() {
        let mut session = FastSession::new(window(), at(17, 59, 59));
        let (_, event) = session.tick(at(18, 0, 0));
        assert!(event.is_some());
        assert!(session.message_active(at(18, 0, 0)));
        assert!(session.message_active(at(18, 0, 4)));
        assert!(!session.message_active(at(18, 0, 5)));
    }

    #[test]
    fn replacing_window_never_emits() {
        // Location change while AfterMaghrib; the new window classifies the
        // same instant as Fasting (different longitude, later Maghrib).
        let mut session = FastSession::new(window(), at(19, 0, 0));
        let shifted = DayWindow::new(
            at(6, 0, 0) - Duration::hours(3),
            at(18, 0, 0) + Duration::hours(3),
            Utc.with_ymd_and_hms(2025, 3, 11, 3, 0, 0).unwrap(),
        )
        .unwrap();
        session.replace_window(shifted, at(19, 0, 0));
        // First tick after the swap reflects the new classification and
        // crossing its Maghrib later still fires exactly once.
        assert_eq!(session.tick(at(19, 0, 1)), (Phase::Fasting, None));
        assert_eq!(
            session.tick(at(21, 0, 0)),
            (Phase::AfterMaghrib, Some(FastBroken))
        );
    }

    #[test]
    fn replacing_window_cancels_pending_banner() {
        let mut session = FastSession::new(window(), at(17, 59, 59));
        session.tick(at(18, 0, 0));
        assert!(session.message_active(at(18, 0, 1)));
        session.replace_window(window(), at(18, 0, 2));
        assert!(!session.message_active(at(18, 0, 2)));
    }
}
