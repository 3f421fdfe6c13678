use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use iftarr::phase::{CountdownState, Phase};
use iftarr::wallclock::resolve_wall_clock;
use iftarr::window::DayWindow;

/// Generate offsets (in seconds) that produce a valid, strictly increasing
/// window: Fajr at base, Maghrib 1s..20h later, next Fajr 1s..20h after that.
fn window_strategy() -> impl Strategy<Value = DayWindow> {
    (1i64..72_000, 1i64..72_000).prop_map(|(fast_len, night_len)| {
        let fajr = Utc.with_ymd_and_hms(2025, 3, 10, 5, 0, 0).unwrap();
        DayWindow::new(
            fajr,
            fajr + Duration::seconds(fast_len),
            fajr + Duration::seconds(fast_len + night_len),
        )
        .unwrap()
    })
}

/// Generate instants within a day of the window base.
fn now_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (-86_400i64..2 * 86_400).prop_map(|offset| {
        Utc.with_ymd_and_hms(2025, 3, 10, 5, 0, 0).unwrap() + Duration::seconds(offset)
    })
}

proptest! {
    /// Every instant falls into exactly one phase, and the phase agrees
    /// with the boundary ordering.
    #[test]
    fn classification_is_a_partition(window in window_strategy(), now in now_strategy()) {
        let phase = Phase::classify(now, &window);
        match phase {
            Phase::BeforeFajr => prop_assert!(now < window.today_fajr),
            Phase::Fasting => prop_assert!(now >= window.today_fajr && now < window.maghrib),
            Phase::AfterMaghrib => prop_assert!(now >= window.maghrib),
        }
    }

    /// Progress is always within [0, 1] and None exactly for BeforeFajr.
    #[test]
    fn progress_is_bounded(window in window_strategy(), now in now_strategy()) {
        let phase = Phase::classify(now, &window);
        match phase.progress_ratio(now, &window) {
            Some(ratio) => {
                prop_assert!((0.0..=1.0).contains(&ratio));
                prop_assert!(phase != Phase::BeforeFajr);
            }
            None => prop_assert_eq!(phase, Phase::BeforeFajr),
        }
    }

    /// Within a fixed phase, advancing `now` never decreases progress.
    #[test]
    fn progress_is_monotone(
        window in window_strategy(),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let span = (window.maghrib - window.today_fajr).num_seconds();
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let t1 = window.today_fajr + Duration::seconds((earlier * span as f64) as i64);
        let t2 = window.today_fajr + Duration::seconds((later * span as f64) as i64);
        let p1 = Phase::Fasting.progress_ratio(t1, &window).unwrap();
        let p2 = Phase::Fasting.progress_ratio(t2, &window).unwrap();
        prop_assert!(p2 >= p1);
    }

    /// hours*3600 + minutes*60 + seconds equals the floored difference when
    /// the target is ahead, and the state is all-zero/complete otherwise.
    #[test]
    fn countdown_decomposition_is_exact(diff_secs in -86_400i64..86_400) {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let target = now + Duration::seconds(diff_secs);
        let c = CountdownState::until(now, target);
        if diff_secs > 0 {
            prop_assert!(!c.is_complete);
            prop_assert_eq!(c.hours * 3600 + c.minutes * 60 + c.seconds, diff_secs);
            prop_assert!((0..60).contains(&c.minutes));
            prop_assert!((0..60).contains(&c.seconds));
        } else {
            prop_assert!(c.is_complete);
            prop_assert_eq!((c.hours, c.minutes, c.seconds), (0, 0, 0));
        }
    }

    /// Re-parsing the formatted output of the resolver yields the same
    /// instant for fixed-offset zones (no DST transition interference).
    #[test]
    fn wall_clock_resolution_is_idempotent(
        hour in 0u32..24,
        minute in 0u32..60,
        zone_index in 0usize..4,
    ) {
        let zones = ["UTC", "Asia/Dubai", "Asia/Karachi", "Asia/Riyadh"];
        let zone = zones[zone_index];
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let first = resolve_wall_clock(&format!("{hour:02}:{minute:02}"), date, zone).unwrap();

        let tz: chrono_tz::Tz = zone.parse().unwrap();
        let local = first.with_timezone(&tz);
        let second =
            resolve_wall_clock(&local.format("%H:%M").to_string(), local.date_naive(), zone)
                .unwrap();
        prop_assert_eq!(first, second);
    }
}
