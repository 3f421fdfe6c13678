//! Core application logic: the live countdown loop.
//!
//! Single-threaded and timer-driven. One 1 Hz tick re-evaluates phase and
//! countdown for the lifetime of a valid day window; the window is replaced
//! (and the session re-initialized silently) when the day rolls over. The
//! 1-second sleep doubles as the keyboard poll, so quitting is immediate.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::api::{AladhanClient, PrayerSchedule};
use crate::config::{self, Config, Theme};
use crate::constants::TICK_INTERVAL;
use crate::display::{FrameView, TerminalGuard, draw_frame};
use crate::location::Location;
use crate::logger::Log;
use crate::methods::{CalcMethod, method_by_id, method_for_country};
use crate::phase::CountdownState;
use crate::session::FastSession;

/// Runtime state of the countdown loop.
#[derive(Debug)]
pub struct Core {
    client: AladhanClient,
    location: Location,
    method: &'static CalcMethod,
    theme: Theme,
    schedule: PrayerSchedule,
    session: FastSession,
}

impl Core {
    /// Build the session: resolve location and method from config, fetch
    /// the initial schedule.
    pub fn new(mut config: Config) -> Result<Self> {
        let Some(location) = config.location() else {
            anyhow::bail!("no location configured; run 'iftarr location <city>' first");
        };

        // Auto-select the method only when nothing is stored yet - an
        // explicit precondition at construction, not a side effect of
        // later events.
        let method = if config.has_stored_method() {
            config
                .method
                .as_deref()
                .and_then(method_by_id)
                .context("stored method id failed validation")?
        } else {
            let detected = method_for_country(config.country_code.as_deref());
            config.method = Some(detected.id.to_string());
            config::save(&config).context("Failed to persist auto-selected method")?;
            log_block_start!("Auto-selected calculation method");
            log_indented!("{} ({})", detected.label, detected.region);
            detected
        };

        let theme = config.theme();
        let client = AladhanClient::new().context("Failed to build prayer-times client")?;

        log_block_start!("Fetching prayer times for {location}");
        log_indented!("Method: {} ({})", method.label, method.region);
        let schedule = fetch_schedule(&client, &location, method)?;
        log_decorated!("Fajr {} \u{b7} Maghrib {} ({})",
            schedule.fajr_display,
            schedule.maghrib_display,
            schedule.timezone
        );

        let session = FastSession::new(schedule.window, Utc::now());
        Ok(Self {
            client,
            location,
            method,
            theme,
            schedule,
            session,
        })
    }

    /// Run the countdown until the user quits.
    pub fn run(mut self) -> Result<()> {
        log_block_start!("Starting countdown (press q to quit)");

        // The countdown screen owns the terminal; logging stays off until
        // it is released.
        let guard = TerminalGuard::acquire()?;
        Log::set_enabled(false);
        let result = self.main_loop();
        drop(guard);
        Log::set_enabled(true);

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        loop {
            // Sleep-and-poll: returns early on input, else after one tick.
            if event::poll(TICK_INTERVAL)? && Self::should_quit(&event::read()?) {
                return Ok(());
            }

            let now = Utc::now();
            let (phase, _event) = self.session.tick(now);
            let countdown = CountdownState::until(now, phase.active_target(self.session.window()));

            // Day rollover: tomorrow's Fajr has passed, so the window no
            // longer covers "now". Refetch and swap silently.
            if countdown.is_complete && now >= self.session.window().tomorrow_fajr {
                self.schedule = rollover_refetch(
                    &self.client,
                    &self.location,
                    self.method,
                    &self.schedule.timezone,
                    now,
                )?;
                self.session.replace_window(self.schedule.window, now);
                continue;
            }

            let view = FrameView {
                location_label: &self.location.label,
                hijri_date: &self.schedule.hijri_date,
                gregorian_date: &self.schedule.gregorian_date,
                phase,
                countdown,
                progress: phase.progress_ratio(now, self.session.window()),
                fajr_display: &self.schedule.fajr_display,
                maghrib_display: &self.schedule.maghrib_display,
                show_banner: self.session.message_active(now),
                theme: self.theme,
            };
            draw_frame(&view)?;
        }
    }

    fn should_quit(event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }
}

fn fetch_schedule(
    client: &AladhanClient,
    location: &Location,
    method: &CalcMethod,
) -> Result<PrayerSchedule> {
    let today = Local::now().date_naive();
    client
        .fetch_schedule(today, location, method)
        .context("Failed to fetch prayer times")
}

/// Refetch the schedule after the day rolls over.
///
/// The query date is derived in the schedule's own timezone, not the
/// machine's. When the machine's calendar trails the location's (say,
/// watching Tokyo from New York), the machine-local date still names the
/// prior day at the moment tomorrow's Fajr passes; querying it would
/// reproduce the already-expired window and the loop would refetch once
/// per second until local midnight. A refetched window that is itself
/// already over is an error for the same reason.
fn rollover_refetch(
    client: &AladhanClient,
    location: &Location,
    method: &CalcMethod,
    timezone: &str,
    now: DateTime<Utc>,
) -> Result<PrayerSchedule> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown IANA timezone '{timezone}' in schedule"))?;
    let date = now.with_timezone(&tz).date_naive();

    let schedule = client
        .fetch_schedule(date, location, method)
        .context("Failed to refetch prayer times")?;

    if now >= schedule.window.tomorrow_fajr {
        anyhow::bail!(
            "refetched day window is already over (next Fajr {} is not after {})",
            schedule.window.tomorrow_fajr,
            now
        );
    }
    Ok(schedule)
}
