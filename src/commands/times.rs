//! One-shot `times` command: fetch and print today's boundaries.

use anyhow::{Context, Result};
use chrono::{Local, Utc};

use crate::api::AladhanClient;
use crate::config;
use crate::phase::{CountdownState, Phase};

/// Fetch today's schedule and print it with the current phase.
pub fn handle() -> Result<()> {
    let config = config::load()?;
    let Some(location) = config.location() else {
        anyhow::bail!("no location configured; run 'iftarr location <city>' first");
    };

    let method = super::effective_method(&config);
    let client = AladhanClient::new().context("Failed to build prayer-times client")?;

    log_block_start!("Fetching prayer times for {location}");
    log_indented!("Method: {} ({})", method.label, method.region);

    let today = Local::now().date_naive();
    let schedule = client
        .fetch_schedule(today, &location, method)
        .context("Failed to fetch prayer times")?;

    let now = Utc::now();
    let phase = Phase::classify(now, &schedule.window);
    let countdown = CountdownState::until(now, phase.active_target(&schedule.window));

    log_block_start!("{} \u{b7} {}", schedule.hijri_date, schedule.gregorian_date);
    log_indented!("Fajr:    {} ({})", schedule.fajr_display, schedule.timezone);
    log_indented!("Maghrib: {}", schedule.maghrib_display);
    log_pipe!();
    log_decorated!("Phase: {}", phase.display_name());
    log_indented!(
        "{:02}:{:02}:{:02} {}",
        countdown.hours,
        countdown.minutes,
        countdown.seconds,
        phase.countdown_label()
    );
    log_end!();
    Ok(())
}
