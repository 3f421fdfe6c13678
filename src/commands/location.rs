//! Location selection commands.
//!
//! `iftarr location <query>` searches by place name and lets the user pick
//! from the candidates; `iftarr location --coords LAT,LON` reverse-geocodes
//! raw coordinates. Either way the pick is persisted and the calculation
//! method is re-detected from the new country, matching a location change
//! in any client of the prayer-times API.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::api::GeocodeClient;
use crate::config;
use crate::location::Location;
use crate::methods::method_for_country;

/// Search for a place by name, pick a candidate, persist it.
pub fn handle_search(query: &str) -> Result<()> {
    let client = GeocodeClient::new().context("Failed to build geocoding client")?;

    log_block_start!("Searching for \"{query}\"...");
    let candidates = client
        .search(query)
        .context("Forward geocoding lookup failed")?;

    if candidates.is_empty() {
        log_decorated!("No places matched \"{query}\"");
        log_end!();
        return Ok(());
    }

    log_decorated!("Select a location:");
    for (index, candidate) in candidates.iter().enumerate() {
        log_indented!(
            "{}. {} ({:.4}, {:.4})",
            index + 1,
            candidate.display_label(),
            candidate.latitude,
            candidate.longitude
        );
    }
    log_pipe!();

    let choice = prompt_choice(candidates.len())?;
    let Some(choice) = choice else {
        log_decorated!("Cancelled");
        log_end!();
        return Ok(());
    };

    let location = candidates[choice].clone().into_location();
    persist_location(&location)?;
    Ok(())
}

/// Reverse-geocode raw coordinates and persist the result.
pub fn handle_coords(latitude: f64, longitude: f64) -> Result<()> {
    let client = GeocodeClient::new().context("Failed to build geocoding client")?;

    log_block_start!("Looking up ({latitude:.4}, {longitude:.4})...");
    let location = client.reverse(latitude, longitude);
    persist_location(&location)?;
    Ok(())
}

/// Store the location and re-detect the method for its country.
fn persist_location(location: &Location) -> Result<()> {
    let mut config = config::load()?;
    config.set_location(location);

    let method = method_for_country(location.country_code.as_deref());
    config.method = Some(method.id.to_string());

    config::save(&config).context("Failed to save configuration")?;

    log_decorated!("Saved location: {location}");
    log_indented!("Calculation method: {} ({})", method.label, method.region);
    log_end!();
    Ok(())
}

/// Read a 1-based selection from stdin. Empty input cancels.
fn prompt_choice(count: usize) -> Result<Option<usize>> {
    print!("Enter choice [1-{count}]: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read selection")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let index: usize = trimmed
        .parse()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .with_context(|| format!("Selection must be a number between 1 and {count}"))?;
    Ok(Some(index - 1))
}
