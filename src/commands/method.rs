//! Calculation-method commands: list the registry or select a method.

use anyhow::{Context, Result};

use crate::config;
use crate::methods::{CALC_METHODS, method_by_id};

/// List all methods, marking the one currently in effect.
pub fn handle_list() -> Result<()> {
    let config = config::load()?;
    let effective = super::effective_method(&config);
    let stored = config.has_stored_method();

    log_block_start!("Available calculation methods:");
    for method in CALC_METHODS {
        let marker = if method.id == effective.id { "*" } else { " " };
        log_indented!("{marker} {:>2}  {} ({})", method.id, method.label, method.region);
    }
    log_pipe!();
    if stored {
        log_decorated!("* currently selected");
    } else {
        log_decorated!("* auto-detected from country; run 'iftarr method <id>' to pin one");
    }
    log_end!();
    Ok(())
}

/// Select and persist a method by id.
pub fn handle_set(id: &str) -> Result<()> {
    let Some(method) = method_by_id(id) else {
        anyhow::bail!("unknown calculation method '{id}'; run 'iftarr method' to list valid ids");
    };

    let mut config = config::load()?;
    config.method = Some(method.id.to_string());
    config::save(&config).context("Failed to save configuration")?;

    log_block_start!("Calculation method set");
    log_indented!("{} ({})", method.label, method.region);
    log_end!();
    Ok(())
}
