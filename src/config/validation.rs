//! Configuration validation.
//!
//! Rejects out-of-range or inconsistent settings up front. A countdown built
//! on a bad location or unknown method would be silently wrong, which is
//! worse than failing loudly.

use anyhow::Result;

use super::{Config, Theme};
use crate::methods::method_by_id;

/// Validate a loaded configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = config.longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    // Latitude and longitude only make sense as a pair.
    if config.latitude.is_some() != config.longitude.is_some() {
        anyhow::bail!("latitude and longitude must be configured together");
    }

    if let Some(id) = config.method.as_deref()
        && method_by_id(id).is_none()
    {
        anyhow::bail!(
            "unknown calculation method '{}' (run 'iftarr method' to list valid ids)",
            id
        );
    }

    if let Some(theme) = config.theme.as_deref()
        && Theme::parse(theme).is_none()
    {
        anyhow::bail!("theme must be \"dark\" or \"light\" (got \"{}\")", theme);
    }

    if let Some(cc) = config.country_code.as_deref()
        && cc.len() != 2
    {
        anyhow::bail!(
            "country_code must be an ISO 3166-1 alpha-2 code (got \"{}\")",
            cc
        );
    }

    Ok(())
}
