//! Configuration system for iftarr.
//!
//! A single TOML file persists everything the countdown needs between runs:
//! the last-selected location, the calculation method id, and the display
//! theme. Structure:
//!
//! ```toml
//! #[Location]
//! latitude = 41.0082        # Geographic latitude (-90 to 90)
//! longitude = 28.9784       # Geographic longitude (-180 to 180)
//! label = "Istanbul, Turkey"
//! country_code = "TR"       # ISO 3166-1 alpha-2, optional
//!
//! #[Prayer times]
//! method = "13"             # Calculation method id (see `iftarr method`)
//!
//! #[Display]
//! theme = "dark"            # "dark" or "light"
//! ```
//!
//! Every field is optional: a missing file or missing location simply means
//! the user has not run `iftarr location` yet. Validation rejects
//! out-of-range coordinates and unknown method/theme values with a helpful
//! message instead of limping along with a wrong-looking countdown.

pub mod loading;
pub mod validation;


use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THEME;
use crate::location::Location;

pub use loading::{get_config_path, load, load_from_path, save, set_config_dir};

/// Display theme for the countdown screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub label: Option<String>,
    pub country_code: Option<String>,
    /// Calculation method id from the registry, e.g. "3" or "uz".
    pub method: Option<String>,
    pub theme: Option<String>,
}

impl Config {
    /// The stored location, if one has been selected.
    pub fn location(&self) -> Option<Location> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Location {
                latitude,
                longitude,
                label: self
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("{latitude:.4}, {longitude:.4}")),
                country_code: self.country_code.clone(),
            }),
            _ => None,
        }
    }

    /// Store a location, replacing any previous one.
    pub fn set_location(&mut self, location: &Location) {
        self.latitude = Some(location.latitude);
        self.longitude = Some(location.longitude);
        self.label = Some(location.label.clone());
        self.country_code = location.country_code.clone();
    }

    /// Whether a calculation method has ever been chosen (by the user or by
    /// country auto-detection). Checked once at session construction; only
    /// when false does auto-selection run.
    pub fn has_stored_method(&self) -> bool {
        self.method.is_some()
    }

    /// The configured theme, defaulting to dark.
    pub fn theme(&self) -> Theme {
        self.theme
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_else(|| Theme::parse(DEFAULT_THEME).unwrap_or(Theme::Dark))
    }

    /// Log the effective configuration in the standard indented style.
    pub fn log_summary(&self) {
        log_block_start!("Loaded configuration");
        match self.location() {
            Some(location) => log_indented!("Location: {location}"),
            None => log_indented!("Location: none (run 'iftarr location <city>')"),
        }
        match self
            .method
            .as_deref()
            .and_then(crate::methods::method_by_id)
        {
            Some(method) => log_indented!("Method: {} ({})", method.label, method.region),
            None => log_indented!("Method: auto (by country)"),
        }
        log_indented!("Theme: {}", self.theme().as_str());
    }
}
