//! Application-wide constants for iftarr.

use std::time::Duration;

/// Interval between countdown re-evaluations (1 Hz poll).
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long the transient "fast broken" banner stays on screen.
pub const IFTAR_MESSAGE_DURATION: Duration = Duration::from_millis(5000);

/// Base URL for the Aladhan prayer-times endpoint.
pub const ALADHAN_BASE_URL: &str = "https://api.aladhan.com/v1/timings";

/// Base URL for forward geocoding (place-name search).
pub const GEOCODE_SEARCH_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Base URL for reverse geocoding (coordinates -> place label).
pub const REVERSE_GEOCODE_URL: &str =
    "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Maximum number of candidates requested from forward geocoding.
pub const GEOCODE_RESULT_LIMIT: u8 = 6;

/// Network timeout for upstream fetches.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Width of the progress bar in terminal cells.
pub const PROGRESS_BAR_WIDTH: usize = 40;

/// Default display theme when none is configured.
pub const DEFAULT_THEME: &str = "dark";

/// Fallback label when reverse geocoding cannot name the place.
pub const FALLBACK_LOCATION_LABEL: &str = "Current Location";

/// Process exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
