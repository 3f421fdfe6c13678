//! One-shot CLI command handlers.
//!
//! Each command is implemented in its own submodule. Commands run to
//! completion and exit; only the default action starts the live countdown
//! loop in `core`.

pub mod location;
pub mod method;
pub mod times;

use crate::config::Config;
use crate::methods::{CalcMethod, method_by_id, method_for_country};

/// The method a session would use right now: the stored one, or the
/// country-based default when nothing is stored. Does not persist anything.
pub(crate) fn effective_method(config: &Config) -> &'static CalcMethod {
    config
        .method
        .as_deref()
        .and_then(method_by_id)
        .unwrap_or_else(|| method_for_country(config.country_code.as_deref()))
}
