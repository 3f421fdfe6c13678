//! Geographic location consumed by the countdown core.
//!
//! The core is agnostic to how a `Location` was obtained - forward search,
//! reverse lookup, or hand-edited config all produce the same shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable place label, e.g. "Istanbul, Turkey".
    pub label: String,
    /// ISO 3166-1 alpha-2 code, when known. Drives default method selection.
    pub country_code: Option<String>,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.4}, {:.4})", self.label, self.latitude, self.longitude)
    }
}
