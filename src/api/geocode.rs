//! Geocoding clients: forward place-name search and reverse coordinate
//! lookup.
//!
//! Both exist solely to construct a [`Location`]; the countdown core never
//! talks to them. Forward search failures are real errors (the user asked
//! for a specific place), while reverse lookup degrades to a generic label
//! so a missing place name never blocks the countdown.

use serde::Deserialize;

use crate::constants::{
    FALLBACK_LOCATION_LABEL, GEOCODE_RESULT_LIMIT, GEOCODE_SEARCH_URL, REVERSE_GEOCODE_URL,
};
use crate::error::CoreError;
use crate::location::Location;

/// One forward-search candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoCandidate {
    pub name: String,
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCandidate {
    /// Label shown in the selection list: "Name, Region, Country".
    pub fn display_label(&self) -> String {
        [
            Some(self.name.as_str()),
            self.admin1.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Convert into the persisted location shape.
    pub fn into_location(self) -> Location {
        let label = match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        };
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            label,
            country_code: self.country_code.map(|cc| cc.to_uppercase()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<GeoCandidate>>,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    city: Option<String>,
    #[serde(rename = "countryName", default)]
    country_name: Option<String>,
    #[serde(rename = "countryCode", default)]
    country_code: Option<String>,
}

pub struct GeocodeClient {
    client: reqwest::blocking::Client,
    search_url: String,
    reverse_url: String,
}

impl GeocodeClient {
    pub fn new() -> Result<Self, CoreError> {
        Ok(Self {
            client: super::build_client()?,
            search_url: GEOCODE_SEARCH_URL.to_string(),
            reverse_url: REVERSE_GEOCODE_URL.to_string(),
        })
    }

    /// Client pointed at non-default endpoints. Used by tests.
    pub fn with_urls(
        search_url: impl Into<String>,
        reverse_url: impl Into<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            client: super::build_client()?,
            search_url: search_url.into(),
            reverse_url: reverse_url.into(),
        })
    }

    /// Forward lookup: place-name query to candidate list. An empty result
    /// set is not an error.
    pub fn search(&self, query: &str) -> Result<Vec<GeoCandidate>, CoreError> {
        let count = GEOCODE_RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("name", query),
                ("count", count.as_str()),
                ("language", "en"),
            ])
            .send()
            .map_err(|e| CoreError::UpstreamFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CoreError::UpstreamFetch(format!(
                "geocoding error: {}",
                response.status().as_u16()
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .map_err(|e| CoreError::UpstreamFetch(format!("malformed geocoding response: {e}")))?;
        Ok(parsed.results.unwrap_or_default())
    }

    /// Reverse lookup: coordinates to a labeled location. Any failure falls
    /// back to a generic label with the coordinates kept intact.
    pub fn reverse(&self, latitude: f64, longitude: f64) -> Location {
        let fallback = Location {
            latitude,
            longitude,
            label: FALLBACK_LOCATION_LABEL.to_string(),
            country_code: None,
        };

        let response = self
            .client
            .get(&self.reverse_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send();

        let parsed: ReverseResponse = match response {
            Ok(r) if r.status().is_success() => match r.json() {
                Ok(parsed) => parsed,
                Err(_) => return fallback,
            },
            _ => return fallback,
        };

        let label: Vec<String> = [parsed.city, parsed.country_name]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        Location {
            latitude,
            longitude,
            label: if label.is_empty() {
                FALLBACK_LOCATION_LABEL.to_string()
            } else {
                label.join(", ")
            },
            country_code: parsed.country_code.filter(|cc| !cc.is_empty()),
        }
    }
}
