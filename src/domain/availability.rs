//! Typed view of TMDB watch-provider payloads.
//!
//! The metadata service returns a loosely structured document keyed by
//! region code. It is validated once, here, so the aggregator only ever
//! sees typed data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a provider offers a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityMode {
    /// Included with a flat monthly subscription
    Flatrate,
    /// Paid rental
    Rent,
    /// Paid purchase
    Buy,
    /// Free with ads
    Ads,
    /// Free
    Free,
}

impl AvailabilityMode {
    pub const ALL: [AvailabilityMode; 5] = [
        AvailabilityMode::Flatrate,
        AvailabilityMode::Rent,
        AvailabilityMode::Buy,
        AvailabilityMode::Ads,
        AvailabilityMode::Free,
    ];
}

/// One streaming service offering a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderEntry {
    pub provider_name: String,
    #[serde(default)]
    pub provider_id: Option<u64>,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub display_priority: Option<u32>,
}

/// Availability of a title within one region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionAvailability {
    /// TMDB page listing all offers for the region
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Vec<ProviderEntry>,
    #[serde(default)]
    pub rent: Vec<ProviderEntry>,
    #[serde(default)]
    pub buy: Vec<ProviderEntry>,
    #[serde(default)]
    pub ads: Vec<ProviderEntry>,
    #[serde(default)]
    pub free: Vec<ProviderEntry>,
}

impl RegionAvailability {
    /// Provider entries offered under `mode`
    pub fn providers(&self, mode: AvailabilityMode) -> &[ProviderEntry] {
        match mode {
            AvailabilityMode::Flatrate => &self.flatrate,
            AvailabilityMode::Rent => &self.rent,
            AvailabilityMode::Buy => &self.buy,
            AvailabilityMode::Ads => &self.ads,
            AvailabilityMode::Free => &self.free,
        }
    }

    /// Every mode under which `provider_name` offers the title
    pub fn modes_for(&self, provider_name: &str) -> Vec<AvailabilityMode> {
        AvailabilityMode::ALL
            .into_iter()
            .filter(|mode| {
                self.providers(*mode)
                    .iter()
                    .any(|p| p.provider_name == provider_name)
            })
            .collect()
    }

    /// Distinct subscription-included provider names, in payload order
    pub fn subscription_providers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.flatrate.len());
        for entry in &self.flatrate {
            if !names.contains(&entry.provider_name.as_str()) {
                names.push(&entry.provider_name);
            }
        }
        names
    }
}

/// Watch-provider response for one movie
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchProviders {
    /// TMDB id echoed back by the service
    #[serde(default)]
    pub id: Option<u64>,

    /// Availability keyed by two-letter region code
    pub results: HashMap<String, RegionAvailability>,
}

impl WatchProviders {
    /// Parse and validate a raw payload from the metadata service
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::data_shape("tmdb", e.to_string()))
    }

    /// Availability for `region`, if the title is offered there at all
    pub fn region(&self, region: &str) -> Option<&RegionAvailability> {
        self.results.get(region)
    }
}
