//! Per-provider summary produced by the aggregator.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::movie::round_gb;

/// Running totals for one streaming provider
///
/// Fields are declared in serialized key order (`GB` sorts before `count`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderTally {
    /// Total on-disk size of the matched movies, in GB (two decimals)
    #[serde(rename = "GB")]
    pub gigabytes: f64,

    /// Number of distinct movies the provider carries
    pub count: u64,
}

impl ProviderTally {
    /// Credit one movie of `size_gb` gigabytes to this provider
    pub(crate) fn record(&mut self, size_gb: f64) {
        self.count += 1;
        self.gigabytes = round_gb(self.gigabytes + size_gb);
    }
}

/// Provider name → tally, sorted by provider name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary {
    providers: BTreeMap<String, ProviderTally>,
}

impl Summary {
    /// Tally for `provider`, if it was observed
    pub fn get(&self, provider: &str) -> Option<&ProviderTally> {
        self.providers.get(provider)
    }

    /// Iterate providers in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, ProviderTally> {
        self.providers.iter()
    }

    /// Number of providers observed
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider was observed
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub(crate) fn tally_mut(&mut self, provider: &str) -> &mut ProviderTally {
        self.providers.entry(provider.to_string()).or_default()
    }

    /// Render as key-sorted JSON indented with four spaces
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = (&'a String, &'a ProviderTally);
    type IntoIter = btree_map::Iter<'a, String, ProviderTally>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}
