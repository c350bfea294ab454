//! Folds library movies and their availability into a [`Summary`].

use tracing::debug;

use crate::domain::{Movie, Summary, WatchProviders};

/// Accumulates subscription providers for one region
#[derive(Debug, Clone)]
pub struct Aggregator {
    region: String,
    summary: Summary,
}

impl Aggregator {
    /// Create an aggregator reading availability for `region`
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            summary: Summary::default(),
        }
    }

    /// Credit `movie` to every subscription provider carrying it in the region
    ///
    /// Returns the number of providers credited. A movie with no entry for
    /// the region contributes nothing.
    pub fn add(&mut self, movie: &Movie, availability: &WatchProviders) -> usize {
        let Some(region) = availability.region(&self.region) else {
            debug!(title = %movie.title, region = %self.region, "Not available in region");
            return 0;
        };

        let size_gb = movie.size_gb();
        let providers = region.subscription_providers();
        for name in &providers {
            debug!(
                title = %movie.title,
                provider = %name,
                modes = ?region.modes_for(name),
                "Crediting provider"
            );
            self.summary.tally_mut(name).record(size_gb);
        }

        providers.len()
    }

    /// Consume the aggregator and return the finished summary
    pub fn finish(self) -> Summary {
        self.summary
    }

    /// Aggregate a whole sequence of (movie, availability) pairs
    pub fn summarize<'a, I>(region: &str, pairs: I) -> Summary
    where
        I: IntoIterator<Item = (&'a Movie, &'a WatchProviders)>,
    {
        let mut aggregator = Self::new(region);
        for (movie, availability) in pairs {
            aggregator.add(movie, availability);
        }
        aggregator.finish()
    }
}
