//! TMDB client for per-movie watch providers.
//!
//! Endpoint: GET /movie/{id}/watch/providers
//! Auth: api_key query parameter

use async_trait::async_trait;
use tracing::instrument;

use crate::domain::WatchProviders;
use crate::error::{Error, Result};

use super::{join_url, AvailabilitySource};

const SERVICE: &str = "tmdb";

/// Default public TMDB v3 API root
pub const DEFAULT_TMDB_URL: &str = "https://api.themoviedb.org/3";

/// TMDB v3 API client
pub struct TmdbClient {
    host: String,
    api_key: String,
    language: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new client with `en-US` as the response language
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            language: "en-US".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// URL of the watch-provider resource for `tmdb_id` (without credentials)
    fn providers_url(&self, tmdb_id: u64) -> String {
        join_url(&self.host, &format!("movie/{}/watch/providers", tmdb_id))
    }
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("host", &self.host)
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .finish()
    }
}

#[async_trait]
impl AvailabilitySource for TmdbClient {
    fn name(&self) -> &str {
        SERVICE
    }

    #[instrument(skip(self))]
    async fn get_providers(&self, tmdb_id: u64) -> Result<WatchProviders> {
        let response = self
            .client
            .get(self.providers_url(tmdb_id))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::from_reqwest(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::network(
                SERVICE,
                format!("movie {}: {}: {}", tmdb_id, status, text),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::from_reqwest(SERVICE, e))?;
        WatchProviders::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_providers_url() {
        let client = TmdbClient::new(DEFAULT_TMDB_URL, "KEY");
        assert_eq!(
            client.providers_url(550),
            "https://api.themoviedb.org/3/movie/550/watch/providers"
        );
    }

    #[test]
    fn test_default_language() {
        let client = TmdbClient::new(DEFAULT_TMDB_URL, "KEY");
        assert_eq!(client.language, "en-US");
        assert!(!format!("{:?}", client).contains("KEY"));
    }
}
