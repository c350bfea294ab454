//! Radarr client for listing the movie library.
//!
//! Endpoint: GET /api/v3/movie
//! Auth: X-Api-Key header

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::domain::Movie;
use crate::error::{Error, Result};

use super::{join_url, LibrarySource};

const SERVICE: &str = "radarr";

/// Radarr v3 API client
pub struct RadarrClient {
    /// Base URL of the Radarr instance
    host: String,
    /// API key
    api_key: String,
    /// HTTP client
    client: reqwest::Client,
}

impl RadarrClient {
    /// Create a new client
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build API URL
    fn api_url(&self, resource: &str) -> String {
        join_url(&self.host, &format!("api/v3/{}", resource))
    }
}

impl std::fmt::Debug for RadarrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadarrClient")
            .field("host", &self.host)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl LibrarySource for RadarrClient {
    fn name(&self) -> &str {
        SERVICE
    }

    #[instrument(skip(self), fields(host = %self.host))]
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let response = self
            .client
            .get(self.api_url("movie"))
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::network(SERVICE, format!("{}: {}", status, text)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::from_reqwest(SERVICE, e))?;
        let movies: Vec<Movie> =
            serde_json::from_str(&body).map_err(|e| Error::data_shape(SERVICE, e.to_string()))?;

        debug!(count = movies.len(), "Fetched library");
        Ok(movies)
    }
}
