//! Adapter interfaces for external systems.
//!
//! Adapters wrap the remote services a report run talks to: the movie
//! library (Radarr), the metadata service (TMDB), the paste service
//! (MicroBin) and the chat webhook (Discord). The runner only sees the
//! traits below, so tests can substitute in-memory fakes.

pub mod discord;
pub mod microbin;
pub mod radarr;
pub mod tmdb;

use async_trait::async_trait;

use crate::domain::{Movie, WatchProviders};
use crate::error::Result;
use crate::report::Notification;

pub use discord::DiscordWebhook;
pub use microbin::MicrobinClient;
pub use radarr::RadarrClient;
pub use tmdb::TmdbClient;

/// Supplies the movies the user owns
#[async_trait]
pub trait LibrarySource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch the full library
    async fn list_movies(&self) -> Result<Vec<Movie>>;
}

/// Supplies streaming availability per movie
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch region-keyed availability for one movie
    async fn get_providers(&self, tmdb_id: u64) -> Result<WatchProviders>;
}

/// Stores a document and hands back a shareable link
#[async_trait]
pub trait PasteService: Send + Sync {
    /// Upload `document` and return its retrieval URL
    async fn publish(&self, document: &str) -> Result<String>;
}

/// Delivers the finished report to people
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `notification`
    async fn notify(&self, notification: &Notification) -> Result<()>;
}

/// Join a base URL and a path without doubling or dropping the slash
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
