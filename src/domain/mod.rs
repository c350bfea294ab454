//! Domain types for streamcheck.
//!
//! This module contains the core data structures:
//! - Movie: an owned title and its size on disk
//! - Availability: typed watch-provider payloads per region
//! - Summary: per-provider counts and sizes

pub mod availability;
pub mod movie;
pub mod summary;

// Re-export commonly used types
pub use availability::{AvailabilityMode, ProviderEntry, RegionAvailability, WatchProviders};
pub use movie::{round_gb, Movie, BYTES_PER_GB};
pub use summary::{ProviderTally, Summary};
