//! streamcheck - Streaming availability report for a Radarr library
//!
//! Cross-references the movies you already own against TMDB's streaming
//! availability for one region, and reports which subscription services
//! carry them and how much disk space they account for.
//!
//! # Flow
//!
//! A run is a single sequential pass:
//! - list every movie in Radarr
//! - look up each movie's watch providers on TMDB
//! - fold the subscription ("flatrate") providers into a summary
//! - save the summary to a timestamped JSON file, upload it to MicroBin,
//!   and post the headline numbers to a Discord webhook
//!
//! # Modules
//!
//! - `adapters`: External services (Radarr, TMDB, MicroBin, Discord)
//! - `core`: Aggregation and the run driver
//! - `domain`: Data structures (Movie, WatchProviders, Summary)
//! - `report`: Report file and chat notification formatting
//! - `config`: Validated run settings
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Produce a report using settings from the environment or .env
//! streamcheck run
//!
//! # Check another region without notifying anyone
//! streamcheck run --region NZ --discord-enabled false
//!
//! # Show what a run would use
//! streamcheck config
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod report;

// Re-export main types at crate root for convenience
pub use config::Settings;
pub use core::{Aggregator, RunOutcome, Runner};
pub use domain::{Movie, ProviderTally, Summary, WatchProviders};
pub use error::{Error, Result};
