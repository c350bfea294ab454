//! Run configuration.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags
//! 2. Environment variables (RADARR_HOST_URL, TMDB_API_KEY, ...)
//! 3. A `.env` file in the working directory
//! 4. Defaults (region `AU`, every sink enabled, report in `.`)
//!
//! The CLI resolves these into one immutable [`Settings`] value that is
//! validated once and then passed by reference to every component.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "AU";

/// Resolved settings for a report run
#[derive(Clone)]
pub struct Settings {
    /// Radarr base URL
    pub radarr_url: String,
    /// Radarr API key
    pub radarr_api_key: String,
    /// TMDB API root
    pub tmdb_url: String,
    /// TMDB API key
    pub tmdb_api_key: String,
    /// Two-letter region code to read availability for
    pub region: String,
    /// Sink settings
    pub sinks: SinkSettings,
    /// Skip movies whose availability lookup fails instead of aborting
    pub continue_on_error: bool,
}

/// Which report outputs run, and where they go
#[derive(Clone)]
pub struct SinkSettings {
    /// Write the JSON report file
    pub save_enabled: bool,
    /// Directory for the JSON report file
    pub report_dir: PathBuf,
    /// Upload the report to MicroBin
    pub microbin_enabled: bool,
    /// MicroBin upload URL
    pub microbin_url: String,
    /// Post the summary to Discord
    pub discord_enabled: bool,
    /// Discord webhook URL
    pub discord_webhook: String,
}

impl Default for SinkSettings {
    fn default() -> Self {
        Self {
            save_enabled: true,
            report_dir: PathBuf::from("."),
            microbin_enabled: true,
            microbin_url: String::new(),
            discord_enabled: true,
            discord_webhook: String::new(),
        }
    }
}

impl Settings {
    /// Check required values and normalize the region code
    ///
    /// Rejects empty credentials and URLs for anything that will be
    /// contacted, so a misconfigured run fails before any network call.
    pub fn validated(mut self) -> Result<Self> {
        require("RADARR_HOST_URL", &self.radarr_url)?;
        require("RADARR_API_KEY", &self.radarr_api_key)?;
        require("TMDB_HOST_URL", &self.tmdb_url)?;
        require("TMDB_API_KEY", &self.tmdb_api_key)?;

        let region = self.region.trim().to_ascii_uppercase();
        if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::config(format!(
                "STREAM_REGION must be a two-letter code, got '{}'",
                self.region
            )));
        }
        self.region = region;

        if self.sinks.microbin_enabled {
            require("MICROBIN_URL", &self.sinks.microbin_url)?;
        }
        if self.sinks.discord_enabled {
            require("DISCORD_WEBHOOK", &self.sinks.discord_webhook)?;
        }

        Ok(self)
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("radarr_url", &self.radarr_url)
            .field("radarr_api_key", &mask(&self.radarr_api_key))
            .field("tmdb_url", &self.tmdb_url)
            .field("tmdb_api_key", &mask(&self.tmdb_api_key))
            .field("region", &self.region)
            .field("sinks", &self.sinks)
            .field("continue_on_error", &self.continue_on_error)
            .finish()
    }
}

impl std::fmt::Debug for SinkSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkSettings")
            .field("save_enabled", &self.save_enabled)
            .field("report_dir", &self.report_dir)
            .field("microbin_enabled", &self.microbin_enabled)
            .field("microbin_url", &self.microbin_url)
            .field("discord_enabled", &self.discord_enabled)
            .field("discord_webhook", &mask(&self.discord_webhook))
            .finish()
    }
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::config(format!("{} is not set", name)));
    }
    Ok(())
}

/// Hide all but the last four characters of a secret
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0 => "(unset)".to_string(),
        n if n <= 4 => "****".to_string(),
        n => format!("****{}", chars[n - 4..].iter().collect::<String>()),
    }
}

/// Parse an on/off setting such as `DISCORD_ENABLED=TRUE`
pub fn parse_toggle(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("expected TRUE or FALSE, got '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            radarr_url: "http://radarr:7878".to_string(),
            radarr_api_key: "radarr-key".to_string(),
            tmdb_url: "https://api.themoviedb.org/3".to_string(),
            tmdb_api_key: "tmdb-key".to_string(),
            region: "au".to_string(),
            sinks: SinkSettings {
                microbin_url: "https://bin.example.com".to_string(),
                discord_webhook: "https://discord.com/api/webhooks/1/abcdef".to_string(),
                ..Default::default()
            },
            continue_on_error: false,
        }
    }

    #[test]
    fn test_validated_normalizes_region() {
        let s = settings().validated().unwrap();
        assert_eq!(s.region, "AU");
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let mut s = settings();
        s.tmdb_api_key = String::new();
        let err = s.validated().unwrap_err();
        assert!(err.to_string().contains("TMDB_API_KEY"));
    }

    #[test]
    fn test_invalid_region_rejected() {
        let mut s = settings();
        s.region = "AUS".to_string();
        assert!(matches!(s.validated(), Err(Error::Config(_))));
    }

    #[test]
    fn test_disabled_sinks_need_no_urls() {
        let mut s = settings();
        s.sinks.microbin_enabled = false;
        s.sinks.microbin_url = String::new();
        s.sinks.discord_enabled = false;
        s.sinks.discord_webhook = String::new();
        assert!(s.validated().is_ok());
    }

    #[test]
    fn test_enabled_sink_without_url_rejected() {
        let mut s = settings();
        s.sinks.discord_webhook = "  ".to_string();
        let err = s.validated().unwrap_err();
        assert!(err.to_string().contains("DISCORD_WEBHOOK"));
    }

    #[test]
    fn test_parse_toggle() {
        assert_eq!(parse_toggle("TRUE"), Ok(true));
        assert_eq!(parse_toggle("on"), Ok(true));
        assert_eq!(parse_toggle("FALSE"), Ok(false));
        assert_eq!(parse_toggle("0"), Ok(false));
        assert!(parse_toggle("maybe").is_err());
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask(""), "(unset)");
        assert_eq!(mask("abc"), "****");
        assert_eq!(mask("0123456789"), "****6789");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let debug = format!("{:?}", settings());
        assert!(!debug.contains("radarr-key"));
        assert!(!debug.contains("abcdef"));
        assert!(debug.contains("radarr:7878"));
    }
}
