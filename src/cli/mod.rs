//! Command-line interface for streamcheck.
//!
//! Provides commands for producing a streaming report and for inspecting
//! the configuration a run would use. Every setting can come from a flag or
//! from the environment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::adapters::{DiscordWebhook, MicrobinClient, RadarrClient, TmdbClient};
use crate::adapters::tmdb::DEFAULT_TMDB_URL;
use crate::config::{mask, parse_toggle, Settings, SinkSettings, DEFAULT_REGION};
use crate::core::Runner;
use crate::report::TRACKED_SERVICES;

/// streamcheck - Find which streaming subscriptions carry your movies
#[derive(Parser, Debug)]
#[command(name = "streamcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the report and publish it to every enabled sink
    Run {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Show resolved configuration (debug)
    Config {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Settings shared by every command
#[derive(Args, Clone, Debug)]
pub struct SettingsArgs {
    /// Radarr base URL
    #[arg(long, env = "RADARR_HOST_URL", default_value = "")]
    pub radarr_url: String,

    /// Radarr API key
    #[arg(long, env = "RADARR_API_KEY", default_value = "", hide_env_values = true)]
    pub radarr_api_key: String,

    /// TMDB API root
    #[arg(long, env = "TMDB_HOST_URL", default_value = DEFAULT_TMDB_URL)]
    pub tmdb_url: String,

    /// TMDB API key
    #[arg(long, env = "TMDB_API_KEY", default_value = "", hide_env_values = true)]
    pub tmdb_api_key: String,

    /// Two-letter region code to check availability in
    #[arg(long, env = "STREAM_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Write the JSON report file
    #[arg(long, env = "SAVE_ENABLE", default_value = "TRUE", action = ArgAction::Set, value_parser = parse_toggle)]
    pub save_enabled: bool,

    /// Directory for the JSON report file
    #[arg(long, env = "REPORT_DIR", default_value = ".")]
    pub report_dir: PathBuf,

    /// Upload the report to MicroBin
    #[arg(long, env = "MICROBIN_ENABLED", default_value = "TRUE", action = ArgAction::Set, value_parser = parse_toggle)]
    pub microbin_enabled: bool,

    /// MicroBin upload URL
    #[arg(long, env = "MICROBIN_URL", default_value = "")]
    pub microbin_url: String,

    /// Post the summary to Discord
    #[arg(long, env = "DISCORD_ENABLED", default_value = "TRUE", action = ArgAction::Set, value_parser = parse_toggle)]
    pub discord_enabled: bool,

    /// Discord webhook URL
    #[arg(long, env = "DISCORD_WEBHOOK", default_value = "", hide_env_values = true)]
    pub discord_webhook: String,

    /// Skip movies whose availability lookup fails instead of aborting
    #[arg(long, env = "CONTINUE_ON_ERROR", default_value = "FALSE", action = ArgAction::Set, value_parser = parse_toggle)]
    pub continue_on_error: bool,
}

impl From<SettingsArgs> for Settings {
    fn from(args: SettingsArgs) -> Self {
        Settings {
            radarr_url: args.radarr_url,
            radarr_api_key: args.radarr_api_key,
            tmdb_url: args.tmdb_url,
            tmdb_api_key: args.tmdb_api_key,
            region: args.region,
            sinks: SinkSettings {
                save_enabled: args.save_enabled,
                report_dir: args.report_dir,
                microbin_enabled: args.microbin_enabled,
                microbin_url: args.microbin_url,
                discord_enabled: args.discord_enabled,
                discord_webhook: args.discord_webhook,
            },
            continue_on_error: args.continue_on_error,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Run { settings } => run_report(settings.into()).await,
            Commands::Config { settings } => show_config(settings.into()),
        }
    }
}

/// Build the report and publish it
async fn run_report(settings: Settings) -> Result<()> {
    let settings = settings
        .validated()
        .context("Invalid configuration")?;

    let radarr = RadarrClient::new(&settings.radarr_url, &settings.radarr_api_key);
    let tmdb = TmdbClient::new(&settings.tmdb_url, &settings.tmdb_api_key);
    let microbin = MicrobinClient::new(&settings.sinks.microbin_url)
        .context("Failed to create MicroBin client")?;
    let discord = DiscordWebhook::new(&settings.sinks.discord_webhook);

    let outcome = Runner::new(&settings, &radarr, &tmdb)
        .with_paste(&microbin)
        .with_notifier(&discord)
        .run()
        .await
        .context("Streaming report failed")?;

    println!();
    println!(
        "Providers found: {} ({} movies checked, {} skipped)",
        outcome.summary.len(),
        outcome.movies_total,
        outcome.movies_skipped
    );
    if let Some(path) = &outcome.report_path {
        println!("Report saved:    {}", path.display());
    }
    if let Some(url) = &outcome.paste_url {
        println!("Report posted:   {}", url);
    }
    if outcome.notified {
        println!("Discord notified");
    }

    Ok(())
}

/// Print the resolved configuration with secrets masked
fn show_config(settings: Settings) -> Result<()> {
    let enabled = |on: bool| if on { "enabled" } else { "disabled" };
    let sinks = &settings.sinks;

    println!("streamcheck configuration");
    println!();
    println!("Library (Radarr):");
    println!("  URL:      {}", settings.radarr_url);
    println!("  API key:  {}", mask(&settings.radarr_api_key));
    println!();
    println!("Metadata (TMDB):");
    println!("  URL:      {}", settings.tmdb_url);
    println!("  API key:  {}", mask(&settings.tmdb_api_key));
    println!("  Region:   {}", settings.region);
    println!();
    println!("Sinks:");
    println!(
        "  Report file: {} ({})",
        enabled(sinks.save_enabled),
        sinks.report_dir.display()
    );
    println!(
        "  MicroBin:    {} ({})",
        enabled(sinks.microbin_enabled),
        sinks.microbin_url
    );
    println!(
        "  Discord:     {} ({})",
        enabled(sinks.discord_enabled),
        mask(&sinks.discord_webhook)
    );
    println!("  Tracked services: {}", TRACKED_SERVICES.join(", "));
    println!();
    println!(
        "On lookup failure: {}",
        if settings.continue_on_error { "skip movie" } else { "abort run" }
    );
    println!();

    match settings.validated() {
        Ok(_) => println!("Configuration is valid"),
        Err(e) => println!("Configuration problem: {}", e),
    }

    Ok(())
}
