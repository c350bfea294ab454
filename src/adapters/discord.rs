//! Discord webhook client for posting the report summary.
//!
//! Endpoint: POST <webhook URL>
//! Body: a single embed built from a [`Notification`].

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::report::Notification;

use super::Notifier;

const SERVICE: &str = "discord";

/// Discord webhook client
pub struct DiscordWebhook {
    webhook: String,
    client: reqwest::Client,
}

/// Webhook execute payload
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    embeds: Vec<Embed<'a>>,
}

#[derive(Debug, Serialize)]
struct Embed<'a> {
    title: &'a str,
    description: &'a str,
    fields: Vec<EmbedField<'a>>,
}

#[derive(Debug, Serialize)]
struct EmbedField<'a> {
    name: &'a str,
    value: &'a str,
}

impl<'a> WebhookPayload<'a> {
    fn from_notification(notification: &'a Notification) -> Self {
        let fields = notification
            .fields
            .iter()
            .map(|f| EmbedField {
                name: &f.name,
                value: &f.value,
            })
            .collect();

        Self {
            embeds: vec![Embed {
                title: &notification.title,
                description: &notification.description,
                fields,
            }],
        }
    }
}

impl DiscordWebhook {
    /// Create a new client
    pub fn new(webhook: impl Into<String>) -> Self {
        Self {
            webhook: webhook.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl std::fmt::Debug for DiscordWebhook {
    // The webhook URL embeds its own secret token
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordWebhook")
            .field("webhook", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    #[instrument(skip_all, fields(fields = notification.fields.len()))]
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let payload = WebhookPayload::from_notification(notification);

        let response = self
            .client
            .post(&self.webhook)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::network(SERVICE, format!("{}: {}", status, text)));
        }

        info!("Posted summary to Discord");
        Ok(())
    }
}
