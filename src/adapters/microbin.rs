//! MicroBin client for publishing the full report as a paste.
//!
//! Endpoint: POST / (multipart upload)
//! The new paste's URL comes back in the `Location` header of a redirect,
//! so redirects are never followed.

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::multipart::{Form, Part};
use reqwest::redirect::Policy;
use reqwest::Url;
use tracing::{info, instrument};

use crate::error::{Error, Result};

use super::PasteService;

const SERVICE: &str = "microbin";

/// How long an uploaded report is kept
pub const EXPIRATION: &str = "1week";

/// Syntax highlighting hint sent with the upload
pub const SYNTAX: &str = "json";

/// File name attached to the uploaded content part
pub const FILE_NAME: &str = "files.json";

/// MicroBin paste client
#[derive(Debug)]
pub struct MicrobinClient {
    /// Upload endpoint
    url: String,
    /// HTTP client (redirects disabled)
    client: reqwest::Client,
}

impl MicrobinClient {
    /// Create a new client posting to `url`
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| Error::from_reqwest(SERVICE, e))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Build multipart form
    fn form(document: &str) -> Result<Form> {
        let content = Part::text(document.to_string())
            .file_name(FILE_NAME)
            .mime_str("application/json")
            .map_err(|e| Error::from_reqwest(SERVICE, e))?;

        Ok(Form::new()
            .text("expiration", EXPIRATION)
            .text("syntax-highlight", SYNTAX)
            .part("content", content))
    }
}

/// Resolve a `Location` header value against the upload URL
fn resolve_location(base: &str, location: &str) -> Result<String> {
    let base = Url::parse(base).map_err(|e| Error::config(format!("invalid paste URL: {}", e)))?;
    let resolved = base
        .join(location)
        .map_err(|e| Error::data_shape(SERVICE, format!("invalid Location header: {}", e)))?;
    Ok(resolved.to_string())
}

#[async_trait]
impl PasteService for MicrobinClient {
    #[instrument(skip(self, document), fields(url = %self.url, bytes = document.len()))]
    async fn publish(&self, document: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.url)
            .multipart(Self::form(document)?)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(SERVICE, e))?;

        let status = response.status();
        if !(status.is_redirection() || status.is_success()) {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::network(SERVICE, format!("{}: {}", status, text)));
        }

        let location = response
            .headers()
            .get(LOCATION)
            .ok_or_else(|| Error::data_shape(SERVICE, "response has no Location header"))?
            .to_str()
            .map_err(|e| Error::data_shape(SERVICE, format!("unreadable Location header: {}", e)))?;

        let paste_url = resolve_location(&self.url, location)?;
        info!(%paste_url, "Published report");
        Ok(paste_url)
    }
}
