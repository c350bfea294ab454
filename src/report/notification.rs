//! Chat notification built from a summary.

use serde::{Deserialize, Serialize};

use crate::domain::{round_gb, ProviderTally, Summary};

/// Services worth mentioning in the chat message
///
/// Every provider is still present in the file and paste reports.
pub const TRACKED_SERVICES: [&str; 7] = [
    "Stan",
    "Netflix",
    "BINGE",
    "Foxtel Now",
    "Amazon Prime Video",
    "Disney Plus",
    "Paramount Plus",
];

pub const TITLE: &str = "Streaming Check";

const INTRO: &str =
    "Checking the TMDB, you contain media that overlap streaming platforms.";

/// A rich chat message: title, description, one field per provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub fields: Vec<NotificationField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationField {
    pub name: String,
    pub value: String,
}

impl Notification {
    /// Build the message for `summary`, linking `paste_url` when present
    pub fn from_summary(summary: &Summary, paste_url: Option<&str>) -> Self {
        let description = match paste_url {
            Some(url) => format!("{} Full data available [here]({}).", INTRO, url),
            None => INTRO.to_string(),
        };

        let fields = summary
            .iter()
            .filter(|(name, _)| TRACKED_SERVICES.contains(&name.as_str()))
            .map(|(name, tally)| NotificationField {
                name: name.clone(),
                value: field_value(tally),
            })
            .collect();

        Self {
            title: TITLE.to_string(),
            description,
            fields,
        }
    }
}

/// `{:?}` keeps a trailing `.0` on whole numbers (`3.0GB`, `12.5GB`)
fn field_value(tally: &ProviderTally) -> String {
    format!(
        "{} movies found! ({:?}GB)",
        tally.count,
        round_gb(tally.gigabytes)
    )
}
