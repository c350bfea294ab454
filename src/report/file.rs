//! Local JSON report file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::info;

use crate::domain::Summary;
use crate::error::Result;

/// File name for a report completed at `at` (UTC, second precision)
pub fn report_file_name(at: DateTime<Utc>) -> String {
    format!(
        "streaming_providers_report_{}.json",
        at.format("%Y_%m_%d_%H_%M_%S")
    )
}

/// Write `summary` into `dir` and return the path written
pub async fn write_report(summary: &Summary, dir: &Path, at: DateTime<Utc>) -> Result<PathBuf> {
    fs::create_dir_all(dir).await?;

    let path = dir.join(report_file_name(at));
    fs::write(&path, summary.to_pretty_json()?).await?;

    info!(path = %path.display(), providers = summary.len(), "Saved report");
    Ok(path)
}
