//! Report outputs built from a finished [`Summary`](crate::domain::Summary).
//!
//! - `file`: timestamped JSON report on local disk
//! - `notification`: chat message limited to the services we care about

pub mod file;
pub mod notification;

pub use file::{report_file_name, write_report};
pub use notification::{Notification, NotificationField, TRACKED_SERVICES};
