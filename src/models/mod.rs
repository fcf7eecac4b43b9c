//! Data shapes shared by the aggregator, the services and the HTTP layer.
//!
//! - [`Collection`]: the merged `domains`/`roles` buckets written to `data.js`.
//! - [`ScanReport`]: per-category file counts for the tracked project.
//! - [`ProjectMetrics`]: the progress snapshot shown in the dashboard header.
//! - [`TodoItem`]: entries of the project todo list.

mod files;
mod metrics;
mod record;
mod todo;

pub use files::*;
pub use metrics::*;
pub use record::*;
pub use todo::*;
