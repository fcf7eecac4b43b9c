//! Read-only views over the tracked project.
//!
//! Nothing here fails on a missing directory: absent inputs count as zero.

pub mod file_scanner;
pub mod metrics;
pub mod todos;
mod walk;

pub use file_scanner::scan_project_files;
pub use metrics::get_project_metrics;
pub use todos::{builtin_todos, load_todos, todo_report, todo_stats};
