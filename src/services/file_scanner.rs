//! Per-category file statistics for the tracked project.

use std::path::Path;

use crate::models::{FileDetails, ScanReport};

use super::walk::{matching_names, Depth};

/// Planning documents expected at the project root.
pub const PLANNING_FILES: [&str; 5] = [
    "SPECIFICATION.md",
    "PHASE1-PLAN.md",
    "PROJECT-TRACKER.md",
    "REVIEW-REPORT.md",
    "START_HERE.md",
];

/// Presence of this file means the static viewer is installed.
pub const GUI_MARKER: &str = "viewer.html";

/// Files that make up the static viewer.
pub const GUI_FILES: [&str; 4] = ["viewer.html", "app.js", "styles.css", "data.js"];

/// The dashboard always counts itself.
pub const TRACKER_ENTRY: &str = "Dashboard (in progress)";

/// Scan `project_root` and count files per category.
pub fn scan_project_files(project_root: &Path) -> ScanReport {
    let details = FileDetails {
        schemas: matching_names(&project_root.join("schemas"), "json", Depth::Shallow),
        docs: matching_names(&project_root.join("docs"), "md", Depth::Shallow),
        examples: matching_names(&project_root.join("examples"), "json", Depth::Recursive),
        tools: matching_names(
            &project_root.join("tools").join("role-manager"),
            "md",
            Depth::Shallow,
        ),
        planning: PLANNING_FILES
            .iter()
            .filter(|name| project_root.join(name).exists())
            .map(|name| name.to_string())
            .collect(),
        gui: if project_root.join(GUI_MARKER).exists() {
            GUI_FILES.iter().map(|name| name.to_string()).collect()
        } else {
            Vec::new()
        },
        tracker: vec![TRACKER_ENTRY.to_string()],
    };

    let report = ScanReport::from(details);
    tracing::debug!(
        "Scanned {}: {} files",
        project_root.display(),
        report.total
    );
    report
}
