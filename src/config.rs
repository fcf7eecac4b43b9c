//! Runtime configuration, built once and handed to each component.

use std::path::{Path, PathBuf};

/// Directory holding this crate's bundled assets.
const CRATE_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Default name of the global the browser viewer reads.
pub const DEFAULT_GLOBAL_VAR: &str = "window.CRF_DATA";

/// Configuration for the dashboard server and its services.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    /// Root of the role framework project being tracked (from CRF_TRACKER_ROOT)
    pub project_root: PathBuf,
    /// Directory served under `/static` (from CRF_TRACKER_STATIC_DIR)
    pub static_dir: PathBuf,
    /// Directory holding `dashboard.html` (from CRF_TRACKER_TEMPLATES_DIR)
    pub templates_dir: PathBuf,
    /// Optional JSON file with the todo list (from CRF_TRACKER_TODOS_FILE)
    pub todos_file: Option<PathBuf>,
}

impl TrackerConfig {
    /// Tracks `project_root`, using the bundled static files and templates.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let crate_dir = Path::new(CRATE_DIR);
        Self {
            project_root: project_root.into(),
            static_dir: crate_dir.join("static"),
            templates_dir: crate_dir.join("templates"),
            todos_file: None,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let project_root = std::env::var_os("CRF_TRACKER_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = Self::new(project_root);
        if let Some(dir) = std::env::var_os("CRF_TRACKER_STATIC_DIR") {
            config.static_dir = dir.into();
        }
        if let Some(dir) = std::env::var_os("CRF_TRACKER_TEMPLATES_DIR") {
            config.templates_dir = dir.into();
        }
        config.todos_file = std::env::var_os("CRF_TRACKER_TODOS_FILE").map(PathBuf::from);
        config
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = dir.into();
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn with_todos_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.todos_file = Some(path.into());
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Where the aggregator reads from and writes to.
#[derive(Clone, Debug)]
pub struct AggregatorConfig {
    /// Directory scanned recursively for `*.json`
    pub examples_dir: PathBuf,
    /// Output artifact, overwritten on every run
    pub output: PathBuf,
    /// Global the JSON literal is assigned to
    pub global_var: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            examples_dir: PathBuf::from("examples"),
            output: PathBuf::from("data.js"),
            global_var: DEFAULT_GLOBAL_VAR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_points_assets_at_crate_dir() {
        let config = TrackerConfig::new("/tmp/project");
        assert_eq!(config.project_root, PathBuf::from("/tmp/project"));
        assert!(config.static_dir.ends_with("static"));
        assert!(config.templates_dir.ends_with("templates"));
        assert!(config.todos_file.is_none());
    }

    #[test]
    fn builders_override_fields() {
        let config = TrackerConfig::new(".")
            .with_project_root("/srv/crf")
            .with_templates_dir("/srv/templates")
            .with_todos_file("/srv/todos.json");
        assert_eq!(config.project_root, PathBuf::from("/srv/crf"));
        assert_eq!(config.templates_dir, PathBuf::from("/srv/templates"));
        assert_eq!(config.todos_file, Some(PathBuf::from("/srv/todos.json")));
    }

    #[test]
    fn aggregator_defaults_match_viewer_layout() {
        let config = AggregatorConfig::default();
        assert_eq!(config.examples_dir, PathBuf::from("examples"));
        assert_eq!(config.output, PathBuf::from("data.js"));
        assert_eq!(config.global_var, "window.CRF_DATA");
    }
}
