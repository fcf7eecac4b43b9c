//! HTML returned to the dashboard's HTMX requests.

use std::path::Path;

use crate::error::{Result, TrackerError};
use crate::models::CategoryCounts;

pub const DASHBOARD_TITLE: &str = "Project Tracker";

pub const TODOS: &str = include_str!("html/todos.html");
pub const AGENTS: &str = include_str!("html/agents.html");
pub const TIMELINE: &str = include_str!("html/timeline.html");

const DASHBOARD_TEMPLATE: &str = "dashboard.html";
const TITLE_PLACEHOLDER: &str = "{{ title }}";

/// Load `dashboard.html` from `templates_dir` and fill in the title.
pub fn render_dashboard(templates_dir: &Path, title: &str) -> Result<String> {
    let path = templates_dir.join(DASHBOARD_TEMPLATE);
    let template = std::fs::read_to_string(&path)
        .map_err(|source| TrackerError::Template { path, source })?;
    Ok(template.replace(TITLE_PLACEHOLDER, title))
}

/// One card per file category.
pub fn render_file_grid(counts: &CategoryCounts) -> String {
    let mut html = String::from(r#"<div class="grid grid-cols-2 md:grid-cols-4 gap-4">"#);
    for (category, count) in counts.iter() {
        html.push_str(&format!(
            r#"
        <div class="bg-gray-50 rounded-lg p-4 border border-gray-200">
            <p class="text-sm text-gray-600">{category}</p>
            <p class="text-2xl font-bold text-gray-900">{count}</p>
        </div>
        "#
        ));
    }
    html.push_str("</div>");
    html
}
