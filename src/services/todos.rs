//! The project todo list and its derived counts.

use std::path::Path;

use crate::error::{Result, TrackerError};
use crate::models::{TodoItem, TodoReport, TodoStats, TodoStatus};

fn todo(id: u32, text: &str, status: TodoStatus, category: &str) -> TodoItem {
    TodoItem {
        id,
        text: text.to_string(),
        status,
        category: category.to_string(),
    }
}

/// The todo list used when no state file is configured.
pub fn builtin_todos() -> Vec<TodoItem> {
    use TodoStatus::*;

    vec![
        todo(1, "Create Phase 1 implementation plan document", Completed, "planning"),
        todo(2, "Define PoC scope and success criteria", Completed, "planning"),
        todo(3, "Stop framework viewer server and clean up", Completed, "infrastructure"),
        todo(4, "Save raw conversation log for digital twin project", Completed, "documentation"),
        todo(5, "Initialize Git repository for project", Completed, "infrastructure"),
        todo(6, "Create bespoke visual project tracker dashboard", InProgress, "tooling"),
        todo(7, "Hand off Phase 1 implementation to Gemini", Pending, "coordination"),
        todo(8, "Review Gemini's Phase 1 code for quality", Pending, "quality"),
        todo(9, "Create demo video showing PoC in action", Pending, "demo"),
        todo(10, "Package submission for Anthropic", Pending, "delivery"),
    ]
}

/// Read a todo list from a JSON array of [`TodoItem`]s.
pub fn load_todos(path: &Path) -> Result<Vec<TodoItem>> {
    let content = std::fs::read_to_string(path).map_err(|e| TrackerError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| TrackerError::json(path, e))
}

pub fn todo_stats(todos: &[TodoItem]) -> TodoStats {
    let count = |status: TodoStatus| todos.iter().filter(|t| t.status == status).count();

    let total = todos.len();
    let completed = count(TodoStatus::Completed);
    let completion_rate = if total == 0 {
        0.0
    } else {
        (completed as f64 / total as f64 * 1000.0).round() / 10.0
    };

    TodoStats {
        total,
        completed,
        in_progress: count(TodoStatus::InProgress),
        pending: count(TodoStatus::Pending),
        completion_rate,
    }
}

/// Todo list plus stats, from `source` when given, else the built-in list.
pub fn todo_report(source: Option<&Path>) -> Result<TodoReport> {
    let todos = match source {
        Some(path) => load_todos(path)?,
        None => builtin_todos(),
    };
    let stats = todo_stats(&todos);
    Ok(TodoReport { todos, stats })
}
