use serde::{Deserialize, Serialize};

/// One entry of the project todo list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u32,
    pub text: String,
    pub status: TodoStatus,
    pub category: String,
}

/// Progress state of a todo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    Completed,
    InProgress,
    Pending,
}

/// Aggregate counts over a todo list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    /// Share of completed items, in percent with one decimal.
    pub completion_rate: f64,
}

/// Todo list together with its stats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoReport {
    pub todos: Vec<TodoItem>,
    pub stats: TodoStats,
}
