use serde::{Deserialize, Serialize};

/// Todo counts as shown in the progress header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoTally {
    pub completed: u32,
    pub in_progress: u32,
    pub pending: u32,
}

/// Progress snapshot returned by `/api/progress`.
///
/// Only `total_files` looks at the filesystem; every other field is a
/// placeholder constant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectMetrics {
    pub phase: String,
    /// Overall completion, in percent.
    pub completion: u32,
    pub total_files: usize,
    pub quality_score: u32,
    pub todos: TodoTally,
}
