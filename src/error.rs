use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors raised while reading project files.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed, but its top level is an array or scalar.
    #[error("{} holds a JSON {kind}, expected an object", path.display())]
    NotAnObject { path: PathBuf, kind: &'static str },

    #[error("failed to load template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TrackerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
