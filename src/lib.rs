//! Progress dashboard for the role framework.
//!
//! Two unrelated flows share this crate:
//!
//! - [`aggregator`]: merges the scattered example JSON files into one
//!   `data.js` artifact for the static viewer.
//! - [`services`] + [`api`]: file statistics, placeholder metrics and the
//!   todo list, served by a small axum dashboard.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, TrackerError};
