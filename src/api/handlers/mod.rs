use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Html, response::IntoResponse, Json};

use crate::config::TrackerConfig;
use crate::models::*;
use crate::services;

use super::fragments;

type AppState = State<Arc<TrackerConfig>>;

/// Log the full error and hand the client a generic message.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Pages
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy", "service": "project-tracker" }))
}

pub async fn dashboard(State(config): AppState) -> Result<Html<String>, (StatusCode, String)> {
    fragments::render_dashboard(&config.templates_dir, fragments::DASHBOARD_TITLE)
        .map(Html)
        .map_err(internal_error)
}

// ============================================================
// Live data
// ============================================================

pub async fn get_progress(State(config): AppState) -> Json<ProjectMetrics> {
    Json(services::get_project_metrics(&config.project_root))
}

pub async fn get_files(State(config): AppState) -> Html<String> {
    let report = services::scan_project_files(&config.project_root);
    Html(fragments::render_file_grid(&report.by_category))
}

pub async fn get_files_summary(State(config): AppState) -> Json<ScanReport> {
    Json(services::scan_project_files(&config.project_root))
}

pub async fn get_todos_summary(
    State(config): AppState,
) -> Result<Json<TodoReport>, (StatusCode, String)> {
    services::todo_report(config.todos_file.as_deref())
        .map(Json)
        .map_err(internal_error)
}

// ============================================================
// Static fragments
// ============================================================

pub async fn get_todos() -> Html<&'static str> {
    Html(fragments::TODOS)
}

pub async fn get_agents() -> Html<&'static str> {
    Html(fragments::AGENTS)
}

pub async fn get_timeline() -> Html<&'static str> {
    Html(fragments::TIMELINE)
}
