mod fragments;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::TrackerConfig;

pub use fragments::{render_dashboard, render_file_grid, DASHBOARD_TITLE};

pub fn create_router(config: TrackerConfig) -> Router {
    let api = Router::new()
        // Live data
        .route("/progress", get(handlers::get_progress))
        .route("/files", get(handlers::get_files))
        .route("/files/summary", get(handlers::get_files_summary))
        .route("/todos/summary", get(handlers::get_todos_summary))
        // Static fragments
        .route("/todos", get(handlers::get_todos))
        .route("/agents", get(handlers::get_agents))
        .route("/timeline", get(handlers::get_timeline));

    let static_files = ServeDir::new(&config.static_dir);

    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .nest_service("/static", static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(config))
}
