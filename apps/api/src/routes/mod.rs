pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::documents::handlers as documents;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match", post(matching::handle_compute_match))
        // Document source
        .route(
            "/api/v1/documents",
            post(documents::handle_upload).layer(upload_limit),
        )
        // Job record store
        .route(
            "/api/v1/job-listings",
            get(jobs::handle_list_job_listings),
        )
        .with_state(state)
}
