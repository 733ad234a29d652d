use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::models::JobListingRow;
use crate::jobs::store::list_job_listings;
use crate::state::AppState;

#[derive(Serialize)]
pub struct JobListingsResponse {
    pub job_listings: Vec<JobListingRow>,
}

/// GET /api/v1/job-listings
pub async fn handle_list_job_listings(
    State(state): State<AppState>,
) -> Result<Json<JobListingsResponse>, AppError> {
    let job_listings = list_job_listings(&state.db).await?;
    Ok(Json(JobListingsResponse { job_listings }))
}
