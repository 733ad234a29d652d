use sqlx::SqlitePool;

use crate::jobs::models::JobListingRow;

/// Returns every job listing, ordered by `job_id`.
pub async fn list_job_listings(pool: &SqlitePool) -> Result<Vec<JobListingRow>, sqlx::Error> {
    sqlx::query_as::<_, JobListingRow>("SELECT * FROM job_listings ORDER BY job_id")
        .fetch_all(pool)
        .await
}
