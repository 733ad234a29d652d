use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

const JOB_LISTINGS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS job_listings (
    job_id                     INTEGER PRIMARY KEY,
    company_id                 INTEGER,
    title                      VARCHAR(255),
    description                TEXT,
    max_salary                 FLOAT,
    med_salary                 FLOAT,
    min_salary                 FLOAT,
    pay_period                 VARCHAR(50),
    formatted_work_type        VARCHAR(50),
    location                   VARCHAR(255),
    applies                    INTEGER,
    original_listed_time       DATETIME,
    remote_allowed             BOOLEAN,
    views                      INTEGER,
    job_posting_url            VARCHAR(255),
    application_url            VARCHAR(255),
    application_type           VARCHAR(50),
    expiry                     DATETIME,
    closed_time                DATETIME,
    formatted_experience_level VARCHAR(50),
    skills_desc                VARCHAR(255),
    listed_time                DATETIME,
    posting_domain             VARCHAR(255),
    sponsored                  BOOLEAN,
    work_type                  VARCHAR(50),
    currency                   VARCHAR(10),
    compensation_type          VARCHAR(50)
)
"#;

/// Creates and returns a SQLite connection pool.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Connecting to SQLite at {database_url}...");

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .with_context(|| format!("Failed to open database '{database_url}'"))?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the `job_listings` table if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(JOB_LISTINGS_SCHEMA)
        .execute(pool)
        .await
        .context("Failed to create job_listings table")?;
    Ok(())
}

/// Single-connection in-memory pool; every connection to `sqlite::memory:`
/// would otherwise see its own empty database.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    pool
}
