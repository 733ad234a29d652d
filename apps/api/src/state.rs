use sqlx::SqlitePool;

use crate::config::Config;
use crate::matching::MatchService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
    /// Scoring pipeline with the stopword set captured at startup.
    pub matcher: MatchService,
}
