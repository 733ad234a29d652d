mod config;
mod db;
mod documents;
mod errors;
mod jobs;
mod matching;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::matching::stopwords::StopwordSet;
use crate::matching::MatchService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite and the job_listings table
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create '{}'", config.upload_dir.display()))?;

    // Stopwords are fixed for the life of the process
    let stopwords = match &config.stopwords_path {
        Some(path) => StopwordSet::from_file(path)?,
        None => StopwordSet::english(),
    };
    if stopwords.is_empty() {
        warn!("Stopword list is empty; every token will count towards match scores");
    } else {
        info!("Loaded {} stopwords", stopwords.len());
    }

    let matcher = MatchService::new(Arc::new(stopwords));
    info!("Match scorer initialized (backend: {})", matcher.backend());

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        matcher,
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict origins once the frontend host is fixed
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
