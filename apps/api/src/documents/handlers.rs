//! Axum route handlers for document upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::documents::extract::{extract_text, sanitize_filename, ExtractError};
use crate::documents::storage::store_upload;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub stored_as: String,
    pub extracted_text: String,
}

/// POST /api/v1/documents
///
/// Accepts a multipart `file` part, saves it, and returns its text.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = upload.ok_or_else(|| AppError::Validation("No file part".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }
    let safe_name = sanitize_filename(&filename)
        .ok_or_else(|| AppError::Validation(format!("Invalid file name '{filename}'")))?;

    let stored_as = store_upload(&state.config.upload_dir, &safe_name, &bytes).await?;

    let extracted_text = {
        let name = safe_name.clone();
        tokio::task::spawn_blocking(move || extract_text(&name, &bytes))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    warn!("Text extractor panicked on {stored_as}");
                    AppError::Extraction(ExtractError::Pdf("parser aborted".to_string()))
                } else {
                    AppError::Internal(e.into())
                }
            })??
    };

    info!(
        "Extracted {} chars from {filename} (stored as {stored_as})",
        extracted_text.chars().count()
    );

    Ok(Json(UploadResponse {
        filename,
        stored_as,
        extracted_text,
    }))
}
