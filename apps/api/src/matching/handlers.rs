//! Axum route handlers for the Match API.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    Form, Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::service::TextDocument;
use crate::matching::similarity::MatchResult;
use crate::state::AppState;

/// Both fields are optional at the wire level so an absent field can be told
/// apart from an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct MatchForm {
    pub given_description: Option<String>,
    pub custom_description: Option<String>,
}

/// Reads the form from either a urlencoded or a multipart body. Any other
/// body (including none at all) carries no fields, which the service then
/// reports as missing input.
#[async_trait]
impl<S> FromRequest<S> for MatchForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<MatchForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            return Ok(form);
        }

        if !content_type.starts_with("multipart/form-data") {
            return Ok(MatchForm::default());
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        let mut form = MatchForm::default();
        while let Some(field) = multipart.next_field().await? {
            let slot = match field.name() {
                Some("given_description") => &mut form.given_description,
                Some("custom_description") => &mut form.custom_description,
                _ => continue,
            };
            *slot = Some(field.text().await?);
        }
        Ok(form)
    }
}

/// POST /api/v1/match
///
/// Scores `given_description` against `custom_description`.
pub async fn handle_compute_match(
    State(state): State<AppState>,
    form: MatchForm,
) -> Result<Json<MatchResult>, AppError> {
    let given = form.given_description.map(TextDocument::from);
    let custom = form.custom_description.map(TextDocument::from);

    let result = state.matcher.compute_match(given.as_ref(), custom.as_ref())?;

    info!(
        score = result.match_score,
        insufficient_data = result.insufficient_data,
        "Match score computed"
    );

    Ok(Json(result))
}
