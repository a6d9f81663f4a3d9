use super::app::IndexTemplate;
use crate::error::AppError;
use crate::models::{SimplifyRequest, SubmitError, UiState};
use crate::services::renderer::{render, Section};
use crate::AppState;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Form submission from the page. Always answers with the page, showing the
/// result, the error banner, or the loading panel when another submission is
/// still running.
pub async fn simplify_form(
    State(state): State<AppState>,
    Form(request): Form<SimplifyRequest>,
) -> Response {
    let request = request.with_normalized_line_endings();
    let document_type = request.document_type;
    let text = request.text.clone();

    match state.workbench.submit(request).await {
        Ok(outcome) => {
            let ui_state = match outcome {
                Ok(raw) => UiState::Success(raw),
                Err(e) => UiState::Error(e.to_string()),
            };
            IndexTemplate::new(&ui_state, document_type, text).into_response()
        }
        Err(SubmitError::Busy) => (
            StatusCode::CONFLICT,
            IndexTemplate::new(&UiState::Loading, document_type, text),
        )
            .into_response(),
    }
}

#[derive(Debug, Serialize)]
pub struct SimplifyResponse {
    pub raw: String,
    pub sections: Vec<Section>,
}

pub async fn simplify_api(
    State(state): State<AppState>,
    Json(request): Json<SimplifyRequest>,
) -> Result<Json<SimplifyResponse>, AppError> {
    let outcome = state
        .workbench
        .submit(request)
        .await
        .map_err(|e| AppError::Conflict(e.to_string()))?;

    let raw = outcome?;
    let sections = render(&raw);

    Ok(Json(SimplifyResponse { raw, sections }))
}
