use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Serialize;

use crate::application::ports::TextGenerator;
use crate::application::services::{AssignmentService, estimate_pages};
use crate::infrastructure::text_processing::clean_markdown;
use crate::presentation::state::AppState;

use super::generate::{ErrorResponse, dispatch_job};
use super::request::{GenerateRequest, validate};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAssignmentResponse {
    pub assignment: String,
    pub pages: usize,
    pub word_count: usize,
    pub timestamp: String,
}

/// JSON sibling of the download endpoint: returns the assembled text
/// as cleaned plain prose instead of a rendered file. Large requests
/// take the same job path as the download endpoint.
#[tracing::instrument(skip(state, request))]
pub async fn generate_json_handler<G>(
    State(state): State<AppState<G>>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse
where
    G: TextGenerator + 'static,
{
    let request = match validate(request) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected assignment request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    if !AssignmentService::<G>::is_small_request(&request) {
        return dispatch_job(&state, request).await;
    }

    match state.assignment_service.assemble_content(&request).await {
        Ok(assembled) => {
            let assignment = clean_markdown(&assembled.content);
            let response = JsonAssignmentResponse {
                pages: estimate_pages(&assignment),
                word_count: assembled.final_word_count,
                assignment,
                timestamp: Utc::now().to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Synchronous assignment generation failed");
            (
                super::generate::error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
