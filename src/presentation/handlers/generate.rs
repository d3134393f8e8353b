use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::TextGenerator;
use crate::application::services::{
    AssemblyMessage, AssignmentError, AssignmentService, NoProgress,
};
use crate::domain::Job;
use crate::infrastructure::observability::sanitize_question;
use crate::presentation::state::AppState;

use super::request::{GenerateRequest, validate};

#[derive(Serialize)]
pub struct QueuedResponse {
    pub job_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// File-download endpoint. Small targets run the full pipeline inside
/// the request and stream the attachment back; anything larger gets a
/// pending job and a 202.
#[tracing::instrument(skip(state, request))]
pub async fn generate_handler<G>(
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

    tracing::debug!(
        question = %sanitize_question(&request.question),
        pages = request.number_of_pages,
        "Processing assignment request"
    );

    if AssignmentService::<G>::is_small_request(&request) {
        return match state
            .assignment_service
            .run_pipeline(&request, &NoProgress)
            .await
        {
            Ok(output) => {
                let rendered = output.rendered;
                let disposition =
                    format!("attachment; filename=\"{}\"", rendered.file_name);
                (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, rendered.mime_type),
                        (header::CONTENT_DISPOSITION, disposition),
                    ],
                    rendered.buffer,
                )
                    .into_response()
            }
            Err(e) => {
                tracing::error!(error = %e, "Synchronous assignment generation failed");
                (
                    error_status(&e),
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
                    .into_response()
            }
        };
    }

    dispatch_job(&state, request).await
}

/// Collaborator failures surface as a gateway error; everything else
/// is on us.
pub fn error_status(error: &AssignmentError) -> StatusCode {
    match error {
        AssignmentError::Generation(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Creates the pending job record, hands the request to the worker,
/// and returns immediately. Shared by both generation endpoints.
pub async fn dispatch_job<G>(
    state: &AppState<G>,
    request: crate::domain::AssignmentRequest,
) -> axum::response::Response
where
    G: TextGenerator + 'static,
{
    let job = Job::new();
    let job_id = job.id;

    if let Err(e) = state.job_repository.create(&job).await {
        tracing::error!(error = %e, "Failed to create job record");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to create job: {}", e),
            }),
        )
            .into_response();
    }

    let msg = AssemblyMessage { job_id, request };
    if let Err(e) = state.assembly_sender.send(msg).await {
        tracing::error!(error = %e, "Failed to enqueue assembly job");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Assembly queue full or worker unavailable".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(job_id = %job_id, "Assignment assembly job enqueued");

    (
        StatusCode::ACCEPTED,
        Json(QueuedResponse {
            job_id: job_id.to_string(),
            message: "Assignment generation started".to_string(),
        }),
    )
        .into_response()
}
