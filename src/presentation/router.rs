use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::TextGenerator;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    generate_handler, generate_json_handler, health_handler, job_status_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<G>(state: AppState<G>) -> Router
where
    G: TextGenerator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/assignments/generate", post(generate_handler::<G>))
        .route(
            "/api/v1/assignments/generate-json",
            post(generate_json_handler::<G>),
        )
        .route(
            "/api/v1/assignments/jobs/{job_id}",
            get(job_status_handler::<G>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
