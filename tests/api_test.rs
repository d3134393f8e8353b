use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;

use scriptorium::application::ports::{DocumentRenderer, JobRepository};
use scriptorium::application::services::{AssemblyWorker, AssignmentService};
use scriptorium::infrastructure::llm::MockTextGenerator;
use scriptorium::infrastructure::persistence::InMemoryJobStore;
use scriptorium::infrastructure::rendering::BlockDocumentRenderer;
use scriptorium::presentation::{AppState, Settings, create_router};

fn create_test_app() -> (axum::Router, Arc<dyn JobRepository>) {
    let generator = Arc::new(MockTextGenerator::new(500));
    let renderer: Arc<dyn DocumentRenderer> = Arc::new(BlockDocumentRenderer::new());
    let job_repository: Arc<dyn JobRepository> = Arc::new(InMemoryJobStore::new());

    let assignment_service = Arc::new(AssignmentService::new(generator, renderer));

    let (assembly_sender, assembly_receiver) = mpsc::channel(8);
    let worker = AssemblyWorker::new(
        assembly_receiver,
        Arc::clone(&assignment_service),
        Arc::clone(&job_repository),
    );
    tokio::spawn(worker.run());

    let state = AppState {
        assignment_service,
        job_repository: Arc::clone(&job_repository),
        assembly_sender,
        settings: Settings::from_env(),
    };

    (create_router(state), job_repository)
}

fn request_body(pages: u32, file_type: &str) -> String {
    format!(
        r#"{{
            "name": "Ada Lovelace",
            "matric": "CSC/2021/001",
            "department": "Computer Science",
            "courseCode": "CSC301",
            "courseTitle": "Operating Systems",
            "lecturerInCharge": "Dr. Hamilton",
            "numberOfPages": {pages},
            "question": "Discuss the role of virtual memory in modern operating systems.",
            "fileType": "{file_type}"
        }}"#
    )
}

fn post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_small_request_when_generating_then_returns_file_attachment() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(post("/api/v1/assignments/generate", request_body(2, "txt")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"assignment_CSC_2021_001.txt\""
    );
}

#[tokio::test]
async fn given_large_request_when_generating_then_returns_accepted_with_job_id() {
    let (app, job_repository) = create_test_app();

    let response = app
        .oneshot(post("/api/v1/assignments/generate", request_body(20, "docx")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    let job_id = json["job_id"].as_str().unwrap();

    let uuid = uuid::Uuid::parse_str(job_id).unwrap();
    let job = job_repository
        .get_by_id(scriptorium::domain::JobId::from_uuid(uuid))
        .await
        .unwrap();
    assert!(job.is_some());
}

#[tokio::test]
async fn given_unsupported_file_type_when_generating_then_bad_request() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(post("/api/v1/assignments/generate", request_body(2, "odt")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_too_short_question_when_generating_then_bad_request() {
    let (app, _) = create_test_app();
    let body = request_body(2, "txt").replace(
        "Discuss the role of virtual memory in modern operating systems.",
        "Short",
    );

    let response = app
        .oneshot(post("/api/v1/assignments/generate", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_small_request_when_generating_json_then_returns_assignment_payload() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(post(
            "/api/v1/assignments/generate-json",
            request_body(2, "txt"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json["assignment"].as_str().unwrap().contains("lorem"));
    assert!(json["wordCount"].as_u64().unwrap() > 0);
    assert!(json["pages"].as_u64().unwrap() >= 1);
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn given_invalid_job_id_when_fetching_status_then_bad_request() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/assignments/jobs/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_unknown_job_id_when_fetching_status_then_not_found() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!(
                    "/api/v1/assignments/jobs/{}",
                    uuid::Uuid::new_v4()
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
