use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tokio::sync::mpsc;

use scriptorium::application::ports::{
    DocumentRenderer, GenerationError, JobRepository, TextGenerator,
};
use scriptorium::application::services::{AssemblyMessage, AssemblyWorker, AssignmentService};
use scriptorium::domain::{AssignmentRequest, Job, JobId, JobStatus, OutputFormat, StudentInfo};
use scriptorium::infrastructure::llm::MockTextGenerator;
use scriptorium::infrastructure::persistence::InMemoryJobStore;
use scriptorium::infrastructure::rendering::BlockDocumentRenderer;

fn request() -> AssignmentRequest {
    AssignmentRequest {
        student: StudentInfo {
            name: "Ada Lovelace".to_string(),
            matric: "CSC/2021/001".to_string(),
            department: "Computer Science".to_string(),
            course_code: "CSC301".to_string(),
            course_title: "Operating Systems".to_string(),
            lecturer_in_charge: "Dr. Hamilton".to_string(),
        },
        number_of_pages: 10,
        word_count: None,
        question: "Discuss the role of virtual memory in modern operating systems.".to_string(),
        file_type: OutputFormat::Txt,
    }
}

struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _request: &AssignmentRequest,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::ApiRequestFailed(
            "upstream unavailable".to_string(),
        ))
    }
}

async fn wait_for_terminal(repository: &Arc<InMemoryJobStore>, id: JobId) -> scriptorium::domain::Job {
    for _ in 0..200 {
        if let Some(job) = repository.get_by_id(id).await.unwrap() {
            if job.status.is_terminal() {
                return job;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("job never reached a terminal state");
}

fn spawn_worker<G: TextGenerator + 'static>(
    generator: Arc<G>,
    repository: Arc<InMemoryJobStore>,
) -> mpsc::Sender<AssemblyMessage> {
    let renderer: Arc<dyn DocumentRenderer> = Arc::new(BlockDocumentRenderer::new());
    let service = Arc::new(AssignmentService::new(generator, renderer));
    let (sender, receiver) = mpsc::channel(4);
    let job_repository: Arc<dyn JobRepository> = repository;
    let worker = AssemblyWorker::new(receiver, service, job_repository);
    tokio::spawn(worker.run());
    sender
}

#[tokio::test]
async fn given_working_generator_when_job_processed_then_completed_with_result() {
    let repository = Arc::new(InMemoryJobStore::new());
    let sender = spawn_worker(Arc::new(MockTextGenerator::new(600)), Arc::clone(&repository));

    let job = Job::new();
    repository.create(&job).await.unwrap();
    sender
        .send(AssemblyMessage {
            job_id: job.id,
            request: request(),
        })
        .await
        .unwrap();

    let finished = wait_for_terminal(&repository, job.id).await;
    assert_eq!(finished.status, JobStatus::Completed);
    assert_eq!(finished.progress, 100);

    let result = finished.result.unwrap();
    assert_eq!(result.file_name, "assignment_CSC_2021_001.txt");
    assert_eq!(result.mime_type, "text/plain");
    assert_eq!(result.target_word_count, 5000);
    assert!(result.final_word_count > 0);
    assert!(BASE64.decode(&result.buffer).is_ok());
}

#[tokio::test]
async fn given_failing_generator_when_job_processed_then_failed_with_message() {
    let repository = Arc::new(InMemoryJobStore::new());
    let sender = spawn_worker(Arc::new(FailingGenerator), Arc::clone(&repository));

    let job = Job::new();
    repository.create(&job).await.unwrap();
    sender
        .send(AssemblyMessage {
            job_id: job.id,
            request: request(),
        })
        .await
        .unwrap();

    let finished = wait_for_terminal(&repository, job.id).await;
    assert_eq!(finished.status, JobStatus::Failed);
    assert!(
        finished
            .error_message
            .unwrap()
            .contains("upstream unavailable")
    );
    assert!(finished.result.is_none());
}
