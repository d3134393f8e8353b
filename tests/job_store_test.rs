use scriptorium::application::ports::{JobRepository, RepositoryError};
use scriptorium::domain::{Job, JobId, JobResult, JobStatus};
use scriptorium::infrastructure::persistence::InMemoryJobStore;

fn sample_result() -> JobResult {
    JobResult {
        file_name: "assignment_CSC_2021_001.docx".to_string(),
        mime_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            .to_string(),
        buffer: "UEsDBA==".to_string(),
        final_word_count: 4100,
        target_word_count: 4000,
        expansions_used: 1,
    }
}

#[tokio::test]
async fn given_new_job_when_created_then_readable_as_pending() {
    let store = InMemoryJobStore::new();
    let job = Job::new();

    store.create(&job).await.unwrap();

    let found = store.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(found.status, JobStatus::Pending);
    assert_eq!(found.progress, 0);
    assert!(found.result.is_none());
}

#[tokio::test]
async fn given_existing_id_when_creating_again_then_duplicate_error() {
    let store = InMemoryJobStore::new();
    let job = Job::new();
    store.create(&job).await.unwrap();

    let err = store.create(&job).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateJob(_)));
}

#[tokio::test]
async fn given_unknown_id_when_mutating_then_not_found() {
    let store = InMemoryJobStore::new();

    let err = store.update_progress(JobId::new(), 50).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn given_pending_job_when_marked_in_progress_then_status_advances() {
    let store = InMemoryJobStore::new();
    let job = Job::new();
    store.create(&job).await.unwrap();

    store.mark_in_progress(job.id).await.unwrap();

    let found = store.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(found.status, JobStatus::InProgress);
}

#[tokio::test]
async fn given_completed_job_when_progress_updated_then_no_op() {
    let store = InMemoryJobStore::new();
    let job = Job::new();
    store.create(&job).await.unwrap();
    store.complete(job.id, sample_result()).await.unwrap();

    store.update_progress(job.id, 10).await.unwrap();

    let found = store.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(found.status, JobStatus::Completed);
    assert_eq!(found.progress, 100);
}

#[tokio::test]
async fn given_failed_job_when_completed_then_failure_is_sticky() {
    let store = InMemoryJobStore::new();
    let job = Job::new();
    store.create(&job).await.unwrap();
    store.fail(job.id, "generator unavailable").await.unwrap();

    store.complete(job.id, sample_result()).await.unwrap();

    let found = store.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(found.status, JobStatus::Failed);
    assert_eq!(
        found.error_message.as_deref(),
        Some("generator unavailable")
    );
    assert!(found.result.is_none());
}

#[tokio::test]
async fn given_running_job_when_completed_then_progress_forced_to_100() {
    let store = InMemoryJobStore::new();
    let job = Job::new();
    store.create(&job).await.unwrap();
    store.mark_in_progress(job.id).await.unwrap();
    store.update_progress(job.id, 40).await.unwrap();

    store.complete(job.id, sample_result()).await.unwrap();

    let found = store.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(found.status, JobStatus::Completed);
    assert_eq!(found.progress, 100);
    assert_eq!(found.result, Some(sample_result()));
}
