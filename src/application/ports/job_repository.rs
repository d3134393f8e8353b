use async_trait::async_trait;

use crate::domain::{Job, JobId, JobResult};

use super::RepositoryError;

/// Job store contract. Discipline is one writer per job id, many
/// readers: all mutations for a given job come from the single
/// background worker that owns it. Terminal states are sticky:
/// `update_progress` on a completed or failed job is a no-op, and
/// implementations must make status updates conditional on the current
/// status where the backend supports it.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Fails with [`RepositoryError::DuplicateJob`] if the id exists.
    async fn create(&self, job: &Job) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;

    /// `Pending -> InProgress`. No-op once terminal.
    async fn mark_in_progress(&self, id: JobId) -> Result<(), RepositoryError>;

    /// No-op once terminal; must not resurrect a finished job.
    async fn update_progress(&self, id: JobId, progress: u8) -> Result<(), RepositoryError>;

    /// Terminal success; forces progress to 100. No-op once terminal.
    async fn complete(&self, id: JobId, result: JobResult) -> Result<(), RepositoryError>;

    /// Terminal failure with the collaborator's message. No-op once
    /// terminal.
    async fn fail(&self, id: JobId, error: &str) -> Result<(), RepositoryError>;
}
