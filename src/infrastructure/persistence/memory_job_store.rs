use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{Job, JobId, JobResult, JobStatus};

/// Default job store: a process-local map. Sufficient for the
/// one-writer-per-job discipline since every mutation for a given id
/// comes from the single background worker.
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobStore {
    async fn create(&self, job: &Job) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(RepositoryError::DuplicateJob(job.id.to_string()));
        }
        jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn mark_in_progress(&self, id: JobId) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        if job.status == JobStatus::Pending {
            job.status = JobStatus::InProgress;
            job.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_progress(&self, id: JobId, progress: u8) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        if job.status.is_terminal() {
            return Ok(());
        }
        job.progress = progress.min(100);
        job.updated_at = Utc::now();
        Ok(())
    }

    async fn complete(&self, id: JobId, result: JobResult) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        if job.status.is_terminal() {
            return Ok(());
        }
        job.status = JobStatus::Completed;
        job.progress = 100;
        job.result = Some(result);
        job.updated_at = Utc::now();
        Ok(())
    }

    async fn fail(&self, id: JobId, error: &str) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        if job.status.is_terminal() {
            return Ok(());
        }
        job.status = JobStatus::Failed;
        job.error_message = Some(error.to_string());
        job.updated_at = Utc::now();
        Ok(())
    }
}
