use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{Job, JobId, JobResult, JobStatus};

/// Postgres-backed job store. Terminal-state stickiness is enforced in
/// the statements themselves: every mutation is conditional on the
/// current status, so a late progress write can never clobber a
/// concurrent `failed` transition.
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_job(row: &PgRow) -> Result<Job, RepositoryError> {
    let status: String = row.get("status");
    let status = status
        .parse::<JobStatus>()
        .map_err(RepositoryError::QueryFailed)?;

    let result: Option<serde_json::Value> = row.get("result");
    let result = match result {
        Some(value) => Some(
            serde_json::from_value::<JobResult>(value)
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        ),
        None => None,
    };

    let progress: i32 = row.get("progress");
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: DateTime<Utc> = row.get("updated_at");

    Ok(Job {
        id: JobId::from_uuid(row.get::<Uuid, _>("id")),
        status,
        progress: progress.clamp(0, 100) as u8,
        result,
        error_message: row.get("error_message"),
        created_at,
        updated_at,
    })
}

#[async_trait]
impl JobRepository for PgJobRepository {
    #[instrument(skip(self, job), fields(job_id = %job.id))]
    async fn create(&self, job: &Job) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO jobs (id, status, progress, error_message, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(job.id.as_uuid())
        .bind(job.status.as_str())
        .bind(job.progress as i32)
        .bind(&job.error_message)
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::DuplicateJob(job.id.to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(job_id = %id))]
    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, status, progress, result, error_message, created_at, updated_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.as_ref().map(row_to_job).transpose()
    }

    #[instrument(skip(self), fields(job_id = %id))]
    async fn mark_in_progress(&self, id: JobId) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE jobs
            SET status = 'in_progress', updated_at = $2
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(job_id = %id, progress))]
    async fn update_progress(&self, id: JobId, progress: u8) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE jobs
            SET progress = $2, updated_at = $3
            WHERE id = $1 AND status NOT IN ('completed', 'failed')
            "#,
        )
        .bind(id.as_uuid())
        .bind(progress.min(100) as i32)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self, result), fields(job_id = %id))]
    async fn complete(&self, id: JobId, result: JobResult) -> Result<(), RepositoryError> {
        let payload = serde_json::to_value(&result)
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        sqlx::query(
            r#"
            UPDATE jobs
            SET status = 'completed', progress = 100, result = $2, updated_at = $3
            WHERE id = $1 AND status NOT IN ('completed', 'failed')
            "#,
        )
        .bind(id.as_uuid())
        .bind(payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self, error), fields(job_id = %id))]
    async fn fail(&self, id: JobId, error: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE jobs
            SET status = 'failed', error_message = $2, updated_at = $3
            WHERE id = $1 AND status NOT IN ('completed', 'failed')
            "#,
        )
        .bind(id.as_uuid())
        .bind(error)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
