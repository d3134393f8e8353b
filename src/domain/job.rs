use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{JobId, JobStatus};

/// Persisted record tracking asynchronous assembly progress and result
/// for one request. Mutated only by the single background worker that
/// owns its id.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    pub progress: u8,
    pub result: Option<JobResult>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            status: JobStatus::Pending,
            progress: 0,
            result: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::new()
    }
}

/// Final payload stored on a completed job: the encoded document plus
/// word-count telemetry. The buffer is base64 so the record stays
/// JSON-representable end to end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobResult {
    pub file_name: String,
    pub mime_type: String,
    pub buffer: String,
    pub final_word_count: usize,
    pub target_word_count: usize,
    pub expansions_used: usize,
}
