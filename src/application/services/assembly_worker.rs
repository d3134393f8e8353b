use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tokio::sync::mpsc;

use crate::application::ports::{JobRepository, RepositoryError, TextGenerator};
use crate::domain::{AssignmentRequest, JobId, JobResult};

use super::assembly::JobProgress;
use super::assignment_service::AssignmentService;

pub struct AssemblyMessage {
    pub job_id: JobId,
    pub request: AssignmentRequest,
}

/// Single consumer of the assembly queue, and the one writer for every
/// job id it receives. Pipeline failures are captured onto the job
/// record as `failed`; they never propagate to a caller.
pub struct AssemblyWorker<G: TextGenerator> {
    receiver: mpsc::Receiver<AssemblyMessage>,
    service: Arc<AssignmentService<G>>,
    job_repository: Arc<dyn JobRepository>,
}

impl<G: TextGenerator + 'static> AssemblyWorker<G> {
    pub fn new(
        receiver: mpsc::Receiver<AssemblyMessage>,
        service: Arc<AssignmentService<G>>,
        job_repository: Arc<dyn JobRepository>,
    ) -> Self {
        Self {
            receiver,
            service,
            job_repository,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Assembly worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "assembly_job",
                job_id = %msg.job_id,
                pages = msg.request.number_of_pages,
            );
            let _guard = span.enter();

            if let Err(e) = self.process_job(msg).await {
                tracing::error!(error = %e, "Assembly job bookkeeping failed");
            }
        }
        tracing::info!("Assembly worker stopped: channel closed");
    }

    async fn process_job(&self, msg: AssemblyMessage) -> Result<(), RepositoryError> {
        let job_id = msg.job_id;
        self.job_repository.mark_in_progress(job_id).await?;

        let progress = JobProgress::new(Arc::clone(&self.job_repository), job_id);
        match self.service.run_pipeline(&msg.request, &progress).await {
            Ok(output) => {
                let result = JobResult {
                    file_name: output.rendered.file_name,
                    mime_type: output.rendered.mime_type,
                    buffer: BASE64.encode(&output.rendered.buffer),
                    final_word_count: output.assembled.final_word_count,
                    target_word_count: output.target_words,
                    expansions_used: output.assembled.expansions_used,
                };
                self.job_repository.complete(job_id, result).await?;
                tracing::info!("Assembly job completed");
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "Assembly job failed");
                self.job_repository.fail(job_id, &message).await?;
            }
        }

        Ok(())
    }
}
