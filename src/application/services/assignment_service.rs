use std::sync::Arc;

use crate::application::ports::{
    DocumentRenderer, GenerationError, RenderError, RenderedDocument, RepositoryError,
    TextGenerator,
};
use crate::domain::{AssignmentRequest, DocumentFormat};

use super::assembly::{AssembledContent, ContentAssembler, NoProgress, ProgressSink};
use super::section_planner::plan_sections;
use super::word_budget::resolve_target_words;

/// Requests at or below these bounds run the full pipeline
/// synchronously inside the request; anything larger goes through the
/// job tracker.
const SYNC_PAGE_LIMIT: u32 = 3;
const SYNC_WORD_LIMIT: usize = 1500;

pub struct PipelineOutput {
    pub assembled: AssembledContent,
    pub target_words: usize,
    pub rendered: RenderedDocument,
}

/// Orchestrates the planning/expansion/render pipeline. The same
/// pipeline serves both the synchronous small-request path and the
/// background worker; only the progress sink differs.
pub struct AssignmentService<G: TextGenerator> {
    assembler: ContentAssembler<G>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl<G: TextGenerator> AssignmentService<G> {
    pub fn new(generator: Arc<G>, renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self {
            assembler: ContentAssembler::new(generator),
            renderer,
        }
    }

    pub fn is_small_request(request: &AssignmentRequest) -> bool {
        request.number_of_pages <= SYNC_PAGE_LIMIT
            && resolve_target_words(request.number_of_pages, request.word_count) <= SYNC_WORD_LIMIT
    }

    /// Plan, assemble, and render. Used directly for small requests
    /// (with [`NoProgress`]) and by the worker with a job-backed sink.
    pub async fn run_pipeline(
        &self,
        request: &AssignmentRequest,
        progress: &dyn ProgressSink,
    ) -> Result<PipelineOutput, AssignmentError> {
        let target_words = resolve_target_words(request.number_of_pages, request.word_count);
        let plan = plan_sections(&request.question, target_words);

        tracing::info!(
            target_words,
            sections = plan.len(),
            format = %request.file_type,
            "Starting assignment pipeline"
        );

        let assembled = self
            .assembler
            .assemble(&plan, request, target_words, progress)
            .await?;

        let format = DocumentFormat {
            student: request.student.clone(),
            question: request.question.clone(),
            content: assembled.content.clone(),
        };
        let rendered = self.renderer.render(&format, request.file_type).await?;

        Ok(PipelineOutput {
            assembled,
            target_words,
            rendered,
        })
    }

    /// Plan and assemble without rendering, for the JSON response path.
    pub async fn assemble_content(
        &self,
        request: &AssignmentRequest,
    ) -> Result<AssembledContent, AssignmentError> {
        let target_words = resolve_target_words(request.number_of_pages, request.word_count);
        let plan = plan_sections(&request.question, target_words);
        let assembled = self
            .assembler
            .assemble(&plan, request, target_words, &NoProgress)
            .await?;
        Ok(assembled)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),
    #[error("rendering: {0}")]
    Rendering(#[from] RenderError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
