use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{GenerationError, JobRepository, TextGenerator};
use crate::domain::{AssignmentRequest, JobId, Section};

use super::word_budget::estimate_word_count;

/// Assembled content is accepted once it reaches this fraction of the
/// target; below it, bounded expansion rounds are issued.
const ACCEPTANCE_RATIO: f64 = 0.9;
/// Upper bound on extra generation rounds. Total generation calls per
/// job never exceed `plan.len() + MAX_EXPANSIONS`.
const MAX_EXPANSIONS: usize = 3;
/// Largest word increment requested in a single expansion round.
const MAX_EXPANSION_WORDS: usize = 800;
/// Hard cap on content handed downstream, regardless of target.
const MAX_CONTENT_CHARS: usize = 50_000;

/// The planned section pass maps onto 0..=SECTION_PROGRESS_CEILING;
/// expansion rounds then step toward (but never reach) 100, so a
/// polling client can tell "still expanding" from "finished".
const SECTION_PROGRESS_CEILING: usize = 90;
const EXPANSION_PROGRESS_STEP: usize = 3;

pub struct AssembledContent {
    pub content: String,
    pub final_word_count: usize,
    pub expansions_used: usize,
}

/// Progress reporting seam between the assembler and the job tracker.
/// The synchronous small-request path plugs in [`NoProgress`].
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn report(&self, progress: u8);
}

pub struct NoProgress;

#[async_trait]
impl ProgressSink for NoProgress {
    async fn report(&self, _progress: u8) {}
}

/// Reports progress onto the job record. Repository failures here are
/// logged and swallowed; a missed progress update must not abort a
/// generation run.
pub struct JobProgress {
    repository: Arc<dyn JobRepository>,
    job_id: JobId,
}

impl JobProgress {
    pub fn new(repository: Arc<dyn JobRepository>, job_id: JobId) -> Self {
        Self { repository, job_id }
    }
}

#[async_trait]
impl ProgressSink for JobProgress {
    async fn report(&self, progress: u8) {
        if let Err(e) = self.repository.update_progress(self.job_id, progress).await {
            tracing::warn!(
                job_id = %self.job_id,
                progress,
                error = %e,
                "Failed to persist job progress"
            );
        }
    }
}

/// Realizes a section plan into final content meeting the word target,
/// within bounded extra work. Generation calls are strictly sequential;
/// section output always appears in plan order and expansion output
/// after all planned sections.
pub struct ContentAssembler<G: TextGenerator> {
    generator: Arc<G>,
}

impl<G: TextGenerator> ContentAssembler<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    pub async fn assemble(
        &self,
        plan: &[Section],
        request: &AssignmentRequest,
        target_words: usize,
        progress: &dyn ProgressSink,
    ) -> Result<AssembledContent, GenerationError> {
        let mut content = String::new();
        let total_sections = plan.len().max(1);

        for (completed, section) in plan.iter().enumerate() {
            tracing::debug!(
                section = %section.title,
                target_words = section.target_words,
                "Generating section"
            );
            let text = self.generator.generate(&section.prompt, request).await?;
            push_section(&mut content, &section.title, &text);
            let pct = (completed + 1) * SECTION_PROGRESS_CEILING / total_sections;
            progress.report(pct as u8).await;
        }

        let mut word_count = estimate_word_count(&content);
        let mut expansions_used = 0;

        while (word_count as f64) < (target_words as f64) * ACCEPTANCE_RATIO
            && expansions_used < MAX_EXPANSIONS
        {
            let remaining = target_words
                .saturating_sub(word_count)
                .min(MAX_EXPANSION_WORDS);
            tracing::debug!(
                word_count,
                target_words,
                remaining,
                round = expansions_used + 1,
                "Content short of target, expanding"
            );

            let text = self
                .generator
                .generate(&expansion_prompt(&request.question, remaining), request)
                .await?;
            expansions_used += 1;
            push_section(
                &mut content,
                &format!("Additional Analysis {}", expansions_used),
                &text,
            );

            word_count = estimate_word_count(&content);
            let pct = SECTION_PROGRESS_CEILING + EXPANSION_PROGRESS_STEP * expansions_used;
            progress.report(pct as u8).await;
        }

        truncate_chars(&mut content, MAX_CONTENT_CHARS);
        let final_word_count = estimate_word_count(&content);

        tracing::info!(
            final_word_count,
            target_words,
            expansions_used,
            "Content assembly finished"
        );

        Ok(AssembledContent {
            content,
            final_word_count,
            expansions_used,
        })
    }
}

fn push_section(content: &mut String, title: &str, body: &str) {
    content.push_str("\n\n## ");
    content.push_str(title);
    content.push_str("\n\n");
    content.push_str(body);
}

fn expansion_prompt(question: &str, remaining_words: usize) -> String {
    format!(
        "The following academic assignment question has already been partially \
         answered:\n\n{question}\n\nWrite approximately {remaining_words} \
         additional words of analysis that deepen the answer. Expand on the \
         arguments with further detail, examples, and evaluation. Do not repeat \
         material already likely to be covered, do not write an introduction or \
         conclusion, and do not include any references, bibliography, citations, \
         or works cited section."
    )
}

fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
}
