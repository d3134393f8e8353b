mod assembly;
mod assembly_worker;
mod assignment_service;
mod section_planner;
mod word_budget;

pub use assembly::{AssembledContent, ContentAssembler, JobProgress, NoProgress, ProgressSink};
pub use assembly_worker::{AssemblyMessage, AssemblyWorker};
pub use assignment_service::{AssignmentError, AssignmentService, PipelineOutput};
pub use section_planner::plan_sections;
pub use word_budget::{
    WORDS_PER_PAGE, estimate_pages, estimate_word_count, resolve_target_words,
};
