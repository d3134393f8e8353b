mod assignment;
mod content_block;
mod job;
mod job_id;
mod job_status;
mod output_format;
mod section;

pub use assignment::{AssignmentRequest, DocumentFormat, StudentInfo};
pub use content_block::ContentBlock;
pub use job::{Job, JobResult};
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use output_format::{OutputFormat, UnsupportedFormat};
pub use section::Section;
