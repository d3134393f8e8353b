mod document_renderer;
mod job_repository;
mod repository_error;
mod text_generator;

pub use document_renderer::{DocumentRenderer, RenderError, RenderedDocument};
pub use job_repository::JobRepository;
pub use repository_error::RepositoryError;
pub use text_generator::{GenerationError, TextGenerator};
