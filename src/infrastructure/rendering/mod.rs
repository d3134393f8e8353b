mod block_renderer;
mod docx;
mod pdf;
mod txt;

pub use block_renderer::{BlockDocumentRenderer, assignment_file_name};
