pub mod llm;
pub mod observability;
pub mod persistence;
pub mod rendering;
pub mod text_processing;
