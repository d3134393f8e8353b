use async_trait::async_trait;

use crate::domain::{DocumentFormat, OutputFormat};

/// Document rendering boundary: parsed metadata plus assembled content
/// in, encoded byte buffer out. Block order and type from the parser
/// must be preserved losslessly by implementations.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(
        &self,
        format: &DocumentFormat,
        target: OutputFormat,
    ) -> Result<RenderedDocument, RenderError>;
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub buffer: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}
