use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

use crate::application::ports::{DocumentRenderer, RenderError, RenderedDocument};
use crate::domain::{DocumentFormat, OutputFormat};
use crate::infrastructure::text_processing::{parse_blocks, strip_references};

use super::{docx, pdf, txt};

/// Renderer-side restatement of the content cap; content normally
/// arrives already truncated by the assembler.
const MAX_CONTENT_CHARS: usize = 50_000;

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Production renderer: cleans residual reference sections, parses the
/// content into typed blocks, and encodes them per format with the
/// student/course header the original document layout calls for.
pub struct BlockDocumentRenderer;

impl BlockDocumentRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BlockDocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRenderer for BlockDocumentRenderer {
    #[tracing::instrument(skip(self, format), fields(target = %target))]
    async fn render(
        &self,
        format: &DocumentFormat,
        target: OutputFormat,
    ) -> Result<RenderedDocument, RenderError> {
        let mut content = strip_references(&format.content);
        truncate_chars(&mut content, MAX_CONTENT_CHARS);
        let blocks = parse_blocks(&content);

        let cleaned = DocumentFormat {
            student: format.student.clone(),
            question: format.question.clone(),
            content,
        };

        let buffer = match target {
            OutputFormat::Docx => docx::encode(&cleaned, &blocks)?,
            OutputFormat::Pdf => pdf::encode(&cleaned, &blocks)?,
            OutputFormat::Txt => txt::encode(&cleaned),
        };

        tracing::debug!(bytes = buffer.len(), blocks = blocks.len(), "Document encoded");

        Ok(RenderedDocument {
            buffer,
            file_name: assignment_file_name(&cleaned.student.matric, target),
            mime_type: target.mime_type().to_string(),
        })
    }
}

/// `assignment_{matric}.{ext}` with every character outside
/// `[A-Za-z0-9]` in the matric replaced by `_`.
pub fn assignment_file_name(matric: &str, target: OutputFormat) -> String {
    let sanitized = NON_ALPHANUMERIC.replace_all(matric, "_");
    format!("assignment_{}.{}", sanitized, target.extension())
}

fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
}
