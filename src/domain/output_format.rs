use std::fmt;

/// Requested download format. `doc` is accepted on the wire but
/// aliased to `docx` at parse time; everything downstream only sees
/// the three canonical formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Docx,
    Pdf,
    Txt,
}

impl OutputFormat {
    pub fn parse(tag: &str) -> Result<Self, UnsupportedFormat> {
        match tag.to_lowercase().as_str() {
            "docx" | "doc" => Ok(OutputFormat::Docx),
            "pdf" => Ok(OutputFormat::Pdf),
            "txt" => Ok(OutputFormat::Txt),
            _ => Err(UnsupportedFormat(tag.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Txt => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Txt => "text/plain",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unsupported file type: {0}")]
pub struct UnsupportedFormat(pub String);
