use super::OutputFormat;

/// One assignment generation request: who is asking, which course it
/// is for, how long the output should be, and the question itself.
#[derive(Debug, Clone)]
pub struct AssignmentRequest {
    pub student: StudentInfo,
    pub number_of_pages: u32,
    /// Explicit word target. When present and positive it dominates
    /// the page count.
    pub word_count: Option<u32>,
    pub question: String,
    pub file_type: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct StudentInfo {
    pub name: String,
    pub matric: String,
    pub department: String,
    pub course_code: String,
    pub course_title: String,
    pub lecturer_in_charge: String,
}

/// Renderer input: student metadata, the original question, and the
/// final assembled content. The content must already have reference
/// sections stripped and respect the size cap before it gets here.
#[derive(Debug, Clone)]
pub struct DocumentFormat {
    pub student: StudentInfo,
    pub question: String,
    pub content: String,
}
