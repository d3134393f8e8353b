use serde::Deserialize;

use crate::application::ports::RenderError;
use crate::domain::{AssignmentRequest, OutputFormat, StudentInfo};

/// Wire shape of an assignment request, field names matching the
/// public API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub name: String,
    pub matric: String,
    pub department: String,
    pub course_code: String,
    pub course_title: String,
    pub lecturer_in_charge: String,
    pub number_of_pages: u32,
    #[serde(default)]
    pub word_count: Option<u32>,
    pub question: String,
    pub file_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RequestValidationError {
    #[error("{field}: {message}")]
    Invalid {
        field: &'static str,
        message: &'static str,
    },
    #[error(transparent)]
    Format(#[from] RenderError),
}

/// Boundary validation: keeps degenerate targets (zero pages, absurd
/// word counts) out of the planner and rejects unknown format tags
/// before any generation work starts.
pub fn validate(request: GenerateRequest) -> Result<AssignmentRequest, RequestValidationError> {
    length_between("name", &request.name, 2, 100)?;
    length_between("matric", &request.matric, 5, 20)?;
    length_between("department", &request.department, 3, 100)?;
    length_between("courseCode", &request.course_code, 3, 20)?;
    length_between("courseTitle", &request.course_title, 5, 200)?;
    length_between("lecturerInCharge", &request.lecturer_in_charge, 3, 100)?;
    length_between("question", &request.question, 10, 2000)?;

    if !(1..=100).contains(&request.number_of_pages) {
        return Err(RequestValidationError::Invalid {
            field: "numberOfPages",
            message: "Number of pages must be between 1 and 100",
        });
    }
    if let Some(words) = request.word_count {
        if words > 60_000 {
            return Err(RequestValidationError::Invalid {
                field: "wordCount",
                message: "Word count must not exceed 60000",
            });
        }
    }

    let file_type = OutputFormat::parse(&request.file_type)
        .map_err(|e| RenderError::UnsupportedFormat(e.0))?;

    Ok(AssignmentRequest {
        student: StudentInfo {
            name: request.name.trim().to_string(),
            matric: request.matric.trim().to_string(),
            department: request.department.trim().to_string(),
            course_code: request.course_code.trim().to_string(),
            course_title: request.course_title.trim().to_string(),
            lecturer_in_charge: request.lecturer_in_charge.trim().to_string(),
        },
        number_of_pages: request.number_of_pages,
        word_count: request.word_count,
        question: request.question.trim().to_string(),
        file_type,
    })
}

fn length_between(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), RequestValidationError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(RequestValidationError::Invalid {
            field,
            message: "length out of range",
        });
    }
    Ok(())
}
