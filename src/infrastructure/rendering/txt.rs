use crate::domain::DocumentFormat;

/// Plain-text layout: labelled student header, blank line, question,
/// blank line, content as assembled.
pub fn encode(format: &DocumentFormat) -> Vec<u8> {
    let student = &format.student;
    let content = [
        format!("Name: {}", student.name),
        format!("Matric Number: {}", student.matric),
        format!("Department: {}", student.department),
        format!("Course Code: {}", student.course_code),
        format!("Course Title: {}", student.course_title),
        format!("Lecturer-in-Charge: {}", student.lecturer_in_charge),
        String::new(),
        format.question.clone(),
        String::new(),
        format.content.clone(),
    ]
    .join("\n");

    content.into_bytes()
}
