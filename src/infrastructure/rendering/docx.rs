use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run};

use crate::application::ports::RenderError;
use crate::domain::{ContentBlock, DocumentFormat};

// Half-point sizes, matching the original document layout.
const BODY_SIZE: usize = 24;
const QUESTION_SIZE: usize = 32;
const HEADING_SIZE: usize = 32;
const SUBHEADING_SIZE: usize = 28;
const SUBSUBHEADING_SIZE: usize = 26;

pub fn encode(format: &DocumentFormat, blocks: &[ContentBlock]) -> Result<Vec<u8>, RenderError> {
    let student = &format.student;
    let mut docx = Docx::new();

    for (label, value) in [
        ("Name: ", student.name.as_str()),
        ("Matric Number: ", student.matric.as_str()),
        ("Department: ", student.department.as_str()),
        ("Course Code: ", student.course_code.as_str()),
        ("Course Title: ", student.course_title.as_str()),
        ("Lecturer-in-Charge: ", student.lecturer_in_charge.as_str()),
    ] {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(label).bold().size(BODY_SIZE))
                .add_run(Run::new().add_text(value).size(BODY_SIZE)),
        );
    }

    docx = docx.add_paragraph(Paragraph::new());
    docx = docx.add_paragraph(
        Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(format.question.as_str())
                    .bold()
                    .size(QUESTION_SIZE),
            )
            .align(AlignmentType::Center),
    );
    docx = docx.add_paragraph(Paragraph::new());

    for block in blocks {
        docx = docx.add_paragraph(block_paragraph(block));
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| RenderError::EncodingFailed(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn block_paragraph(block: &ContentBlock) -> Paragraph {
    let (text, size) = match block {
        ContentBlock::Heading { text, .. } => (text.clone(), HEADING_SIZE),
        ContentBlock::Subheading { text, .. } => (text.clone(), SUBHEADING_SIZE),
        ContentBlock::Subsubheading { text, .. } => (text.clone(), SUBSUBHEADING_SIZE),
        ContentBlock::Bullet { text, .. } => (format!("\u{2022} {}", text), BODY_SIZE),
        ContentBlock::Paragraph { text, .. } => (text.clone(), BODY_SIZE),
    };

    let mut run = Run::new().add_text(text).size(size);
    if block.is_bold() {
        run = run.bold();
    }
    Paragraph::new().add_run(run)
}
