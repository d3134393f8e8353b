use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};

use crate::application::ports::RenderError;
use crate::domain::{ContentBlock, DocumentFormat};

// A4 in points with one-inch margins.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 72.0;

const BODY_SIZE: f32 = 12.0;
const HEADING_SIZE: f32 = 16.0;
const SUBHEADING_SIZE: f32 = 14.0;
const SUBSUBHEADING_SIZE: f32 = 13.0;

/// Approximate Helvetica advance as a fraction of the font size, used
/// for greedy word wrapping.
const GLYPH_WIDTH_RATIO: f32 = 0.5;

struct Line {
    text: String,
    size: f32,
    bold: bool,
    /// Extra vertical gap after the line, in points.
    gap_after: f32,
}

pub fn encode(format: &DocumentFormat, blocks: &[ContentBlock]) -> Result<Vec<u8>, RenderError> {
    let lines = layout_lines(format, blocks);
    let pages = paginate(&lines);
    build_document(&pages).map_err(|e| RenderError::EncodingFailed(e.to_string()))
}

fn layout_lines(format: &DocumentFormat, blocks: &[ContentBlock]) -> Vec<Line> {
    let student = &format.student;
    let mut lines = Vec::new();

    push_wrapped(&mut lines, "STUDENT INFORMATION", HEADING_SIZE, true, 6.0);
    for text in [
        format!("Name: {}", student.name),
        format!("Matric Number: {}", student.matric),
        format!("Department: {}", student.department),
        format!("Course Code: {}", student.course_code),
        format!("Course Title: {}", student.course_title),
        format!("Lecturer-in-Charge: {}", student.lecturer_in_charge),
    ] {
        push_wrapped(&mut lines, &text, BODY_SIZE, false, 0.0);
    }
    mark_gap(&mut lines, 12.0);

    push_wrapped(&mut lines, "ASSIGNMENT QUESTION", SUBHEADING_SIZE, true, 6.0);
    push_wrapped(&mut lines, &format.question, BODY_SIZE, false, 12.0);

    for block in blocks {
        let (text, size, bold, gap) = match block {
            ContentBlock::Heading { text, bold } => (text.clone(), HEADING_SIZE, *bold, 6.0),
            ContentBlock::Subheading { text, bold } => (text.clone(), SUBHEADING_SIZE, *bold, 6.0),
            ContentBlock::Subsubheading { text, bold } => {
                (text.clone(), SUBSUBHEADING_SIZE, *bold, 6.0)
            }
            ContentBlock::Bullet { text, bold } => {
                (format!("\u{2022} {}", text), BODY_SIZE, *bold, 3.0)
            }
            ContentBlock::Paragraph { text, bold } => (text.clone(), BODY_SIZE, *bold, 6.0),
        };
        push_wrapped(&mut lines, &text, size, bold, gap);
    }

    lines
}

/// Greedy word wrap against the usable page width.
fn push_wrapped(lines: &mut Vec<Line>, text: &str, size: f32, bold: bool, gap_after: f32) {
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    let max_chars = ((usable / (size * GLYPH_WIDTH_RATIO)) as usize).max(1);

    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(Line {
                text: std::mem::take(&mut current),
                size,
                bold,
                gap_after: 0.0,
            });
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(Line {
        text: current,
        size,
        bold,
        gap_after,
    });
}

fn mark_gap(lines: &mut Vec<Line>, gap: f32) {
    if let Some(last) = lines.last_mut() {
        last.gap_after += gap;
    }
}

fn paginate(lines: &[Line]) -> Vec<Vec<(&Line, f32)>> {
    let mut pages = Vec::new();
    let mut page: Vec<(&Line, f32)> = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in lines {
        let advance = line.size * 1.4;
        if y - advance < MARGIN {
            pages.push(std::mem::take(&mut page));
            y = PAGE_HEIGHT - MARGIN;
        }
        y -= advance;
        page.push((line, y));
        y -= line.gap_after;
    }
    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

fn build_document(pages: &[Vec<(&Line, f32)>]) -> lopdf::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(font_regular),
            "F2" => Object::Reference(font_bold),
        },
    });

    let mut page_ids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let mut operations = Vec::new();
        for (line, y) in page {
            let font = if line.bold { "F2" } else { "F1" };
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(font.as_bytes().to_vec()),
                    Object::Integer(line.size as i64),
                ],
            ));
            operations.push(Operation::new(
                "Td",
                vec![Object::Integer(MARGIN as i64), Object::Integer(*y as i64)],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(
                    pdf_string_bytes(&line.text),
                    StringFormat::Literal,
                )],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PAGE_WIDTH as i64),
                Object::Integer(PAGE_HEIGHT as i64),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Reference(resources_id),
        });
        page_ids.push(Object::Reference(page_id));
    }

    let count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Latin-1 projection with literal-string escaping; characters outside
/// the base font's reach degrade to '?'.
fn pdf_string_bytes(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        let b = if (c as u32) < 256 { c as u32 as u8 } else { b'?' };
        match b {
            b'(' | b')' | b'\\' => {
                bytes.push(b'\\');
                bytes.push(b);
            }
            _ => bytes.push(b),
        }
    }
    bytes
}
