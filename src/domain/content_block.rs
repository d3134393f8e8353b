/// A classified unit of parsed content, consumed in order by the
/// renderer. Immutable once created; `bold` carries the emphasis flag
/// the renderer maps onto font weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading { text: String, bold: bool },
    Subheading { text: String, bold: bool },
    Subsubheading { text: String, bold: bool },
    Bullet { text: String, bold: bool },
    Paragraph { text: String, bold: bool },
}

impl ContentBlock {
    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Heading { text, .. }
            | ContentBlock::Subheading { text, .. }
            | ContentBlock::Subsubheading { text, .. }
            | ContentBlock::Bullet { text, .. }
            | ContentBlock::Paragraph { text, .. } => text,
        }
    }

    pub fn is_bold(&self) -> bool {
        match self {
            ContentBlock::Heading { bold, .. }
            | ContentBlock::Subheading { bold, .. }
            | ContentBlock::Subsubheading { bold, .. }
            | ContentBlock::Bullet { bold, .. }
            | ContentBlock::Paragraph { bold, .. } => *bold,
        }
    }
}
