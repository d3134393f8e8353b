use regex::Regex;
use std::sync::LazyLock;

use crate::domain::ContentBlock;

/// Upper bound on parsed blocks; pathological input degrades to a
/// truncated document instead of unbounded rendering work.
pub const MAX_BLOCKS: usize = 200;

static BLANK_LINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
static ALL_CAPS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z\s]{2,50}$").unwrap());
static TITLE_CASE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z\s]{3,40}$").unwrap());

/// Re-joins soft-wrapped lines: a single `\n` between two non-newline
/// characters becomes a space, while true paragraph breaks (`\n\n`+)
/// are left alone. Windows line endings are normalized first.
pub fn join_wrapped_lines(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let chars: Vec<char> = normalized.chars().collect();
    let mut out = String::with_capacity(normalized.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' {
            let prev_newline = i > 0 && chars[i - 1] == '\n';
            let next_newline = chars.get(i + 1) == Some(&'\n');
            if !prev_newline && !next_newline && i > 0 && i + 1 < chars.len() {
                out.push(' ');
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Splits assembled content into classified blocks. Total for any
/// string input: malformed markup degrades to plain paragraphs and
/// the block count never exceeds [`MAX_BLOCKS`].
pub fn parse_blocks(text: &str) -> Vec<ContentBlock> {
    let joined = join_wrapped_lines(text);

    BLANK_LINE_RUN
        .split(&joined)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .take(MAX_BLOCKS)
        .map(classify)
        .collect()
}

struct Rule {
    applies: fn(&str) -> bool,
    build: fn(&str) -> ContentBlock,
}

/// Classification cascade, evaluated top to bottom with
/// first-match-wins semantics. Order is load-bearing: marker prefixes
/// before shape heuristics, longest marker first.
static RULES: &[Rule] = &[
    Rule {
        applies: |b| b.starts_with("### "),
        build: |b| ContentBlock::Subsubheading {
            text: b["### ".len()..].trim().to_string(),
            bold: true,
        },
    },
    Rule {
        applies: |b| b.starts_with("## "),
        build: |b| ContentBlock::Subheading {
            text: b["## ".len()..].trim().to_string(),
            bold: true,
        },
    },
    Rule {
        applies: |b| b.starts_with("# "),
        build: |b| ContentBlock::Heading {
            text: b["# ".len()..].trim().to_string(),
            bold: true,
        },
    },
    Rule {
        applies: |b| b.starts_with("* ") || b.starts_with("- "),
        build: |b| ContentBlock::Bullet {
            text: b[2..].trim().to_string(),
            bold: false,
        },
    },
    Rule {
        applies: |b| b.len() >= 4 && b.starts_with("**") && b.ends_with("**"),
        build: |b| ContentBlock::Paragraph {
            text: b[2..b.len() - 2].trim().to_string(),
            bold: true,
        },
    },
    Rule {
        applies: |b| b.len() < 60 && ALL_CAPS_LINE.is_match(b),
        build: |b| ContentBlock::Heading {
            text: b.trim().to_string(),
            bold: true,
        },
    },
    Rule {
        applies: |b| {
            (b.ends_with(':') && b.len() < 100) || (b.len() < 50 && TITLE_CASE_LINE.is_match(b))
        },
        build: |b| ContentBlock::Subheading {
            text: b.trim().to_string(),
            bold: true,
        },
    },
];

fn classify(block: &str) -> ContentBlock {
    for rule in RULES {
        if (rule.applies)(block) {
            return (rule.build)(block);
        }
    }
    ContentBlock::Paragraph {
        text: block.to_string(),
        bold: false,
    }
}
