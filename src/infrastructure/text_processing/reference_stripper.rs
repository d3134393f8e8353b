use regex::Regex;
use std::sync::LazyLock;

/// A reference/bibliography heading standing alone on its own line,
/// optionally wrapped in markdown heading or emphasis markers.
static REFERENCE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[#*\s]*(references?|bibliography|works cited|sources|citations?)[\s:*]*$")
        .unwrap()
});

/// An "Author (Year)." citation line, e.g. `Smith, J. (2020). Title.`
static CITATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z ,.&'\-]*\(\d{4}[a-z]?\)\.").unwrap());

/// Removes everything from the first standalone reference-section
/// heading through end of text, then drops any trailing lines shaped
/// like citations. Generated content should never cite, so whatever
/// slipped through is noise for the renderer.
pub fn strip_references(text: &str) -> String {
    let cut = match REFERENCE_HEADING.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    };

    let mut end = cut.len();
    for line in cut.rsplit('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || CITATION_LINE.is_match(trimmed) {
            end -= line.len();
            end = end.saturating_sub(1); // the '\n' itself
            continue;
        }
        break;
    }

    cut[..end.min(cut.len())].trim().to_string()
}
