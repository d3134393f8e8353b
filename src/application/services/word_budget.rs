/// Fixed academic-page constant. Planning and estimation must share
/// this value or section targets silently drift from page estimates.
pub const WORDS_PER_PAGE: usize = 500;

/// Counts whitespace-separated tokens. An empty string counts as one
/// token, never zero, so callers must not read the result as "no
/// content".
pub fn estimate_word_count(text: &str) -> usize {
    text.split_whitespace().count().max(1)
}

pub fn estimate_pages(text: &str) -> usize {
    estimate_word_count(text).div_ceil(WORDS_PER_PAGE)
}

/// An explicit word count dominates the page count when both are
/// given; zero or absent explicit counts fall back to pages.
pub fn resolve_target_words(number_of_pages: u32, word_count: Option<u32>) -> usize {
    match word_count {
        Some(words) if words > 0 => words as usize,
        _ => number_of_pages as usize * WORDS_PER_PAGE,
    }
}
