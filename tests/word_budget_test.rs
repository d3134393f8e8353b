use scriptorium::application::services::{
    WORDS_PER_PAGE, estimate_pages, estimate_word_count, resolve_target_words,
};

#[test]
fn given_plain_sentence_when_counting_words_then_counts_whitespace_tokens() {
    assert_eq!(estimate_word_count("the quick brown fox"), 4);
}

#[test]
fn given_empty_string_when_counting_words_then_returns_one() {
    assert_eq!(estimate_word_count(""), 1);
}

#[test]
fn given_whitespace_runs_when_counting_words_then_runs_collapse() {
    assert_eq!(estimate_word_count("  one\t\ttwo \n three  "), 3);
}

#[test]
fn given_exact_page_of_words_when_estimating_pages_then_returns_one_page() {
    let text = vec!["word"; WORDS_PER_PAGE].join(" ");
    assert_eq!(estimate_pages(&text), 1);
}

#[test]
fn given_one_word_over_a_page_when_estimating_pages_then_rounds_up() {
    let text = vec!["word"; WORDS_PER_PAGE + 1].join(" ");
    assert_eq!(estimate_pages(&text), 2);
}

#[test]
fn given_no_explicit_word_count_when_resolving_target_then_uses_pages() {
    assert_eq!(resolve_target_words(4, None), 2000);
}

#[test]
fn given_explicit_word_count_when_resolving_target_then_word_count_wins() {
    assert_eq!(resolve_target_words(4, Some(3200)), 3200);
}

#[test]
fn given_zero_word_count_when_resolving_target_then_falls_back_to_pages() {
    assert_eq!(resolve_target_words(2, Some(0)), 1000);
}
