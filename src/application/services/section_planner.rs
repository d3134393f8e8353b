use crate::domain::Section;

use super::word_budget::WORDS_PER_PAGE;

/// Words reserved for each of the introduction and conclusion:
/// 0.7 of an academic page.
const FRAME_SECTION_WORDS: usize = WORDS_PER_PAGE * 7 / 10;
const MIN_SECTION_WORDS: usize = 400;
const MAX_SECTION_WORDS: usize = 600;

/// Decomposes a word target into an ordered list of generation
/// sub-tasks: an introduction, N body sections, and a conclusion, each
/// carrying its own word budget and prompt.
///
/// The planner is total: a zero target still yields the full
/// intro/body/conclusion structure with budgets saturated at zero.
/// Rejecting degenerate targets is the request boundary's job.
pub fn plan_sections(question: &str, target_words: usize) -> Vec<Section> {
    let body_words = target_words.saturating_sub(2 * FRAME_SECTION_WORDS);
    let section_target = (target_words / 8).clamp(MIN_SECTION_WORDS, MAX_SECTION_WORDS);
    let body_count = body_words.div_ceil(section_target).max(1);
    let words_per_body = body_words / body_count;

    let mut sections = Vec::with_capacity(body_count + 2);

    sections.push(Section {
        title: "Introduction".to_string(),
        prompt: introduction_prompt(question, FRAME_SECTION_WORDS),
        target_words: FRAME_SECTION_WORDS,
    });

    for title in body_titles(body_count) {
        sections.push(Section {
            prompt: body_prompt(question, &title, words_per_body),
            title,
            target_words: words_per_body,
        });
    }

    sections.push(Section {
        title: "Conclusion".to_string(),
        prompt: conclusion_prompt(question, FRAME_SECTION_WORDS),
        target_words: FRAME_SECTION_WORDS,
    });

    sections
}

/// Body section titles by count. Surplus sections beyond the four
/// named ones continue as "Additional Analysis {k}".
fn body_titles(count: usize) -> Vec<String> {
    let named: &[&str] = match count {
        1 => &["Main Content"],
        2 => &["Main Analysis", "Critical Evaluation"],
        3 => &["Background and Context", "Main Analysis", "Critical Evaluation"],
        _ => &[
            "Background and Context",
            "Main Arguments and Analysis",
            "Case Studies and Examples",
            "Critical Evaluation",
        ],
    };

    let mut titles: Vec<String> = named.iter().map(|t| t.to_string()).collect();
    for k in 1..=count.saturating_sub(named.len()) {
        titles.push(format!("Additional Analysis {}", k));
    }
    titles
}

fn introduction_prompt(question: &str, target_words: usize) -> String {
    format!(
        "Write the introduction section of an academic assignment answering the \
         following question:\n\n{question}\n\nThe introduction should be \
         approximately {target_words} words. Introduce the topic, state its \
         significance, and outline how the assignment will address the question. \
         Use formal academic language. Do not include any references, \
         bibliography, citations, or works cited section."
    )
}

fn body_prompt(question: &str, title: &str, target_words: usize) -> String {
    format!(
        "Write the \"{title}\" section of an academic assignment answering the \
         following question:\n\n{question}\n\nThis section should be \
         approximately {target_words} words. Develop the argument in depth with \
         relevant examples and case studies, using formal academic language with \
         clear subheadings where appropriate. Do not repeat the introduction. Do \
         not include any references, bibliography, citations, or works cited \
         section."
    )
}

fn conclusion_prompt(question: &str, target_words: usize) -> String {
    format!(
        "Write the conclusion section of an academic assignment answering the \
         following question:\n\n{question}\n\nThe conclusion should be \
         approximately {target_words} words. Summarise the key arguments and \
         close with the overall position. Do not introduce new material. Do not \
         include any references, bibliography, citations, or works cited section."
    )
}
