/// A planned generation sub-task. Sections are produced once per
/// request and consumed strictly in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub prompt: String,
    pub target_words: usize,
}
