use async_trait::async_trait;

use crate::application::ports::{GenerationError, TextGenerator};
use crate::domain::AssignmentRequest;

/// Deterministic generator for tests and offline development: emits a
/// fixed number of words per call.
pub struct MockTextGenerator {
    words_per_call: usize,
}

impl MockTextGenerator {
    pub fn new(words_per_call: usize) -> Self {
        Self { words_per_call }
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _request: &AssignmentRequest,
    ) -> Result<String, GenerationError> {
        Ok(vec!["lorem"; self.words_per_call].join(" "))
    }
}
