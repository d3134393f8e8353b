use async_trait::async_trait;

use crate::domain::AssignmentRequest;

/// The text-generation collaborator. The pipeline only ever issues one
/// prompt at a time per job; implementations may assume sequential use.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        request: &AssignmentRequest,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
