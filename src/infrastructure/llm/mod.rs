mod gemini_client;
mod mock_text_generator;

pub use gemini_client::GeminiClient;
pub use mock_text_generator::MockTextGenerator;
