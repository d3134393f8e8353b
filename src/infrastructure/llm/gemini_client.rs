use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationError, TextGenerator};
use crate::domain::AssignmentRequest;
use crate::presentation::config::LlmSettings;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const SYSTEM_PROMPT: &str = "You are an expert academic assistant for university students. \
Provide comprehensive, well-structured responses in formal academic language, organised with \
clear headings, subheadings, and paragraphs, including an introduction, main body, and \
conclusion with relevant examples and case studies. Do not include any header information \
such as student name or matric number. Do not include any references, bibliography, \
citations, works cited section, footnotes, or endnotes. Write as a standalone academic \
essay without external citations.";

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    max_output_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: ContentPart,
    contents: Vec<ContentPart>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct ContentPart {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: usize,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(settings: &LlmSettings) -> Self {
        Self {
            client: Client::new(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            max_output_tokens: settings.max_output_tokens,
            temperature: settings.temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[tracing::instrument(skip(self, prompt, _request))]
    async fn generate(
        &self,
        prompt: &str,
        _request: &AssignmentRequest,
    ) -> Result<String, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            BASE_URL, self.model, self.api_key
        );

        let body = GenerateContentRequest {
            system_instruction: ContentPart {
                parts: vec![TextPart {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            contents: vec![ContentPart {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.max_output_tokens,
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::ApiRequestFailed(e.to_string()))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }
        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiRequestFailed(format!(
                "{}: {}",
                status, detail
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let text: String = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "empty candidate text".to_string(),
            ));
        }

        Ok(text)
    }
}
