use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TldrError;

// Generative text capability: condense one chunk of an over-long document,
// or produce the final summary for the whole thing
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn render_partial(
        &self,
        chunk_text: &str,
        canonical_key: &str,
    ) -> Result<String, TldrError>;

    async fn summarize(&self, reference_link: &str, text: &str) -> Result<String, TldrError>;
}

// chat completions request format
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

// chat completions response format
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

// Summarizer backed by an OpenAI-compatible chat completions endpoint
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    async fn chat(&self, system: String, user: String) -> Result<String, TldrError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user,
                },
            ],
            temperature: 0.3,
        };

        let response: ChatResponse = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TldrError::Upstream("empty completion response".to_string()))
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn render_partial(
        &self,
        chunk_text: &str,
        canonical_key: &str,
    ) -> Result<String, TldrError> {
        debug!(doc = %canonical_key, chars = chunk_text.len(), "rendering partial chunk");
        self.chat(
            format!(
                "You are condensing one part of the document {canonical_key}. \
                 Rewrite the excerpt below as a compact digest, keeping every \
                 decision, argument and open point. Do not add commentary."
            ),
            chunk_text.to_string(),
        )
        .await
    }

    async fn summarize(&self, reference_link: &str, text: &str) -> Result<String, TldrError> {
        debug!(link = %reference_link, chars = text.len(), "summarizing");
        self.chat(
            format!(
                "Summarize the following document ({reference_link}) in a few \
                 short paragraphs a busy developer can read in a minute. Lead \
                 with what it proposes or reports, then the current status."
            ),
            text.to_string(),
        )
        .await
    }
}
