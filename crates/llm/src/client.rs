use async_trait::async_trait;
use reqwest::Client;
use slidesplit_common::{AppConfig, Result, SplitterError};
use std::time::Duration;
use tracing::{debug, info};

use crate::llm_trait::ChatClient;
use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Chat-completion API client (OpenAI wire format)
#[derive(Clone)]
pub struct OpenAiClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: Client,
}

impl OpenAiClient {
    /// Create new client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        let model = model.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Chat client initialized: {} (model: {})", endpoint, model);
        Ok(Self {
            endpoint,
            api_key: api_key.into(),
            model,
            client,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.base_url.as_str(),
            config.api_key.as_str(),
            config.llm_model.as_str(),
            config.timeout(),
        )
    }

    /// Single request, no retry
    async fn send(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| SplitterError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| SplitterError::llm(format!("Failed to parse response: {}", e)))
    }
}

/// Error for a non-success reply, carrying the API's own message when present
pub fn api_error(status: u16, body: &str) -> SplitterError {
    let detail = match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => match parsed.error.kind {
            Some(kind) => format!("{} ({})", parsed.error.message, kind),
            None => parsed.error.message,
        },
        Err(_) if body.trim().is_empty() => "no error details".to_string(),
        Err(_) => body.trim().to_string(),
    };

    SplitterError::llm(format!("Chat API returned HTTP {}: {}", status, detail))
}

/// Text content of the first choice
pub fn first_choice_content(response: ChatCompletionResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| SplitterError::llm("Response contained no choices"))?;

    choice.message.content.ok_or_else(|| {
        SplitterError::llm(format!(
            "First choice has no text content (finish reason: {})",
            choice.finish_reason.as_deref().unwrap_or("unknown")
        ))
    })
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        };

        debug!(
            "Sending chat request - Model: {}, Messages: {}, Prompt length: {}",
            request.model,
            request.messages.len(),
            request.messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        let response = self.send(&request).await?;
        let content = first_choice_content(response)?;

        debug!("Received reply - Length: {}", content.len());
        Ok(content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
