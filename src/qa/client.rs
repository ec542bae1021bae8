use super::types::{ChatMessage, ChatRequest, ChatResponse};
use super::QaError;
use crate::config::{LlmConfig, TOKEN_ENV};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Text in, text out
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, QaError>;
}

#[async_trait]
impl<T: LanguageModel + ?Sized> LanguageModel for &T {
    async fn generate(&self, prompt: &str) -> Result<String, QaError> {
        (**self).generate(prompt).await
    }
}

/// Client for a hosted chat-completion endpoint
pub struct ChatClient {
    http: Client,
    config: LlmConfig,
    token: String,
}

impl ChatClient {
    pub fn new(config: LlmConfig, token: impl Into<String>) -> Result<Self, QaError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(QaError::MissingToken);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            token,
        })
    }

    /// Build with the token from `HF_API_TOKEN`
    pub fn from_env(config: LlmConfig) -> Result<Self, QaError> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| QaError::MissingToken)?;
        Self::new(config, token)
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, QaError> {
        let req = ChatRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_new_tokens,
            top_p: self.config.top_p,
        };

        let response = self
            .http
            .post(format!(
                "{}/chat/completions",
                self.config.endpoint.trim_end_matches('/')
            ))
            .bearer_auth(&self.token)
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(QaError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let res: ChatResponse = response.json().await?;
        let answer = res
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(QaError::EmptyResponse)?;

        debug!(model = %self.config.model, chars = answer.len(), "chat completion");
        Ok(answer)
    }
}

#[async_trait]
impl LanguageModel for ChatClient {
    async fn generate(&self, prompt: &str) -> Result<String, QaError> {
        self.chat(vec![ChatMessage::user(prompt)]).await
    }
}
