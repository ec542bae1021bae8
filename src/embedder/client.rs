// client.rs - the HTTP embedder
use super::{Batcher, EmbeddingModelInfo, EmbeddingRequest, EmbeddingResponse};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Embedding server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Expected {expected} embeddings, server returned {got}")]
    CountMismatch { expected: usize, got: usize },
}

/// Anything that turns text into vectors
#[async_trait]
pub trait Embedder: Send + Sync {
    fn model(&self) -> &EmbeddingModelInfo;

    /// One vector per input, in input order
    async fn embed_documents(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbedError>;

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let mut vectors = self.embed_documents(vec![text.to_string()]).await?;
        if vectors.len() != 1 {
            return Err(EmbedError::CountMismatch {
                expected: 1,
                got: vectors.len(),
            });
        }
        Ok(vectors.remove(0))
    }
}

pub struct EmbeddingClient {
    http: Client,
    endpoint: String,
    model: EmbeddingModelInfo,
}

impl EmbeddingClient {
    pub fn new(endpoint: impl Into<String>, model: EmbeddingModelInfo) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn embed_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbedError> {
        let expected = texts.len();
        let req = EmbeddingRequest {
            texts,
            model: self.model.name.clone(),
        };

        let response = self
            .http
            .post(format!("{}/embed", self.endpoint))
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EmbedError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let res: EmbeddingResponse = response.json().await?;
        if res.embeddings.len() != expected {
            return Err(EmbedError::CountMismatch {
                expected,
                got: res.embeddings.len(),
            });
        }

        Ok(res.embeddings)
    }
}

#[async_trait]
impl Embedder for EmbeddingClient {
    fn model(&self) -> &EmbeddingModelInfo {
        &self.model
    }

    async fn embed_documents(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbedError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let batcher = Batcher::new(self.model.max_batch);
        let mut embeddings = Vec::with_capacity(texts.len());

        for batch in batcher.split(&texts) {
            debug!(batch = batch.len(), model = %self.model.name, "embedding batch");
            embeddings.extend(self.embed_batch(batch.to_vec()).await?);
        }

        Ok(embeddings)
    }
}
