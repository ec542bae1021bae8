mod chain;
mod client;
mod types;


pub use chain::{
    build_prompt, format_response, QaAnswer, RetrievalQa, MAX_SOURCES_SHOWN, SOURCE_PREVIEW_CHARS,
};
pub use client::{ChatClient, LanguageModel};
pub use types::{ChatMessage, ChatRequest, ChatResponse};

use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    #[error("HF_API_TOKEN not found in environment variables. Please set it.")]
    MissingToken,

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("LLM endpoint returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("LLM endpoint returned no choices")]
    EmptyResponse,

    #[error("Retrieval failed: {0}")]
    Retrieval(#[from] StoreError),
}
