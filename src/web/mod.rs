//! QA bot web form served with axum.
//!
//! `POST /ask` takes a multipart upload (`pdf`, `query`) and always answers
//! with plain text, errors included, so the page can show whatever comes back.

mod page;


pub use page::{render, DEFAULT_QUESTION};

use crate::config::AppConfig;
use crate::embedder::{Embedder, EmbeddingClient, EmbeddingModelInfo};
use crate::loader::{self, Document, LoaderError, PREVIEW_CHARS};
use crate::qa::{format_response, ChatClient, LanguageModel, QaError, RetrievalQa};
use crate::splitter::{RecursiveSplitter, SplitterError};
use crate::store::{StoreError, VectorStore, DEFAULT_TOP_K};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Largest accepted upload
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub const NO_PDF_MESSAGE: &str = "Please upload a PDF file first.";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoaderError),

    #[error(transparent)]
    Split(#[from] SplitterError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Qa(#[from] QaError),
}

/// Shared handler state
pub struct AppState {
    pub config: AppConfig,
    /// Hosted LLM token, usually from `HF_API_TOKEN`
    pub token: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process exits
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("QA bot listening on http://{}", addr);
    axum::serve(listener, router(Arc::new(state))).await
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render(&state.config.llm.model))
}

async fn health() -> &'static str {
    "ok"
}

async fn ask(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> String {
    let mut pdf: Option<(String, Vec<u8>)> = None;
    let mut query = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return format!("Error processing your query: {e}"),
        };

        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("pdf") => {
                let name = field.file_name().unwrap_or("upload.pdf").to_string();
                match field.bytes().await {
                    Ok(bytes) if !bytes.is_empty() => pdf = Some((name, bytes.to_vec())),
                    Ok(_) => {}
                    Err(e) => return format!("Error processing your query: {e}"),
                }
            }
            Some("query") => match field.text().await {
                Ok(text) => query = text,
                Err(e) => return format!("Error processing your query: {e}"),
            },
            _ => {}
        }
    }

    let Some((name, bytes)) = pdf else {
        return NO_PDF_MESSAGE.to_string();
    };

    match answer_pdf(&state, name.clone(), bytes, &query).await {
        Ok(response) => response,
        Err(e) => {
            warn!(file = %name, error = %e, "query failed");
            format!("Error processing your query: {e}")
        }
    }
}

async fn answer_pdf(
    state: &AppState,
    name: String,
    bytes: Vec<u8>,
    query: &str,
) -> Result<String, PipelineError> {
    let documents = loader::load_pdf_upload(bytes, name).await?;
    let splitter = RecursiveSplitter::from_config(&state.config.splitter)?;
    let embedder = EmbeddingClient::new(
        state.config.embedding.endpoint.clone(),
        EmbeddingModelInfo::from(&state.config.embedding),
    );
    let llm = ChatClient::new(state.config.llm.clone(), state.token.clone().unwrap_or_default())?;

    answer_documents(documents, query, &splitter, embedder, llm).await
}

/// Split, index and answer `query` over already-loaded documents
pub async fn answer_documents<E: Embedder, L: LanguageModel>(
    documents: Vec<Document>,
    query: &str,
    splitter: &RecursiveSplitter,
    embedder: E,
    llm: L,
) -> Result<String, PipelineError> {
    let preview = loader::preview(&documents, PREVIEW_CHARS);
    let splits = splitter.split_documents(&documents);
    let store = VectorStore::from_documents(splits, embedder).await?;

    let qa = RetrievalQa::new(store.as_retriever(DEFAULT_TOP_K), llm);
    let answer = qa.invoke(query).await?;

    Ok(format_response(&preview, &answer))
}
