// Public API exports
pub mod chunker;
pub mod config;
pub mod embedder;
pub mod loader;
pub mod qa;
pub mod splitter;
pub mod store;
pub mod web;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError};

pub use chunker::{
    split, split_latex_text, LatexTextSplitter, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE,
    SAMPLE_LATEX_DOCUMENT,
};

pub use loader::{load_path, load_pdf, load_text, Document, DocumentMetadata, LoaderError};

pub use splitter::{RecursiveSplitter, SplitterError};

pub use embedder::{Batcher, EmbedError, Embedder, EmbeddingClient, EmbeddingModelInfo};

pub use store::{Retriever, StoreError, VectorStore};

pub use qa::{format_response, ChatClient, LanguageModel, QaAnswer, QaError, RetrievalQa};
