use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to extract text from PDF {source_name}: {message}")]
    Pdf {
        source_name: String,
        message: String,
    },

    #[error("PDF extractor crashed on {source_name}: {message}")]
    Extractor {
        source_name: String,
        message: String,
    },

    #[error("Document contains no extractable text: {0}")]
    Empty(String),
}
