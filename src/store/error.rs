use crate::embedder::EmbedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Embedding failed: {0}")]
    Embed(#[from] EmbedError),

    #[error("Vector has {got} dimensions, store expects {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}
