// model.rs - which sentence-embedding model the server runs
use crate::config::EmbeddingConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingModelInfo {
    pub dim: usize,
    pub name: String,
    pub max_batch: usize,
}

impl EmbeddingModelInfo {
    pub fn new(name: impl Into<String>, dim: usize, max_batch: usize) -> Self {
        Self {
            name: name.into(),
            dim,
            max_batch,
        }
    }

    pub fn all_minilm_l6_v2() -> Self {
        Self::new("sentence-transformers/all-MiniLM-L6-v2", 384, 32)
    }

    pub fn granite_125m() -> Self {
        Self::new("ibm-granite/granite-embedding-125m-english", 768, 32)
    }
}

impl Default for EmbeddingModelInfo {
    fn default() -> Self {
        Self::all_minilm_l6_v2()
    }
}

impl From<&EmbeddingConfig> for EmbeddingModelInfo {
    fn from(config: &EmbeddingConfig) -> Self {
        Self::new(config.model.clone(), config.dim, config.max_batch)
    }
}
