//! Application configuration loaded from `quest-rag.toml`.
//!
//! Every section is optional; missing fields fall back to the defaults
//! the pipeline was tuned with. Secrets are never read from this file,
//! the LLM token comes from `HF_API_TOKEN`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the hosted LLM token
pub const TOKEN_ENV: &str = "HF_API_TOKEN";

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "quest-rag.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub chunker: ChunkerConfig,
    #[serde(default)]
    pub splitter: SplitterConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
    /// An explicit path that cannot be read is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load_from(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

/// LaTeX splitter limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    #[serde(default = "default_latex_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_latex_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_latex_chunk_size() -> usize {
    crate::chunker::DEFAULT_CHUNK_SIZE
}
fn default_latex_chunk_overlap() -> usize {
    crate::chunker::DEFAULT_CHUNK_OVERLAP
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_latex_chunk_size(),
            chunk_overlap: default_latex_chunk_overlap(),
        }
    }
}

/// Recursive splitter limits used when indexing documents for retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_chunk_size() -> usize {
    1000
}
fn default_chunk_overlap() -> usize {
    100
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

/// Embedding server and model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    #[serde(default = "default_embedding_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_embedding_model")]
    pub model: String,
    #[serde(default = "default_embedding_dim")]
    pub dim: usize,
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,
}

fn default_embedding_endpoint() -> String {
    "http://localhost:18115".into()
}
fn default_embedding_model() -> String {
    "sentence-transformers/all-MiniLM-L6-v2".into()
}
fn default_embedding_dim() -> usize {
    384
}
fn default_max_batch() -> usize {
    32
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_embedding_endpoint(),
            model: default_embedding_model(),
            dim: default_embedding_dim(),
            max_batch: default_max_batch(),
        }
    }
}

/// Hosted chat-completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_llm_endpoint() -> String {
    "https://router.huggingface.co/v1".into()
}
fn default_llm_model() -> String {
    "mistralai/Mixtral-8x7B-Instruct-v0.1".into()
}
fn default_temperature() -> f32 {
    0.1
}
fn default_max_new_tokens() -> u32 {
    512
}
fn default_top_p() -> f32 {
    0.95
}
fn default_timeout_secs() -> u64 {
    180
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            model: default_llm_model(),
            temperature: default_temperature(),
            max_new_tokens: default_max_new_tokens(),
            top_p: default_top_p(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// QA web form listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    7860
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.chunker.chunk_size, 500);
        assert_eq!(config.chunker.chunk_overlap, 50);
        assert_eq!(config.splitter.chunk_size, 1000);
        assert_eq!(config.splitter.chunk_overlap, 100);
        assert_eq!(config.llm.model, "mistralai/Mixtral-8x7B-Instruct-v0.1");
        assert_eq!(config.llm.max_new_tokens, 512);
        assert_eq!(config.server.port, 7860);
    }

    #[test]
    fn test_partial_toml() {
        let toml_str = r#"
            [chunker]
            chunk_size = 250

            [server]
            port = 9000
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.chunker.chunk_size, 250);
        assert_eq!(config.chunker.chunk_overlap, 50);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.embedding.dim, 384);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[embedding]\nmodel = \"ibm-granite/granite-embedding-125m-english\"\ndim = 768"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.embedding.model, "ibm-granite/granite-embedding-125m-english");
        assert_eq!(config.embedding.dim, 768);
        assert_eq!(config.embedding.max_batch, 32);
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/quest-rag.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        let result: Result<AppConfig, _> = toml::from_str("[chunker]\nchunk_size = \"big\"");
        assert!(result.is_err());
    }
}
