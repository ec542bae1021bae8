use super::*;
use crate::config::EmbeddingConfig;
use async_trait::async_trait;

#[test]
fn test_batching_small() {
    let batcher = Batcher::new(3);
    let items = vec![
        "chunk1".to_string(),
        "chunk2".to_string(),
        "chunk3".to_string(),
        "chunk4".to_string(),
        "chunk5".to_string(),
    ];

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 3);
    assert_eq!(batches[1].len(), 2);
}

#[test]
fn test_batching_empty() {
    let batcher = Batcher::new(100);
    let items: Vec<String> = vec![];

    assert_eq!(batcher.split(&items).len(), 0);
}

#[test]
fn test_batching_zero_size() {
    let batcher = Batcher::new(0);
    let items = vec!["a".to_string(); 3];

    assert_eq!(batcher.split(&items).len(), 3);
}

#[test]
fn test_model_info_default() {
    let model = EmbeddingModelInfo::default();
    assert_eq!(model.name, "sentence-transformers/all-MiniLM-L6-v2");
    assert_eq!(model.dim, 384);
    assert_eq!(model.max_batch, 32);
}

#[test]
fn test_model_info_granite() {
    let model = EmbeddingModelInfo::granite_125m();
    assert_eq!(model.name, "ibm-granite/granite-embedding-125m-english");
    assert_eq!(model.dim, 768);
}

#[test]
fn test_model_info_from_config() {
    let config = EmbeddingConfig {
        model: "custom-model".to_string(),
        dim: 64,
        max_batch: 8,
        ..EmbeddingConfig::default()
    };
    assert_eq!(
        EmbeddingModelInfo::from(&config),
        EmbeddingModelInfo::new("custom-model", 64, 8)
    );
}

#[test]
fn test_endpoint_trailing_slash() {
    let client = EmbeddingClient::new("http://localhost:18115/", EmbeddingModelInfo::default());
    assert_eq!(client.endpoint(), "http://localhost:18115");
}

#[tokio::test]
async fn test_client_empty_input() {
    // never touches the network
    let client = EmbeddingClient::new("http://127.0.0.1:9", EmbeddingModelInfo::default());
    let result = client.embed_documents(vec![]).await;
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn test_client_unreachable_server() {
    let client = EmbeddingClient::new("http://127.0.0.1:9", EmbeddingModelInfo::default());
    let result = client.embed_query("How are you?").await;
    assert!(matches!(result, Err(EmbedError::RequestFailed(_))));
}

struct Broken {
    model: EmbeddingModelInfo,
}

#[async_trait]
impl Embedder for Broken {
    fn model(&self) -> &EmbeddingModelInfo {
        &self.model
    }

    async fn embed_documents(&self, _texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbedError> {
        Ok(vec![])
    }
}

#[tokio::test]
async fn test_embed_query_count_mismatch() {
    let embedder = Broken {
        model: EmbeddingModelInfo::default(),
    };
    let result = embedder.embed_query("anything").await;
    assert!(matches!(
        result,
        Err(EmbedError::CountMismatch {
            expected: 1,
            got: 0
        })
    ));
}

// Integration test - requires embedding server running
#[tokio::test]
#[ignore]
async fn test_client_round_trip() {
    let client = EmbeddingClient::new("http://localhost:18115", EmbeddingModelInfo::default());
    let texts = vec![
        "This is a test sentence.".to_string(),
        "Another test sentence here.".to_string(),
    ];

    let embeddings = client.embed_documents(texts).await.unwrap();

    assert_eq!(embeddings.len(), 2);
    assert_eq!(embeddings[0].len(), 384);
}
