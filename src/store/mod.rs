//! In-memory vector index over embedded documents.
//!
//! Exhaustive cosine search; intended for single documents, not corpora.

mod error;
mod retriever;
mod similarity;


pub use error::StoreError;
pub use retriever::{Retriever, DEFAULT_TOP_K};
pub use similarity::cosine_similarity;

use crate::embedder::{EmbedError, Embedder};
use crate::loader::Document;
use tracing::{debug, info};
use uuid::Uuid;

struct Entry {
    id: Uuid,
    document: Document,
    embedding: Vec<f32>,
}

pub struct VectorStore<E> {
    embedder: E,
    entries: Vec<Entry>,
}

impl<E: Embedder> VectorStore<E> {
    pub fn new(embedder: E) -> Self {
        Self {
            embedder,
            entries: Vec::new(),
        }
    }

    /// Embed `documents` and build a store holding them
    pub async fn from_documents(documents: Vec<Document>, embedder: E) -> Result<Self, StoreError> {
        let mut store = Self::new(embedder);
        store.add_documents(documents).await?;
        Ok(store)
    }

    /// Embed and insert documents, returning their generated ids in input order
    pub async fn add_documents(
        &mut self,
        documents: Vec<Document>,
    ) -> Result<Vec<Uuid>, StoreError> {
        let texts = documents.iter().map(|d| d.page_content.clone()).collect();
        let embeddings = self.embedder.embed_documents(texts).await?;

        if embeddings.len() != documents.len() {
            return Err(EmbedError::CountMismatch {
                expected: documents.len(),
                got: embeddings.len(),
            }
            .into());
        }

        for embedding in &embeddings {
            self.check_dim(embedding)?;
        }

        let mut ids = Vec::with_capacity(documents.len());
        for (document, embedding) in documents.into_iter().zip(embeddings) {
            let id = Uuid::new_v4();
            self.entries.push(Entry {
                id,
                document,
                embedding,
            });
            ids.push(id);
        }

        info!(
            added = ids.len(),
            total = self.entries.len(),
            model = %self.embedder.model().name,
            "indexed documents"
        );
        Ok(ids)
    }

    /// Top `k` documents by cosine similarity to `query`, best first.
    /// Equal scores keep insertion order.
    pub async fn similarity_search_with_score(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<(Document, f32)>, StoreError> {
        if self.entries.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let query_vector = self.embedder.embed_query(query).await?;
        self.check_dim(&query_vector)?;

        let mut scored: Vec<(&Entry, f32)> = self
            .entries
            .iter()
            .map(|entry| (entry, cosine_similarity(&query_vector, &entry.embedding)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);

        debug!(query, k, hits = scored.len(), "similarity search");
        Ok(scored
            .into_iter()
            .map(|(entry, score)| (entry.document.clone(), score))
            .collect())
    }

    pub async fn similarity_search(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .similarity_search_with_score(query, k)
            .await?
            .into_iter()
            .map(|(document, _)| document)
            .collect())
    }

    pub fn as_retriever(&self, k: usize) -> Retriever<'_, E> {
        Retriever::new(self, k)
    }

    pub fn get(&self, id: &Uuid) -> Option<&Document> {
        self.entries
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| &entry.document)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// All vectors share the dimension of the first one stored
    fn check_dim(&self, vector: &[f32]) -> Result<(), StoreError> {
        let expected = match self.entries.first() {
            Some(entry) => entry.embedding.len(),
            None => self.embedder.model().dim,
        };

        if vector.len() != expected {
            return Err(StoreError::DimensionMismatch {
                expected,
                got: vector.len(),
            });
        }
        Ok(())
    }
}
