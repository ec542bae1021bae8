use super::{StoreError, VectorStore};
use crate::embedder::Embedder;
use crate::loader::Document;

/// Documents returned per query unless configured otherwise
pub const DEFAULT_TOP_K: usize = 4;

/// Fixed-`k` view over a [`VectorStore`]
pub struct Retriever<'a, E> {
    store: &'a VectorStore<E>,
    k: usize,
}

impl<'a, E: Embedder> Retriever<'a, E> {
    pub fn new(store: &'a VectorStore<E>, k: usize) -> Self {
        Self { store, k }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub async fn get_relevant_documents(&self, query: &str) -> Result<Vec<Document>, StoreError> {
        self.store.similarity_search(query, self.k).await
    }
}
