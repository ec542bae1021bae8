use super::{LanguageModel, QaError};
use crate::embedder::Embedder;
use crate::loader::Document;
use crate::store::Retriever;
use serde::Serialize;
use tracing::info;

/// Characters of each source shown under the answer
pub const SOURCE_PREVIEW_CHARS: usize = 200;

/// Sources listed under the answer
pub const MAX_SOURCES_SHOWN: usize = 2;

/// Places every retrieved chunk into a single prompt
pub fn build_prompt(question: &str, context: &[Document]) -> String {
    let context = context
        .iter()
        .map(|d| d.page_content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Use the following pieces of context to answer the question at the end. \
         If you don't know the answer, just say that you don't know, don't try to make up an answer.\n\n\
         {context}\n\nQuestion: {question}\nHelpful Answer:"
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct QaAnswer {
    pub query: String,
    pub result: String,
    pub source_documents: Vec<Document>,
}

/// Retrieve, then answer from the retrieved context
pub struct RetrievalQa<'a, E, L> {
    retriever: Retriever<'a, E>,
    llm: L,
}

impl<'a, E: Embedder, L: LanguageModel> RetrievalQa<'a, E, L> {
    pub fn new(retriever: Retriever<'a, E>, llm: L) -> Self {
        Self { retriever, llm }
    }

    pub async fn invoke(&self, query: &str) -> Result<QaAnswer, QaError> {
        let source_documents = self.retriever.get_relevant_documents(query).await?;
        let prompt = build_prompt(query, &source_documents);
        let result = self.llm.generate(&prompt).await?;

        info!(query, sources = source_documents.len(), "answered query");
        Ok(QaAnswer {
            query: query.to_string(),
            result,
            source_documents,
        })
    }
}

/// Render the preview, answer and leading sources as shown in the web form
pub fn format_response(preview: &str, answer: &QaAnswer) -> String {
    let mut response = format!("Document Preview (first 1000 chars):\n{preview}\n\n");
    response.push_str(&format!("Answer: {}\n\nSources:\n", answer.result));

    for (i, doc) in answer
        .source_documents
        .iter()
        .take(MAX_SOURCES_SHOWN)
        .enumerate()
    {
        let source: String = doc.page_content.chars().take(SOURCE_PREVIEW_CHARS).collect();
        response.push_str(&format!("Source {}: {}...\n\n", i + 1, source));
    }

    response
}
