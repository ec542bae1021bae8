use async_trait::async_trait;
use quest_rag::qa::build_prompt;
use quest_rag::{
    format_response, load_path, split, EmbedError, Embedder, EmbeddingModelInfo, LanguageModel,
    LatexTextSplitter, QaError, RecursiveSplitter, RetrievalQa, VectorStore,
    SAMPLE_LATEX_DOCUMENT,
};
use std::io::Write;

const TOPICS: [&str; 3] = ["smoking", "email", "internet"];

struct TopicEmbedder {
    model: EmbeddingModelInfo,
}

impl TopicEmbedder {
    fn new() -> Self {
        Self {
            model: EmbeddingModelInfo::new("topics", TOPICS.len(), 2),
        }
    }
}

#[async_trait]
impl Embedder for TopicEmbedder {
    fn model(&self) -> &EmbeddingModelInfo {
        &self.model
    }

    async fn embed_documents(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbedError> {
        Ok(texts
            .iter()
            .map(|text| {
                let lower = text.to_lowercase();
                TOPICS
                    .iter()
                    .map(|topic| lower.matches(topic).count() as f32)
                    .collect()
            })
            .collect())
    }
}

/// Answers with the first line of context it was given
struct FirstLineModel;

#[async_trait]
impl LanguageModel for FirstLineModel {
    async fn generate(&self, prompt: &str) -> Result<String, QaError> {
        let context = prompt
            .split("\n\n")
            .nth(1)
            .unwrap_or_default()
            .lines()
            .next()
            .unwrap_or_default();
        Ok(context.to_string())
    }
}

const POLICIES: &str = "\
Smoking Policy: smoking is prohibited inside all company buildings. Designated smoking areas are outside.

Email Policy: email is for business use. Do not forward company email to personal accounts.

Internet Usage Policy: internet access is provided for work. Limited personal internet use is tolerated.
";

#[tokio::test]
async fn test_policies_end_to_end() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(POLICIES.as_bytes()).unwrap();

    let documents = load_path(file.path()).unwrap();
    assert_eq!(documents.len(), 1);

    let splitter = RecursiveSplitter::new(120, 10).unwrap();
    let splits = splitter.split_documents(&documents);
    assert_eq!(splits.len(), 3);

    let store = VectorStore::from_documents(splits, TopicEmbedder::new())
        .await
        .unwrap();
    assert_eq!(store.count(), 3);

    let top = store.similarity_search("Email policy", 1).await.unwrap();
    assert!(top[0].page_content.starts_with("Email Policy"));

    let qa = RetrievalQa::new(store.as_retriever(2), FirstLineModel);
    let answer = qa.invoke("What is the smoking policy?").await.unwrap();

    assert!(answer.result.starts_with("Smoking Policy"));
    assert_eq!(answer.source_documents.len(), 2);

    let response = format_response("preview", &answer);
    assert!(response.contains("Answer: Smoking Policy"));
    assert!(response.contains("Source 1: Smoking Policy"));
    assert!(response.contains("Source 2: "));
}

#[test]
fn test_prompt_lists_context_before_question() {
    let docs = vec![quest_rag::Document::from_text("Badges must be worn.", "policies.txt")];
    let prompt = build_prompt("Q?", &docs);

    let context_at = prompt.find("Badges must be worn.").unwrap();
    let question_at = prompt.find("Question: Q?").unwrap();
    assert!(context_at < question_at);
}

#[test]
fn test_latex_splitter_public_api() {
    let splitter = LatexTextSplitter::default();
    let chunks = splitter.split_text(SAMPLE_LATEX_DOCUMENT);

    assert_eq!(chunks.len(), 9);
    assert_eq!(split(SAMPLE_LATEX_DOCUMENT, 500, 50), chunks);
    assert!(chunks.iter().all(|c| !c.is_empty()));
}
