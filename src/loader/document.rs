use serde::{Deserialize, Serialize};

/// A unit of loaded text: a PDF page, a whole text file, or a chunk of either
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Text content
    pub page_content: String,
    /// Where the text came from
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Path or upload name of the originating file
    pub source: String,
    /// Zero-based page index for paged formats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

impl Document {
    pub fn new(page_content: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            page_content: page_content.into(),
            metadata,
        }
    }

    /// Document with only a source and no page
    pub fn from_text(page_content: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(
            page_content,
            DocumentMetadata {
                source: source.into(),
                page: None,
            },
        )
    }
}

/// Join the text of every document in order
pub fn concat_content(documents: &[Document]) -> String {
    documents.iter().map(|d| d.page_content.as_str()).collect()
}

/// First `max_chars` characters of the joined document text
pub fn preview(documents: &[Document], max_chars: usize) -> String {
    concat_content(documents).chars().take(max_chars).collect()
}
