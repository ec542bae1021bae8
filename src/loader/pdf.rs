use super::{Document, DocumentMetadata, LoaderError};
use tracing::debug;

/// Page separator emitted by the text extractor
const PAGE_BREAK: char = '\x0c';

/// Extract one document per non-empty page from in-memory PDF bytes
pub fn load_pdf_bytes(bytes: &[u8], source: &str) -> Result<Vec<Document>, LoaderError> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| LoaderError::Pdf {
        source_name: source.to_string(),
        message: e.to_string(),
    })?;

    let pages = split_pages(&text, source);
    if pages.is_empty() {
        return Err(LoaderError::Empty(source.to_string()));
    }

    debug!(source, pages = pages.len(), "extracted PDF text");
    Ok(pages)
}

/// Run [`load_pdf_bytes`] on the blocking pool. A panic inside the extractor
/// comes back as [`LoaderError::Extractor`] instead of unwinding the caller.
pub async fn load_pdf_upload(bytes: Vec<u8>, source: String) -> Result<Vec<Document>, LoaderError> {
    let source_name = source.clone();
    tokio::task::spawn_blocking(move || load_pdf_bytes(&bytes, &source))
        .await
        .map_err(|e| LoaderError::Extractor {
            source_name,
            message: e.to_string(),
        })?
}

/// Break extracted text on form feeds, keeping the original page index
pub(crate) fn split_pages(text: &str, source: &str) -> Vec<Document> {
    text.split(PAGE_BREAK)
        .enumerate()
        .filter(|(_, page)| !page.trim().is_empty())
        .map(|(page, content)| {
            Document::new(
                content,
                DocumentMetadata {
                    source: source.to_string(),
                    page: Some(page),
                },
            )
        })
        .collect()
}
