mod document;
mod error;
mod pdf;

#[cfg(test)]
mod tests;

pub use document::{concat_content, preview, Document, DocumentMetadata};
pub use error::LoaderError;
pub use pdf::{load_pdf_bytes, load_pdf_upload};

use std::path::Path;
use tracing::info;

/// Characters shown when previewing a loaded document
pub const PREVIEW_CHARS: usize = 1000;

/// Load a PDF from disk, one document per page
pub fn load_pdf(path: &Path) -> Result<Vec<Document>, LoaderError> {
    let bytes = read(path)?;
    let documents = load_pdf_bytes(&bytes, &path.display().to_string())?;
    info!(path = %path.display(), pages = documents.len(), "loaded PDF");
    Ok(documents)
}

/// Load a UTF-8 text file as a single document
pub fn load_text(path: &Path) -> Result<Vec<Document>, LoaderError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "loaded text file");
    Ok(vec![Document::from_text(content, path.display().to_string())])
}

/// Pick a loader from the file extension; anything that is not `.pdf` is read as text
pub fn load_path(path: &Path) -> Result<Vec<Document>, LoaderError> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        load_pdf(path)
    } else {
        load_text(path)
    }
}

fn read(path: &Path) -> Result<Vec<u8>, LoaderError> {
    std::fs::read(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
