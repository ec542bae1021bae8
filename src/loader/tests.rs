use super::pdf::split_pages;
use super::*;
use std::io::Write;

#[test]
fn test_load_text_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "No smoking on company premises.").unwrap();

    let docs = load_path(file.path()).unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].page_content, "No smoking on company premises.");
    assert_eq!(docs[0].metadata.page, None);
    assert_eq!(docs[0].metadata.source, file.path().display().to_string());
}

#[test]
fn test_load_missing_file() {
    let result = load_text(Path::new("/nonexistent/policies.txt"));
    assert!(matches!(result, Err(LoaderError::Io { .. })));
}

#[test]
fn test_invalid_pdf_bytes() {
    let result = load_pdf_bytes(b"definitely not a pdf", "upload.pdf");
    assert!(result.is_err());
}

#[tokio::test]
async fn test_pdf_upload_reports_errors() {
    let result = load_pdf_upload(b"%PDF-1.4 truncated".to_vec(), "upload.pdf".to_string()).await;
    assert!(result.is_err());
}

#[test]
fn test_extractor_error_message() {
    let err = LoaderError::Extractor {
        source_name: "broken.pdf".to_string(),
        message: "task 7 panicked".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "PDF extractor crashed on broken.pdf: task 7 panicked"
    );
}

#[test]
fn test_pdf_extension_dispatch() {
    let mut file = tempfile::Builder::new().suffix(".PDF").tempfile().unwrap();
    write!(file, "plain text pretending to be a pdf").unwrap();

    // routed to the PDF loader, which rejects it
    let result = load_path(file.path());
    assert!(!matches!(result, Err(LoaderError::Io { .. })) && result.is_err());
}

#[test]
fn test_split_pages_keeps_page_index() {
    let docs = split_pages("page one\x0c\x0cpage three\x0c", "paper.pdf");

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].page_content, "page one");
    assert_eq!(docs[0].metadata.page, Some(0));
    assert_eq!(docs[1].page_content, "page three");
    assert_eq!(docs[1].metadata.page, Some(2));
    assert_eq!(docs[1].metadata.source, "paper.pdf");
}

#[test]
fn test_preview_truncates_by_characters() {
    let docs = vec![
        Document::from_text("αβγ", "a.txt"),
        Document::from_text("δεζ", "b.txt"),
    ];

    assert_eq!(concat_content(&docs), "αβγδεζ");
    assert_eq!(preview(&docs, 4), "αβγδ");
    assert_eq!(preview(&docs, PREVIEW_CHARS), "αβγδεζ");
}
