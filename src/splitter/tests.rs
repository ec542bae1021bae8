use super::*;
use crate::config::SplitterConfig;
use crate::loader::{Document, DocumentMetadata};

#[test]
fn test_merges_words_up_to_limit() {
    let splitter = RecursiveSplitter::new(10, 0).unwrap();
    let chunks = splitter.split_text("aaaa bbbb cccc");

    assert_eq!(chunks, vec!["aaaa bbbb", "cccc"]);
}

#[test]
fn test_overlap_repeats_tail() {
    let splitter = RecursiveSplitter::new(10, 5).unwrap();
    let chunks = splitter.split_text("aaaa bbbb cccc");

    assert_eq!(chunks, vec!["aaaa bbbb", "bbbb cccc"]);
}

#[test]
fn test_prefers_paragraph_breaks() {
    let splitter = RecursiveSplitter::new(100, 10).unwrap();
    let chunks = splitter.split_text("para one\n\npara two");

    assert_eq!(chunks, vec!["para one\n\npara two"]);
}

#[test]
fn test_falls_back_to_characters() {
    let splitter = RecursiveSplitter::new(5, 0).unwrap();
    let chunks = splitter.split_text("abcdefghijkl");

    assert_eq!(chunks, vec!["abcde", "fghij", "kl"]);
}

#[test]
fn test_chunks_respect_size() {
    let text = (0..200)
        .map(|i| format!("Policy line {} covers email and smoking rules.", i))
        .collect::<Vec<_>>()
        .join("\n");
    let splitter = RecursiveSplitter::from_config(&SplitterConfig::default()).unwrap();

    let chunks = splitter.split_text(&text);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 1000);
        assert!(!chunk.is_empty());
    }
}

#[test]
fn test_empty_text() {
    let splitter = RecursiveSplitter::new(10, 2).unwrap();
    assert!(splitter.split_text("").is_empty());
    assert!(splitter.split_text("   \n\n  ").is_empty());
}

#[test]
fn test_rejects_bad_limits() {
    assert_eq!(
        RecursiveSplitter::new(0, 0).unwrap_err(),
        SplitterError::ZeroChunkSize
    );
    assert_eq!(
        RecursiveSplitter::new(100, 100).unwrap_err(),
        SplitterError::OverlapTooLarge {
            overlap: 100,
            size: 100
        }
    );
}

#[test]
fn test_split_documents_copies_metadata() {
    let splitter = RecursiveSplitter::new(10, 0).unwrap();
    let docs = vec![Document::new(
        "aaaa bbbb cccc",
        DocumentMetadata {
            source: "paper.pdf".to_string(),
            page: Some(3),
        },
    )];

    let chunks = splitter.split_documents(&docs);

    assert_eq!(chunks.len(), 2);
    for chunk in &chunks {
        assert_eq!(chunk.metadata.source, "paper.pdf");
        assert_eq!(chunk.metadata.page, Some(3));
    }
}
