use super::markers::char_len;
use regex::Regex;
use std::sync::LazyLock;

/// Sentence terminator followed by the whitespace run that separates it from the next sentence
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern is a valid regex"));

/// Split text after every `.`, `!` or `?` that is followed by whitespace
///
/// The separating whitespace is dropped. Text ending in such a run yields a
/// trailing empty sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut cursor = 0;

    for found in SENTENCE_END.find_iter(text) {
        // terminators are ASCII, so the sentence ends one byte into the match
        let end = found.start() + 1;
        sentences.push(&text[cursor..end]);
        cursor = found.end();
    }
    sentences.push(&text[cursor..]);

    sentences
}

/// Bound a raw segment to `size_limit` characters
///
/// Segments that already fit are returned untouched. Larger ones are split
/// into sentences and packed greedily; a sentence that alone exceeds the
/// limit becomes its own oversized chunk.
pub fn pack_segment(segment: &str, size_limit: usize) -> Vec<String> {
    if char_len(segment) <= size_limit {
        return vec![segment.to_string()];
    }

    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0;

    for sentence in split_sentences(segment) {
        let sentence_len = char_len(sentence);

        if buffer_len + sentence_len > size_limit {
            flush(&mut chunks, &buffer);
            buffer.clear();
            buffer_len = 0;
        }

        buffer.push_str(sentence);
        buffer.push(' ');
        buffer_len += sentence_len + 1;
    }

    flush(&mut chunks, &buffer);
    chunks
}

fn flush(chunks: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
