use regex::Regex;
use std::sync::LazyLock;

/// LaTeX commands treated as structural boundaries, in scan order.
///
/// The order matters: every occurrence of one marker is visited before the
/// next marker is considered, so boundaries are recorded by marker type and
/// not by position in the document.
pub const SECTION_MARKERS: [&str; 8] = [
    r"\section{",
    r"\subsection{",
    r"\subsubsection{",
    r"\paragraph{",
    r"\subparagraph{",
    r"\begin{document}",
    r"\end{document}",
    r"\maketitle",
];

/// Gaps of this many characters or fewer are never emitted as segments.
pub const MIN_SEGMENT_CHARS: usize = 10;

static MARKER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SECTION_MARKERS
        .iter()
        .map(|marker| Regex::new(&regex::escape(marker)).expect("escaped literal is a valid regex"))
        .collect()
});

/// Cut a document into raw segments at LaTeX sectioning markers
///
/// `last_end` follows every marker occurrence, including ones that sit
/// before the current position, so a later marker type can move it
/// backwards and the next segment may repeat text already emitted.
pub fn scan_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for pattern in MARKER_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            let start = found.start();
            if start > last_end && char_len(&text[last_end..start]) > MIN_SEGMENT_CHARS {
                segments.push(&text[last_end..start]);
            }
            last_end = start;
        }
    }

    if last_end < text.len() {
        segments.push(&text[last_end..]);
    }

    segments
}

/// Length in characters, which is what every size threshold is measured in
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
