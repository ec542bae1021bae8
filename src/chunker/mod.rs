mod markers;
mod packer;
mod sample;


pub use markers::{scan_segments, MIN_SEGMENT_CHARS, SECTION_MARKERS};
pub use packer::{pack_segment, split_sentences};
pub use sample::SAMPLE_LATEX_DOCUMENT;

use crate::config::ChunkerConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Target characters per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Characters shared between neighbouring chunks (accepted, currently not applied)
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

/// Splits LaTeX source at sectioning commands, then packs oversized
/// sections sentence by sentence.
///
/// `chunk_overlap` is carried for API compatibility with other splitters
/// but does not change the output: consecutive chunks never share text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl LatexTextSplitter {
    /// `chunk_size` must be greater than zero.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split `text` into ordered chunks of at most `chunk_size` characters,
    /// except where a single sentence is longer than that.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        scan_segments(text)
            .into_iter()
            .flat_map(|segment| pack_segment(segment, self.chunk_size))
            .collect()
    }
}

impl Default for LatexTextSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

impl From<&ChunkerConfig> for LatexTextSplitter {
    fn from(config: &ChunkerConfig) -> Self {
        Self::new(config.chunk_size, config.chunk_overlap)
    }
}

/// One-shot form of [`LatexTextSplitter::split_text`]
pub fn split(text: &str, size_limit: usize, overlap: usize) -> Vec<String> {
    LatexTextSplitter::new(size_limit, overlap).split_text(text)
}

/// Split with the default limits and log every resulting chunk
pub fn split_latex_text(text: &str) -> Vec<String> {
    let splits = LatexTextSplitter::default().split_text(text);

    for (i, split) in splits.iter().enumerate() {
        debug!(index = i + 1, chars = split.chars().count(), "split: {}", split);
    }
    debug!("LaTeX text split into {} chunks", splits.len());

    splits
}
