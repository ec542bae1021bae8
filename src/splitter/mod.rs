mod recursive;

#[cfg(test)]
mod tests;

pub use recursive::{RecursiveSplitter, SplitterError, DEFAULT_SEPARATORS};
