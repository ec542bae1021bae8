// batcher.rs - keeps each request under the model's batch limit

pub struct Batcher {
    pub batch_size: usize,
}

impl Batcher {
    /// A zero batch size is treated as one so every item still gets sent.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn split<'a>(&self, items: &'a [String]) -> Vec<&'a [String]> {
        items.chunks(self.batch_size).collect()
    }
}
