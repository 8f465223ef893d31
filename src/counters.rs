//! Per-key counters for numbered extension blocks.
//!
//! Numbering for native LaTeX environments is LaTeX's own business;
//! this exists for extension block types that number themselves in the
//! source text. The caller owns the instance; nothing here is global.

use fxhash::FxHashMap;

#[derive(Debug, Default)]
pub struct Counters {
    counts: FxHashMap<String, u32>,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next value for `key`, starting at 1.
    pub fn next_count(&mut self, key: &str) -> u32 {
        let entry = self.counts.entry(key.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }
}
