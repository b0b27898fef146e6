mod claim;
mod words;

use alloc::string::{String, ToString};

use crate::rng::XorShiftRng;
use crate::words::WordStore;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

/// In-memory word store standing in for the browser's localStorage
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub value: Option<String>,
}

impl WordStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }

    fn clear(&mut self) {
        self.value = None;
    }
}

/// Store preloaded with newline-delimited custom words
pub fn store_with(words: &[&str]) -> MemoryStore {
    MemoryStore {
        value: Some(words.join("\n")),
    }
}

/// Store with no custom words saved
pub fn empty_store() -> MemoryStore {
    MemoryStore::default()
}

pub fn rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}
