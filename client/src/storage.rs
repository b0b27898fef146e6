//! Browser-backed custom word store
//!
//! Implements the core's `WordStore` contract over localStorage.
//! Storage failures (private browsing, quota, no window) degrade to
//! "no custom words saved" rather than erroring.

use scrabbler_core::log;
use scrabbler_core::WordStore;
use web_sys::Storage;

/// localStorage key holding the newline-delimited custom word list
pub const CUSTOM_WORDS_KEY: &str = "customWords";

/// `WordStore` over the browser's localStorage
#[derive(Debug, Default)]
pub struct LocalWordStore;

impl LocalWordStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl WordStore for LocalWordStore {
    fn get(&self) -> Option<String> {
        self.storage()?.get_item(CUSTOM_WORDS_KEY).ok().flatten()
    }

    fn set(&mut self, value: &str) {
        match self.storage() {
            Some(storage) => {
                if storage.set_item(CUSTOM_WORDS_KEY, value).is_err() {
                    log::warn("localStorage write failed, custom words not saved");
                }
            }
            None => log::warn("localStorage unavailable, custom words not saved"),
        }
    }

    fn clear(&mut self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(CUSTOM_WORDS_KEY);
        }
    }
}
