//! High score persistence in `localStorage`

use game_core::HighScoreStore;
use web_sys::Storage;

pub const HIGH_SCORE_KEY: &str = "highScore";

/// `localStorage`-backed store. Without storage access it behaves like an
/// empty store that forgets writes.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, high score will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScoreStore for LocalStorageStore {
    fn high_score(&self) -> u32 {
        let raw = self
            .storage
            .as_ref()
            .and_then(|s| s.get_item(HIGH_SCORE_KEY).ok().flatten());
        parse_high_score(raw.as_deref())
    }

    fn set_high_score(&mut self, score: u32) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(HIGH_SCORE_KEY, &score.to_string()) {
                log::warn!("Failed to save high score: {:?}", e);
            }
        }
    }
}

/// Stored value as a score; missing or garbage reads as 0
pub fn parse_high_score(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}
