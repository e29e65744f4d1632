/// Durable single-value store for the best score
pub trait HighScoreStore {
    /// Stored high score, 0 when nothing was saved yet
    fn high_score(&self) -> u32;
    fn set_high_score(&mut self, score: u32);
}

/// In-memory store, used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(score: u32) -> Self {
        Self { value: Some(score) }
    }
}

impl HighScoreStore for MemoryStore {
    fn high_score(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn set_high_score(&mut self, score: u32) {
        self.value = Some(score);
    }
}

/// Save `score` if it beats the stored value. Returns the high score to show.
pub fn record_high_score(store: &mut impl HighScoreStore, score: u32) -> u32 {
    let stored = store.high_score();
    if score > stored {
        store.set_high_score(score);
        score
    } else {
        stored
    }
}
