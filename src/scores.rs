//! Best/last score bookkeeping
//!
//! Persisted to LocalStorage on the web so the menu can show scores across
//! page loads. Native builds keep the bookkeeping in memory only.

use serde::{Deserialize, Serialize};

use crate::sim::state::Score;

/// The two scores the menu displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub best: Option<Score>,
    pub last: Option<Score>,
}

impl ScoreBoard {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flap_gap_scores";

    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished run's score into the board
    pub fn record(&mut self, score: Score) {
        self.last = Some(score);
        self.best = Some(self.best.map_or(score, |b| b.max(score)));
    }

    /// Load scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str(&json) {
                    log::info!("loaded scores from LocalStorage");
                    return scores;
                }
            }
        }

        log::info!("no stored scores, starting fresh");
        Self::new()
    }

    /// Save scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("scores saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_first_score() {
        let mut board = ScoreBoard::new();
        board.record(3);
        assert_eq!(board.last, Some(3));
        assert_eq!(board.best, Some(3));
    }

    #[test]
    fn test_record_keeps_best() {
        let mut board = ScoreBoard::new();
        board.record(5);
        board.record(2);
        assert_eq!(board.last, Some(2));
        assert_eq!(board.best, Some(5));

        board.record(9);
        assert_eq!(board.last, Some(9));
        assert_eq!(board.best, Some(9));
    }

    #[test]
    fn test_zero_score_still_recorded() {
        let mut board = ScoreBoard::new();
        board.record(0);
        assert_eq!(board.last, Some(0));
        assert_eq!(board.best, Some(0));
    }
}
