//! Session controller - game lifecycle and the persisted high score
//!
//! Loads the high score once on construction and writes it back whenever a placement
//! reports a new best. Storage problems never reach gameplay: a failed load counts as
//! "no high score" and a failed save is logged and dropped.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::core::{GameEngine, PlacementError, PlacementResult};
use crate::store::ScoreStore;

pub struct Session<S, R = StdRng> {
    engine: GameEngine<R>,
    store: S,
    key: String,
}

impl<S: ScoreStore> Session<S, StdRng> {
    /// Open a session; seeded from `config.seed` or from OS entropy
    pub fn new(store: S, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_engine(store, GameEngine::with_rng(rng), config.high_score_key)
    }
}

impl<S: ScoreStore, R: Rng> Session<S, R> {
    /// Wrap an existing engine, loading the stored high score into it
    pub fn with_engine(store: S, mut engine: GameEngine<R>, key: impl Into<String>) -> Self {
        let key = key.into();
        let high_score = load_high_score(&store, &key);
        engine.set_high_score(high_score);
        info!(high_score, "session opened");
        Self { engine, store, key }
    }

    /// Reset the grid, score and offered blocks; the high score carries over
    pub fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Forward a placement to the engine, persisting a new high score
    pub fn attempt_placement(
        &mut self,
        block_index: usize,
        row: i32,
        col: i32,
    ) -> Result<PlacementResult, PlacementError> {
        let result = self.engine.attempt_placement(block_index, row, col)?;
        if result.new_high_score {
            self.save_high_score(result.high_score);
        }
        Ok(result)
    }

    fn save_high_score(&mut self, value: u32) {
        if let Err(err) = self.store.set(&self.key, value) {
            warn!(key = %self.key, error = %err, "failed to save high score");
        }
    }

    pub fn current_high_score(&self) -> u32 {
        self.engine.high_score()
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn load_high_score<S: ScoreStore>(store: &S, key: &str) -> u32 {
    match store.get(key) {
        Ok(value) => value.unwrap_or(0),
        Err(err) => {
            warn!(key, error = %err, "failed to load high score");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn stored_high_score_is_loaded() {
        let mut store = MemoryStore::new();
        store.set("best", 700).unwrap();
        let session = Session::new(
            store,
            SessionConfig {
                seed: Some(3),
                high_score_key: "best".to_string(),
            },
        );
        assert_eq!(session.current_high_score(), 700);
        assert_eq!(session.engine().high_score(), 700);
    }

    #[test]
    fn missing_high_score_starts_at_zero() {
        let session = Session::new(MemoryStore::new(), SessionConfig::with_seed(3));
        assert_eq!(session.current_high_score(), 0);
    }
}
