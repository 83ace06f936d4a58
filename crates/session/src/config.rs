//! Session configuration

use serde::Deserialize;

use crate::types::HIGH_SCORE_KEY;

/// Options that shape a play session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Fixed RNG seed; every game of the session is reproducible when set
    pub seed: Option<u64>,
    /// Key the high score is stored under
    pub high_score_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            high_score_key: HIGH_SCORE_KEY.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
