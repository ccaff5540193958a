use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::GameMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Fixed seed for the easy bot; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
