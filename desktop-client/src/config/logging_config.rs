use tictactoe_common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub use_prefix: bool,
    pub verbose: bool,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
