mod client_config;
mod game_config;
mod logging_config;
mod window_config;

pub use client_config::{ClientConfig, get_config_manager};
pub use game_config::GameConfig;
pub use logging_config::LoggingConfig;
pub use window_config::WindowConfig;
