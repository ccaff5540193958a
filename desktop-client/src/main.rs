mod config;
mod game_ui;
mod ui;

use std::path::PathBuf;
use clap::Parser;
use eframe::egui;
use tictactoe_common::games::SessionRng;
use tictactoe_common::logger::{self, LoggerOptions};
use tictactoe_common::log;
use tictactoe_common::tictactoe::{GameMode, TicTacToeSession};

use config::{ClientConfig, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    /// two-players, ai-easy or ai-hard
    #[arg(long)]
    mode: Option<GameMode>,

    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Print the effective config as YAML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ClientConfig) {
        if let Some(mode) = self.mode {
            config.game.mode = mode;
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        config.logging.use_prefix |= self.use_log_prefix;
        config.logging.verbose |= self.verbose;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);

    if args.print_config {
        print!("{}", config_manager.render(&config)?);
        return Ok(());
    }

    logger::init_logger(LoggerOptions {
        prefix: config.logging.use_prefix.then(|| "Client".to_string()),
        verbose: config.logging.verbose,
    });

    let session = TicTacToeSession::new(
        config.game.mode,
        SessionRng::from_optional_seed(config.game.seed),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(session)))),
    )?;

    log!("Window closed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from([
            "tictactoe_client",
            "--mode",
            "ai-hard",
            "--seed",
            "3",
            "--verbose",
        ]);
        let mut config = ClientConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.game.mode, GameMode::AiHard);
        assert_eq!(config.game.seed, Some(3));
        assert!(config.logging.verbose);
        assert!(!config.logging.use_prefix);
    }

    #[test]
    fn test_missing_args_keep_config() {
        let args = Args::parse_from(["tictactoe_client"]);
        let mut config = ClientConfig::default();
        config.game.mode = GameMode::AiEasy;
        config.logging.use_prefix = true;
        args.apply_to(&mut config);
        assert_eq!(config.game.mode, GameMode::AiEasy);
        assert!(config.logging.use_prefix);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["tictactoe_client", "--mode", "chess"]).is_err());
    }
}
