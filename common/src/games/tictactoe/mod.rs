mod board;
mod bot_controller;
mod error;
mod session;
mod settings;
mod types;

pub use board::Board;
pub use bot_controller::{
    BotType, WIN_SCORE, calculate_move, choose_best_move, choose_easy_move, evaluate, minimax,
};
pub use error::{InvalidMoveReason, MoveError};
pub use session::{TicTacToeSession, TurnOutcome};
pub use settings::GameMode;
pub use types::{BOARD_SIZE, CELL_COUNT, GameResult, LINES, Line, Mark, Position};
