use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::calculate_move;
use super::error::MoveError;
use super::settings::GameMode;
use super::types::{GameResult, Line, Mark};

/// What a single `play` call changed, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub human_move: usize,
    pub bot_move: Option<usize>,
    pub result: GameResult,
}

/// One game of tic-tac-toe: board, turn, mode and bot randomness. In bot
/// modes the human always plays X and the bot answers with O inside `play`.
pub struct TicTacToeSession {
    board: Board,
    current_mark: Mark,
    mode: GameMode,
    result: GameResult,
    last_move: Option<usize>,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(mode: GameMode, rng: SessionRng) -> Self {
        log!("New {} game (seed {})", mode, rng.seed());
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            mode,
            result: GameResult::InProgress,
            last_move: None,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self.result {
            GameResult::Win(_) => self.board.winning_line(),
            _ => None,
        }
    }

    pub fn play(&mut self, index: usize) -> Result<TurnOutcome, MoveError> {
        if self.is_over() {
            log!("Rejected move at cell {}: game is over", index);
            return Err(MoveError::GameOver);
        }

        let mark = self.current_mark;
        if let Err(e) = self.place(index, mark) {
            log!("Rejected move by {}: {}", mark, e);
            return Err(e);
        }

        let mut outcome = TurnOutcome {
            human_move: index,
            bot_move: None,
            result: self.result,
        };

        if self.is_over() {
            return Ok(outcome);
        }

        match self.mode.bot_type() {
            None => self.switch_turn(),
            Some(bot_type) => {
                let bot_move = calculate_move(bot_type, &self.board, &mut self.rng)
                    .ok_or(MoveError::NoMovesAvailable)?;
                self.place(bot_move, Mark::O)?;
                outcome.bot_move = Some(bot_move);
                outcome.result = self.result;
            }
        }

        Ok(outcome)
    }

    fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        self.board.apply_move(index, mark)?;
        self.last_move = Some(index);
        log!("{} played cell {}", mark, index);

        self.result = self.board.evaluate_result();
        match self.result {
            GameResult::Win(winner) => log!("Player {} wins", winner),
            GameResult::Tie => log!("Game ended in a tie"),
            GameResult::InProgress => {}
        }
        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X { Mark::O } else { Mark::X };
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.result = GameResult::InProgress;
        self.last_move = None;
        log!("Game restarted ({})", self.mode);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
    }

    pub fn status_message(&self) -> String {
        match self.result {
            GameResult::InProgress => format!("Player {}'s turn", self.current_mark),
            GameResult::Win(winner) => format!("Player {} wins!", winner),
            GameResult::Tie => "It's a tie!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: GameMode) -> TicTacToeSession {
        TicTacToeSession::new(mode, SessionRng::new(5))
    }

    #[test]
    fn test_two_players_alternate() {
        let mut session = session(GameMode::TwoPlayers);
        assert_eq!(session.current_mark(), Mark::X);
        assert_eq!(session.status_message(), "Player X's turn");

        let outcome = session.play(4).unwrap();
        assert_eq!(outcome.bot_move, None);
        assert_eq!(outcome.result, GameResult::InProgress);
        assert_eq!(session.current_mark(), Mark::O);
        assert_eq!(session.status_message(), "Player O's turn");
        assert_eq!(session.board().cell(4), Some(Mark::X));

        session.play(0).unwrap();
        assert_eq!(session.board().cell(0), Some(Mark::O));
        assert_eq!(session.current_mark(), Mark::X);
        assert_eq!(session.last_move(), Some(0));
    }

    #[test]
    fn test_two_players_column_win() {
        let mut session = session(GameMode::TwoPlayers);
        for index in [0, 1, 3, 4] {
            session.play(index).unwrap();
        }
        let outcome = session.play(6).unwrap();
        assert_eq!(outcome.result, GameResult::Win(Mark::X));
        assert_eq!(session.status_message(), "Player X wins!");
        assert_eq!(session.winning_line(), Some(Line([0, 3, 6])));
        assert!(session.is_over());
    }

    #[test]
    fn test_tie_message() {
        let mut session = session(GameMode::TwoPlayers);
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.play(index).unwrap();
        }
        assert_eq!(session.result(), GameResult::Tie);
        assert_eq!(session.status_message(), "It's a tie!");
        assert_eq!(session.winning_line(), None);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut session = session(GameMode::TwoPlayers);
        for index in [0, 1, 3, 4, 6] {
            session.play(index).unwrap();
        }
        let board = *session.board();
        assert_eq!(session.play(8), Err(MoveError::GameOver));
        assert_eq!(*session.board(), board);
    }

    #[test]
    fn test_invalid_move_keeps_turn() {
        let mut session = session(GameMode::TwoPlayers);
        session.play(4).unwrap();
        assert!(matches!(session.play(4), Err(MoveError::InvalidMove { index: 4, .. })));
        assert!(matches!(session.play(12), Err(MoveError::InvalidMove { index: 12, .. })));
        assert_eq!(session.current_mark(), Mark::O);
        assert_eq!(session.board().marked_count(), 1);
    }

    #[test]
    fn test_bot_answers_each_human_move() {
        for mode in [GameMode::AiEasy, GameMode::AiHard] {
            let mut session = session(mode);
            let outcome = session.play(0).unwrap();
            let bot_move = outcome.bot_move.unwrap();
            assert_ne!(bot_move, 0);
            assert_eq!(session.board().cell(bot_move), Some(Mark::O));
            assert_eq!(session.current_mark(), Mark::X);
            assert_eq!(session.board().count(Mark::X), 1);
            assert_eq!(session.board().count(Mark::O), 1);
        }
    }

    #[test]
    fn test_hard_bot_blocks() {
        let mut session = session(GameMode::AiHard);
        let first = session.play(0).unwrap().bot_move.unwrap();
        assert_eq!(first, 4);
        let second = session.play(1).unwrap().bot_move.unwrap();
        assert_eq!(second, 2);
    }

    #[test]
    fn test_no_bot_move_after_human_wins() {
        let mut session = session_with_board(GameMode::AiEasy, [0, 1], [3, 4]);
        let outcome = session.play(2).unwrap();
        assert_eq!(outcome.result, GameResult::Win(Mark::X));
        assert_eq!(outcome.bot_move, None);
    }

    fn session_with_board(mode: GameMode, xs: [usize; 2], os: [usize; 2]) -> TicTacToeSession {
        let mut session = session(mode);
        for (x, o) in xs.into_iter().zip(os) {
            session.board.apply_move(x, Mark::X).unwrap();
            session.board.apply_move(o, Mark::O).unwrap();
        }
        session
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = session(GameMode::TwoPlayers);
        for index in [0, 1, 3, 4, 6] {
            session.play(index).unwrap();
        }
        session.restart();
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.result(), GameResult::InProgress);
        assert_eq!(session.current_mark(), Mark::X);
        assert_eq!(session.last_move(), None);
        assert!(session.play(0).is_ok());
    }

    #[test]
    fn test_set_mode_restarts() {
        let mut session = session(GameMode::TwoPlayers);
        session.play(4).unwrap();
        session.set_mode(GameMode::AiHard);
        assert_eq!(session.mode(), GameMode::AiHard);
        assert_eq!(session.board().marked_count(), 0);
        assert_eq!(session.current_mark(), Mark::X);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = session(GameMode::TwoPlayers);
        let b = session(GameMode::TwoPlayers);
        a.play(4).unwrap();
        assert_eq!(a.board().marked_count(), 1);
        assert_eq!(b.board().marked_count(), 0);
    }
}
