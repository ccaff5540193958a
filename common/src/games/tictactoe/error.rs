use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied(Mark),
    EmptyMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidMove { index: usize, reason: InvalidMoveReason },
    NoMovesAvailable,
    GameOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidMove { index, reason } => match reason {
                InvalidMoveReason::OutOfRange => {
                    write!(f, "Invalid move: cell {} is out of range", index)
                }
                InvalidMoveReason::Occupied(mark) => {
                    write!(f, "Invalid move: cell {} is already marked {}", index, mark)
                }
                InvalidMoveReason::EmptyMark => {
                    write!(f, "Invalid move: cannot place an empty mark at cell {}", index)
                }
            },
            MoveError::NoMovesAvailable => write!(f, "No moves available"),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}
