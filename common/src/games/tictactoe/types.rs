use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Every index triple that wins the game: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

/// Cell content. `X` is the player mark: it moves first and is the side the
/// search maximizes for. `O` is the opponent mark, played by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => " ",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(Mark),
    Tie,
}

impl GameResult {
    pub fn is_terminal(&self) -> bool {
        *self != GameResult::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

/// Three cell indices that form a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line(pub [usize; 3]);

impl Line {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_is_row_major() {
        assert_eq!(Position::new(0, 0).to_index(), 0);
        assert_eq!(Position::new(1, 2).to_index(), 5);
        assert_eq!(Position::new(2, 0).to_index(), 6);
        assert_eq!(Position::from_index(7), Position::new(2, 1));
    }

    #[test]
    fn test_every_cell_is_covered_by_some_line() {
        for index in 0..CELL_COUNT {
            assert!(LINES.iter().any(|line| line.contains(index)));
        }
    }

    #[test]
    fn test_center_belongs_to_four_lines() {
        let count = LINES.iter().filter(|line| line.contains(4)).count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }
}
