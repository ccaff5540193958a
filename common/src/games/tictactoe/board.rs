use super::error::{InvalidMoveReason, MoveError};
use super::types::{CELL_COUNT, GameResult, LINES, Line, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells without checking that the position is
    /// reachable in a real game.
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if mark == Mark::Empty {
            return Err(MoveError::InvalidMove {
                index,
                reason: InvalidMoveReason::EmptyMark,
            });
        }

        match self.cells.get(index) {
            None => Err(MoveError::InvalidMove {
                index,
                reason: InvalidMoveReason::OutOfRange,
            }),
            Some(&Mark::Empty) => {
                self.cells[index] = mark;
                Ok(())
            }
            Some(&occupied) => Err(MoveError::InvalidMove {
                index,
                reason: InvalidMoveReason::Occupied(occupied),
            }),
        }
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.cells.get(index) == Some(&Mark::Empty)
    }

    pub fn evaluate_result(&self) -> GameResult {
        if let Some(line) = self.winning_line() {
            return GameResult::Win(self.cells[line.0[0]]);
        }

        if self.is_full() {
            GameResult::Tie
        } else {
            GameResult::InProgress
        }
    }

    /// First line, in row/column/diagonal order, holding three equal marks.
    pub fn winning_line(&self) -> Option<Line> {
        LINES.iter().copied().find(|line| {
            let [a, b, c] = line.0;
            let mark = self.cells[a];
            mark != Mark::Empty && mark == self.cells[b] && mark == self.cells[c]
        })
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn has_available_moves(&self) -> bool {
        self.cells.iter().any(Mark::is_empty)
    }

    pub fn is_full(&self) -> bool {
        !self.has_available_moves()
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    /// Overwrites a cell without validation. Search code uses this to place
    /// and take back tentative marks.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            writeln!(f, "{}|{}|{}", chunk[0], chunk[1], chunk[2])?;
        }
        Ok(())
    }
}
