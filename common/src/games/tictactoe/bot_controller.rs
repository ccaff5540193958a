use crate::debug_log;
use crate::games::SessionRng;
use super::board::Board;
use super::error::MoveError;
use super::types::{LINES, Mark};

/// Score of a position holding three X in a line; three O score the negation.
pub const WIN_SCORE: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotType {
    Random,
    Minimax,
}

/// Picks the next O move for a bot-controlled turn.
pub fn calculate_move(bot_type: BotType, board: &Board, rng: &mut SessionRng) -> Option<usize> {
    match bot_type {
        BotType::Random => choose_easy_move(board, rng).ok(),
        BotType::Minimax => choose_best_move(board, false),
    }
}

pub fn choose_easy_move(board: &Board, rng: &mut SessionRng) -> Result<usize, MoveError> {
    let available_moves = board.available_moves();
    rng.choose(&available_moves).ok_or(MoveError::NoMovesAvailable)
}

/// Exhaustive minimax over every open cell. `maximizing` searches for X,
/// otherwise for O. Equal scores keep the lowest index.
pub fn choose_best_move(board: &Board, maximizing: bool) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    let mark = mark_for(maximizing);
    let mut board = *board;
    let mut visited = 0u64;
    let mut best: Option<(usize, i32)> = None;

    for index in available_moves {
        board.set(index, mark);
        let score = search(&mut board, 0, !maximizing, &mut visited);
        board.set(index, Mark::Empty);

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((index, score));
        }
    }

    if let Some((index, score)) = best {
        debug_log!(
            "Minimax for {} picked cell {} with score {} after {} positions",
            mark,
            index,
            score,
            visited
        );
    }

    best.map(|(index, _)| index)
}

/// Scores `board` with `maximizing` telling which side moves next. The board
/// is left exactly as it was passed in.
pub fn minimax(board: &mut Board, depth: usize, maximizing: bool) -> i32 {
    let mut visited = 0u64;
    search(board, depth, maximizing, &mut visited)
}

fn search(board: &mut Board, depth: usize, maximizing: bool, visited: &mut u64) -> i32 {
    *visited += 1;

    let score = evaluate(board);
    let available_moves = board.available_moves();
    if score.abs() == WIN_SCORE || available_moves.is_empty() {
        return score;
    }

    let mark = mark_for(maximizing);

    if maximizing {
        let mut max_eval = i32::MIN;
        for index in available_moves {
            board.set(index, mark);
            let eval = search(board, depth + 1, false, visited);
            board.set(index, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in available_moves {
            board.set(index, mark);
            let eval = search(board, depth + 1, true, visited);
            board.set(index, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

/// Static score of a position: ±`WIN_SCORE` for a completed line (X lines are
/// checked first), otherwise +1 per X and -1 per O summed over all eight lines.
pub fn evaluate(board: &Board) -> i32 {
    let cells = board.cells();
    let has_line = |mark: Mark| {
        LINES
            .iter()
            .any(|line| line.cells().iter().all(|&index| cells[index] == mark))
    };

    if has_line(Mark::X) {
        return WIN_SCORE;
    }
    if has_line(Mark::O) {
        return -WIN_SCORE;
    }

    LINES
        .iter()
        .flat_map(|line| line.cells())
        .map(|index| match cells[index] {
            Mark::X => 1,
            Mark::O => -1,
            Mark::Empty => 0,
        })
        .sum()
}

fn mark_for(maximizing: bool) -> Mark {
    if maximizing { Mark::X } else { Mark::O }
}
