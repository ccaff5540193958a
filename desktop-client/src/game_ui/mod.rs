use eframe::egui;
use tictactoe_common::tictactoe::{BOARD_SIZE, Board, Line, Mark, Position};

/// Maps a pointer position inside `board_rect` to a cell index.
pub fn cell_at(pointer: egui::Pos2, board_rect: egui::Rect) -> Option<usize> {
    if !board_rect.contains(pointer) {
        return None;
    }
    let cell_width = board_rect.width() / BOARD_SIZE as f32;
    let cell_height = board_rect.height() / BOARD_SIZE as f32;
    let col = ((pointer.x - board_rect.left()) / cell_width) as usize;
    let row = ((pointer.y - board_rect.top()) / cell_height) as usize;
    Some(Position::new(row.min(BOARD_SIZE - 1), col.min(BOARD_SIZE - 1)).to_index())
}

pub fn cell_rect(index: usize, board_rect: egui::Rect) -> egui::Rect {
    let position = Position::from_index(index);
    let cell_size = egui::vec2(
        board_rect.width() / BOARD_SIZE as f32,
        board_rect.height() / BOARD_SIZE as f32,
    );
    egui::Rect::from_min_size(
        egui::pos2(
            board_rect.left() + position.col as f32 * cell_size.x,
            board_rect.top() + position.row as f32 * cell_size.y,
        ),
        cell_size,
    )
}

pub fn mark_color(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::X => egui::Color32::from_rgb(40, 80, 220),
        Mark::O => egui::Color32::from_rgb(220, 50, 50),
        Mark::Empty => egui::Color32::BLACK,
    }
}

pub struct BoardView<'a> {
    pub board: &'a Board,
    pub winning_line: Option<Line>,
    pub last_move: Option<usize>,
    pub interactive: bool,
}

#[derive(Default)]
pub struct TicTacToeBoardUi {
    hovered: Option<usize>,
}

impl TicTacToeBoardUi {
    const BOARD_PADDING: f32 = 16.0;
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { hovered: None }
    }

    fn calculate_cell_size(available: egui::Vec2) -> f32 {
        let usable = available.x.min(available.y) - Self::BOARD_PADDING * 2.0;
        (usable / BOARD_SIZE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Draws the board and returns the empty cell the user clicked, if any.
    pub fn render(&mut self, ui: &mut egui::Ui, view: BoardView<'_>) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_size());
        let side = cell_size * BOARD_SIZE as f32;

        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(line) = view.winning_line {
            for index in line.cells() {
                painter.rect_filled(
                    cell_rect(index, rect),
                    0.0,
                    egui::Color32::from_rgb(200, 240, 200),
                );
            }
        } else if let Some(index) = view.last_move {
            painter.rect_filled(
                cell_rect(index, rect),
                0.0,
                egui::Color32::from_rgb(250, 245, 215),
            );
        }

        self.hovered = None;
        if view.interactive
            && let Some(pointer) = response.hover_pos()
            && let Some(index) = cell_at(pointer, rect)
            && view.board.is_valid_move(index)
        {
            painter.rect_filled(
                cell_rect(index, rect),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
            self.hovered = Some(index);
        }

        let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * cell_size;
            let x = rect.left() + offset;
            let y = rect.top() + offset;
            painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
            painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        }

        for (index, &mark) in view.board.cells().iter().enumerate() {
            let cell = cell_rect(index, rect);
            match mark {
                Mark::X => Self::draw_x(painter, cell),
                Mark::O => Self::draw_o(painter, cell),
                Mark::Empty => {}
            }
        }

        if response.clicked() {
            self.hovered
        } else {
            None
        }
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, mark_color(Mark::X));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = rect.width() / 2.0 - padding;
        painter.circle_stroke(rect.center(), radius, egui::Stroke::new(4.0, mark_color(Mark::O)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_at_corners_and_center() {
        let rect = board_rect();
        assert_eq!(cell_at(egui::pos2(15.0, 25.0), rect), Some(0));
        assert_eq!(cell_at(egui::pos2(305.0, 25.0), rect), Some(2));
        assert_eq!(cell_at(egui::pos2(160.0, 170.0), rect), Some(4));
        assert_eq!(cell_at(egui::pos2(15.0, 315.0), rect), Some(6));
        assert_eq!(cell_at(egui::pos2(309.0, 319.0), rect), Some(8));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let rect = board_rect();
        assert_eq!(cell_at(egui::pos2(5.0, 25.0), rect), None);
        assert_eq!(cell_at(egui::pos2(100.0, 400.0), rect), None);
    }

    #[test]
    fn test_cell_at_far_edge_stays_in_range() {
        let rect = board_rect();
        assert_eq!(cell_at(rect.max, rect), Some(8));
    }

    #[test]
    fn test_cell_rect_round_trips_through_cell_at() {
        let rect = board_rect();
        for index in 0..9 {
            assert_eq!(cell_at(cell_rect(index, rect).center(), rect), Some(index));
        }
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(TicTacToeBoardUi::calculate_cell_size(egui::vec2(50.0, 50.0)), 40.0);
        assert_eq!(TicTacToeBoardUi::calculate_cell_size(egui::vec2(2000.0, 2000.0)), 140.0);
        assert_eq!(TicTacToeBoardUi::calculate_cell_size(egui::vec2(332.0, 500.0)), 100.0);
    }
}
