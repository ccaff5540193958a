use eframe::egui;
use tictactoe_common::log;
use tictactoe_common::tictactoe::{GameMode, GameResult, TicTacToeSession};

use crate::game_ui::{BoardView, TicTacToeBoardUi, mark_color};

pub struct TicTacToeApp {
    session: TicTacToeSession,
    board_ui: TicTacToeBoardUi,
    selected_mode: GameMode,
}

impl TicTacToeApp {
    pub fn new(session: TicTacToeSession) -> Self {
        let selected_mode = session.mode();
        Self {
            session,
            board_ui: TicTacToeBoardUi::new(),
            selected_mode,
        }
    }

    fn render_mode_selector(&mut self, ui: &mut egui::Ui) {
        egui::ComboBox::from_label("Mode")
            .selected_text(self.selected_mode.title())
            .show_ui(ui, |ui| {
                for mode in GameMode::ALL {
                    ui.selectable_value(&mut self.selected_mode, mode, mode.title());
                }
            });

        if self.selected_mode != self.session.mode() {
            log!("Switching mode to {}", self.selected_mode);
            self.session.set_mode(self.selected_mode);
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let text = egui::RichText::new(self.session.status_message()).size(20.0);
        let text = match self.session.result() {
            GameResult::Win(mark) => text.color(mark_color(mark)).strong(),
            GameResult::Tie => text.strong(),
            GameResult::InProgress => text.color(mark_color(self.session.current_mark())),
        };
        ui.label(text);
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let view = BoardView {
            board: self.session.board(),
            winning_line: self.session.winning_line(),
            last_move: self.session.last_move(),
            interactive: !self.session.is_over(),
        };

        if let Some(index) = self.board_ui.render(ui, view)
            && let Err(e) = self.session.play(index)
        {
            log!("Ignored click on cell {}: {}", index, e);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Tic Tac Toe");
                ui.separator();
                self.render_mode_selector(ui);
            });
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if ui.button("Restart").clicked() {
                    self.session.restart();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.render_status(ui);
                ui.add_space(8.0);
                self.render_board(ui);
            });
        });
    }
}
