//! Main application for the Gomoku GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::error;

use crate::board::Cell;
use crate::game::{Game, GamePhase, GameResult, GameSettings, TickOutcome, WinType};
use crate::game::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::player::PlayerKind;

use super::board_view::{BoardFrame, BoardView};
use super::theme::*;

/// Time spent driving the game per frame
const TICK_BUDGET: Duration = Duration::from_millis(8);

/// Main Gomoku application
pub struct GomokuApp {
    game: Option<Game>,
    /// Settings used for the next new game
    pending: GameSettings,
    board_view: BoardView,
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: GameSettings) -> Self {
        let mut app = Self {
            game: None,
            pending: settings,
            board_view: BoardView::default(),
            message: None,
        };
        app.new_game();
        app
    }

    /// Start a game with the pending settings, keeping the scores
    fn new_game(&mut self) {
        match Game::new(self.pending.clone()) {
            Ok(mut game) => {
                if let Some(old) = &self.game {
                    *game.scores_mut() = old.scores().clone();
                }
                self.game = Some(game);
                self.message = None;
            }
            Err(e) => {
                error!(error = %e, "failed to start game");
                self.message = Some(e.to_string());
            }
        }
    }

    fn restart(&mut self) {
        if let Some(game) = self.game.as_mut() {
            if let Err(e) = game.restart() {
                error!(error = %e, "failed to restart game");
                self.message = Some(e.to_string());
            }
        }
    }

    fn toggle_pause(&mut self) {
        if let Some(game) = self.game.as_mut() {
            if game.is_paused() {
                game.resume();
            } else {
                game.pause();
            }
        }
    }

    /// Tick the game for at most one budget. Returns whether work remains.
    fn drive_game(&mut self) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        let start = Instant::now();
        loop {
            match game.tick() {
                TickOutcome::Progressed if start.elapsed() >= TICK_BUDGET => return true,
                TickOutcome::Progressed => {}
                TickOutcome::AwaitingInput | TickOutcome::Stopped => return false,
            }
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Restart (R)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    let paused = self.game.as_ref().is_some_and(Game::is_paused);
                    if ui.button(if paused { "Resume (P)" } else { "Pause (P)" }).clicked() {
                        self.toggle_pause();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Clear Scores").clicked() {
                        if let Some(game) = self.game.as_mut() {
                            game.scores_mut().clear();
                        }
                        ui.close_menu();
                    }
                });

                ui.menu_button("Players", |ui| {
                    Self::player_choice(ui, "Player 1 (dark)", &mut self.pending.player1);
                    ui.separator();
                    Self::player_choice(ui, "Player 2 (light)", &mut self.pending.player2);
                });

                ui.menu_button("Rules", |ui| {
                    ui.checkbox(&mut self.pending.pair_check, "Pair capture");
                    ui.add_enabled(
                        self.pending.pair_check,
                        egui::Slider::new(&mut self.pending.pairs_to_win, 1..=10).text("pairs to win"),
                    );
                    ui.separator();
                    ui.add(egui::Slider::new(&mut self.pending.cols, MIN_GRID_SIZE..=MAX_GRID_SIZE).text("columns"));
                    ui.add(egui::Slider::new(&mut self.pending.rows, MIN_GRID_SIZE..=MAX_GRID_SIZE).text("rows"));
                    ui.label(RichText::new("Applies to the next new game").size(10.0).color(TEXT_MUTED));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(game) = &self.game {
                        ui.label(format!(
                            "{} vs {}",
                            game.player(Cell::Color1).name(),
                            game.player(Cell::Color2).name()
                        ));
                    }
                });
            });
        });
    }

    fn player_choice(ui: &mut egui::Ui, label: &str, choice: &mut PlayerKind) {
        ui.label(RichText::new(label).size(11.0).color(TEXT_MUTED));
        for kind in PlayerKind::ALL {
            ui.radio_value(choice, kind, kind.display_name())
                .on_hover_text(kind.description());
        }
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                Self::render_title_card(ui);
                ui.add_space(12.0);

                if let Some(game) = &self.game {
                    Self::render_turn_card(ui, game);
                    ui.add_space(10.0);

                    if game.rules().pair_check {
                        Self::render_captures_card(ui, game);
                        ui.add_space(10.0);
                    }

                    Self::render_scores_card(ui, game);

                    match game.phase() {
                        GamePhase::GameOver(result) => {
                            ui.add_space(10.0);
                            Self::render_game_over_card(ui, game, &result);
                        }
                        GamePhase::Tie => {
                            ui.add_space(10.0);
                            Self::render_message_card(ui, "Tie: the board is full");
                        }
                        GamePhase::InGame => {}
                    }
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(ui: &mut egui::Ui, game: &Game) {
        Self::card_frame().show(ui, |ui| {
            let color = game.current_color();
            let (accent, stone_color) = match color {
                Cell::Color1 => (DARK_STONE, DARK_STONE_HIGHLIGHT),
                _ => (LIGHT_STONE, LIGHT_STONE_SHADOW),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().circle_stroke(rect.center(), 22.0, egui::Stroke::new(2.0, stone_color));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(game.current_player().name())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if game.is_paused() {
                        ("Paused".to_string(), STATUS_PAUSED)
                    } else if !game.phase().is_running() {
                        ("Game Over".to_string(), STATUS_WIN)
                    } else if game.current_player().is_interactive() {
                        ("Your turn".to_string(), TEXT_SECONDARY)
                    } else {
                        (
                            format!("Thinking... {:.1}s", game.turn_elapsed().as_secs_f32()),
                            STATUS_THINKING,
                        )
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(last) = game.history().last() {
                ui.label(
                    RichText::new(format!("Last: {} in {:.2}s", last.pos, last.elapsed.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_captures_card(ui: &mut egui::Ui, game: &Game) {
        let goal = game.rules().pairs_to_win;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CAPTURED PAIRS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for color in [Cell::Color1, Cell::Color2] {
                let captured = game.pairs_captured(color);
                let text_color = if captured + 1 >= goal { STATUS_THINKING } else { TEXT_SECONDARY };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(game.player(color).name()).size(12.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{captured}/{goal}")).size(14.0).color(text_color));
                    });
                });
            }
        });
    }

    fn render_scores_card(ui: &mut egui::Ui, game: &Game) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            if game.scores().is_empty() {
                ui.label(RichText::new("No games recorded").size(11.0).color(TEXT_MUTED));
            }
            for (name, score) in game.scores().iter() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(name).size(12.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{} / {}", score.wins, score.total_games))
                                .size(12.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                });
            }
        });
    }

    fn render_game_over_card(ui: &mut egui::Ui, game: &Game, result: &GameResult) {
        let win_type = match result.win_type {
            WinType::FiveInRow => "five in a row".to_string(),
            WinType::Capture => format!("{} captured pairs", game.rules().pairs_to_win),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(game.player(result.winner).name())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("by {win_type}")).size(11.0).color(TEXT_SECONDARY));
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let Some(game) = self.game.as_mut() else {
                return;
            };

            let selected = {
                let frame = BoardFrame {
                    grid: game.grid(),
                    turn: game.current_color(),
                    last_move: game.last_move(),
                    winning_line: game.winning_line(),
                    accepts_input: game.phase().is_running()
                        && !game.is_paused()
                        && game.current_player().is_interactive(),
                };
                self.board_view.show(ui, &frame)
            };

            if let Some(pos) = selected {
                game.select_cell(pos);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, restart, pause) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::P),
            )
        });
        if new_game {
            self.new_game();
        }
        if restart {
            self.restart();
        }
        if pause {
            self.toggle_pause();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let busy = self.drive_game();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep ticking while a player works in the background
        if busy {
            ctx.request_repaint();
        } else if self.game.as_ref().is_some_and(|g| g.phase().is_running() && !g.is_paused()) {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
