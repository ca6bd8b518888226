//! Board rendering and input for the Gomoku GUI

use egui::{Color32, CornerRadius, Key, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Cell, Grid, Pos};

use super::theme::*;

/// Keyboard cursor, wraps around at the grid borders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub pos: Pos,
}

impl Cursor {
    pub fn centered(cols: usize, rows: usize) -> Self {
        Self {
            pos: Pos::new(cols / 2, rows / 2),
        }
    }

    /// Move one cell in direction (dx, dy)
    pub fn step(&mut self, dx: i32, dy: i32, cols: usize, rows: usize) {
        let wrap = |value: usize, delta: i32, bound: usize| {
            (value as i64 + i64::from(delta)).rem_euclid(bound as i64) as usize
        };
        self.pos = Pos::new(wrap(self.pos.col, dx, cols), wrap(self.pos.row, dy, rows));
    }

    /// Keep the cursor inside a grid that may have shrunk
    pub fn clamp(&mut self, cols: usize, rows: usize) {
        self.pos = Pos::new(
            self.pos.col.min(cols.saturating_sub(1)),
            self.pos.row.min(rows.saturating_sub(1)),
        );
    }
}

/// What the board should show this frame
pub struct BoardFrame<'a> {
    pub grid: &'a Grid,
    /// Color of the player on turn
    pub turn: Cell,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
    /// Selections are forwarded to an interactive player
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    cols: usize,
    rows: usize,
    cursor: Cursor,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            cols: 0,
            rows: 0,
            cursor: Cursor::centered(0, 0),
        }
    }
}

impl BoardView {
    /// Render the board and return the selected cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Pos> {
        let grid = frame.grid;
        if (self.cols, self.rows) != (grid.cols(), grid.rows()) {
            self.cols = grid.cols();
            self.rows = grid.rows();
            self.cursor.clamp(self.cols, self.rows);
        }

        let available_size = ui.available_size();
        let spans = (self.cols.max(self.rows) - 1).max(1) as f32;
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / spans;

        let width = 2.0 * BOARD_MARGIN + (self.cols - 1) as f32 * self.cell_size;
        let height = 2.0 * BOARD_MARGIN + (self.rows - 1) as f32 * self.cell_size;
        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, grid);

        if let Some(pos) = frame.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !frame.accepts_input {
            return None;
        }

        let mut selected = None;

        if let Some(pointer_pos) = response.hover_pos() {
            if let Some(pos) = self.screen_to_board(pointer_pos) {
                let is_valid = grid.is_free(pos);
                self.draw_hover_preview(&painter, pos, frame.turn, is_valid);
                if response.clicked() && is_valid {
                    self.cursor.pos = pos;
                    selected = Some(pos);
                }
            }
        }

        if let Some(pos) = self.handle_keys(ui) {
            selected = selected.or(Some(pos));
        }
        self.draw_cursor(&painter);

        selected
    }

    /// Arrow keys move the cursor, Enter or Space selects
    fn handle_keys(&mut self, ui: &egui::Ui) -> Option<Pos> {
        let (cols, rows) = (self.cols, self.rows);
        ui.input(|input| {
            for (key, dx, dy) in [
                (Key::ArrowLeft, -1, 0),
                (Key::ArrowRight, 1, 0),
                (Key::ArrowUp, 0, -1),
                (Key::ArrowDown, 0, 1),
            ] {
                if input.key_pressed(key) {
                    self.cursor.step(dx, dy, cols, rows);
                }
            }
            (input.key_pressed(Key::Enter) || input.key_pressed(Key::Space))
                .then_some(self.cursor.pos)
        })
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let right = BOARD_MARGIN + (self.cols - 1) as f32 * self.cell_size;
        let bottom = BOARD_MARGIN + (self.rows - 1) as f32 * self.cell_size;

        for col in 0..self.cols {
            let offset = BOARD_MARGIN + col as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, bottom);
            painter.line_segment([start, end], stroke);
        }
        for row in 0..self.rows {
            let offset = BOARD_MARGIN + row as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(right, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Column letters (numbers past Z) on top, row numbers on the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.cols {
            let label = if self.cols <= 26 {
                ((b'A' + col as u8) as char).to_string()
            } else {
                (col + 1).to_string()
            };
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, label, font.clone(), GRID_LINE);
        }

        for row in 0..self.rows {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, format!("{}", row + 1), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, grid: &Grid) {
        for pos in grid.positions() {
            let cell = grid.cell(pos);
            if !cell.is_neutral() {
                self.draw_stone(painter, pos, cell);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match cell {
            Cell::Color1 => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, DARK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, DARK_STONE_HIGHLIGHT);
            }
            Cell::Color2 => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, LIGHT_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, LIGHT_STONE_SHADOW),
                );
            }
            Cell::Neutral => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Cell, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Cell::Color1 => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Cell::Color2 => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Cell::Neutral => hover_valid(),
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    fn draw_cursor(&self, painter: &Painter) {
        let center = self.board_to_screen(self.cursor.pos);
        let half = self.cell_size * 0.5;
        let rect = Rect::from_center_size(center, Vec2::splat(2.0 * half));
        painter.rect_stroke(
            rect,
            CornerRadius::same(2),
            Stroke::new(CURSOR_WIDTH, CURSOR),
            egui::StrokeKind::Inside,
        );
    }

    /// Convert screen coordinates to a grid position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if Grid::is_in_grid(col, self.cols) && Grid::is_in_grid(row, self.rows) {
            Some(Pos::new(col as usize, row as usize))
        } else {
            None
        }
    }

    /// Convert a grid position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_around() {
        let mut cursor = Cursor { pos: Pos::new(0, 0) };
        cursor.step(-1, 0, 10, 8);
        assert_eq!(cursor.pos, Pos::new(9, 0));
        cursor.step(0, -1, 10, 8);
        assert_eq!(cursor.pos, Pos::new(9, 7));
        cursor.step(1, 1, 10, 8);
        assert_eq!(cursor.pos, Pos::new(0, 0));
    }

    #[test]
    fn test_cursor_clamps_to_smaller_grid() {
        let mut cursor = Cursor::centered(20, 20);
        assert_eq!(cursor.pos, Pos::new(10, 10));
        cursor.clamp(6, 8);
        assert_eq!(cursor.pos, Pos::new(5, 7));
    }

    #[test]
    fn test_screen_board_round_trip() {
        let view = BoardView {
            cell_size: 30.0,
            board_rect: Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::splat(400.0)),
            cols: 10,
            rows: 10,
            cursor: Cursor::centered(10, 10),
        };
        let pos = Pos::new(3, 7);
        assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        assert_eq!(view.screen_to_board(Pos2::new(0.0, 0.0)), None);
    }
}
