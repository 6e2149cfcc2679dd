//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. It also owns the
//! inverse mapping: `hit_test` turns a terminal click back into a board
//! coordinate, the click-to-grid step the state machine relies on.

use crate::core::snapshot::{GameSnapshot, TileView};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, TokenColor, FADE_TICKS, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SELECT_BG: Rgb = Rgb::new(110, 110, 130);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 45);

/// A lightweight terminal renderer for the match-three board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Top-left corner of the board frame for this viewport
    fn frame_origin(&self, viewport: Viewport) -> (u16, u16, u16, u16) {
        let board_w = (GRID_SIZE as u16) * self.cell_w;
        let board_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        (start_x, start_y, frame_w, frame_h)
    }

    /// Map a terminal position to a board coordinate.
    ///
    /// Returns None for clicks outside the board area ("no tile").
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<Coord> {
        let (start_x, start_y, _, _) = self.frame_origin(viewport);
        let inner_x = x.checked_sub(start_x + 1)?;
        let inner_y = y.checked_sub(start_y + 1)?;

        let col = inner_x / self.cell_w;
        let row = inner_y / self.cell_h;
        if row >= GRID_SIZE as u16 || col >= GRID_SIZE as u16 {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }

    /// Render one frame.
    ///
    /// `cursor` is the keyboard cursor; it is drawn as a subtle highlight
    /// distinct from the tap selection.
    pub fn render(&self, snap: &GameSnapshot, cursor: Coord, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let (start_x, start_y, frame_w, frame_h) = self.frame_origin(viewport);

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells first; risen (falling) tokens are painted on top.
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let tile = snap.tiles[row as usize][col as usize];
                let at = Coord::new(row, col);

                if tile.rise > 0 {
                    self.draw_empty_cell(&mut fb, start_x, start_y, at);
                    continue;
                }
                self.draw_tile(&mut fb, start_x, start_y, at, tile, at == cursor);
            }
        }
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let tile = snap.tiles[row as usize][col as usize];
                if tile.rise > 0 && tile.rise <= row {
                    let above = Coord::new(row - tile.rise, col);
                    self.draw_tile(&mut fb, start_x, start_y, above, tile, false);
                }
            }
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_game_over(&mut fb, snap, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        at: Coord,
        tile: TileView,
        under_cursor: bool,
    ) {
        let Some(color) = tile.color else {
            self.draw_empty_cell(fb, start_x, start_y, at);
            return;
        };

        let bg = if tile.selected {
            SELECT_BG
        } else if under_cursor {
            CURSOR_BG
        } else {
            BOARD_BG
        };

        let mut fg = token_rgb(color);
        if let Some(fade) = tile.fade {
            // Fade the token into the background as removal progresses
            let t = (fade as u32 * 255 / FADE_TICKS as u32).min(255) as u8;
            fg = fg.towards(bg, t);
        }

        let style = CellStyle {
            fg,
            bg,
            bold: tile.selected,
        };
        self.fill_cell_rect(fb, start_x, start_y, at, '█', style);
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, at: Coord) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_BG,
            bold: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, at, '·', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        at: Coord,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + (at.col as u16) * self.cell_w;
        let py = start_y + 1 + (at.row as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.moves_left), value);
        y = y.saturating_add(2);

        // The combo reads as a streak; a value of 1 is not worth showing
        if snap.combo > 1 {
            fb.put_str(panel_x, y, "COMBO", label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, &format!("x{}", snap.combo), value);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        let lines = [
            "GAME OVER".to_string(),
            format!("FINAL SCORE {}", snap.score),
            "PRESS R TO RESTART".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let y = mid_y.saturating_sub(1).saturating_add(i as u16);
            fb.put_str(x, y, line, style);
        }
    }
}

fn token_rgb(color: TokenColor) -> Rgb {
    match color {
        TokenColor::Red => Rgb::new(220, 70, 70),
        TokenColor::Green => Rgb::new(90, 210, 110),
        TokenColor::Blue => Rgb::new(80, 120, 230),
        TokenColor::Yellow => Rgb::new(235, 210, 80),
        TokenColor::Purple => Rgb::new(200, 95, 220),
        TokenColor::Cyan => Rgb::new(80, 210, 210),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    const VIEW: Viewport = Viewport {
        width: 80,
        height: 24,
    };

    #[test]
    fn test_hit_test_round_trips_every_cell() {
        let view = GameView::default();
        let (start_x, start_y, _, _) = view.frame_origin(VIEW);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let x = start_x + 1 + (col as u16) * 2;
                let y = start_y + 1 + (row as u16);
                // Both columns of the 2-wide cell map to the same coord
                assert_eq!(view.hit_test(VIEW, x, y), Some(Coord::new(row, col)));
                assert_eq!(view.hit_test(VIEW, x + 1, y), Some(Coord::new(row, col)));
            }
        }
    }

    #[test]
    fn test_hit_test_rejects_clicks_outside_the_board() {
        let view = GameView::default();
        let (start_x, start_y, frame_w, frame_h) = view.frame_origin(VIEW);

        // The border itself is not a tile
        assert_eq!(view.hit_test(VIEW, start_x, start_y), None);
        // Beyond the bottom-right corner
        assert_eq!(view.hit_test(VIEW, start_x + frame_w, start_y + frame_h), None);
        // Top-left of the screen (off the frame entirely)
        assert_eq!(view.hit_test(VIEW, 0, 0), None);
    }

    #[test]
    fn test_render_smoke() {
        let state = GameState::new(3);
        let view = GameView::default();
        let fb = view.render(&state.snapshot(), Coord::new(0, 0), VIEW);
        assert_eq!(fb.width(), VIEW.width);
        assert_eq!(fb.height(), VIEW.height);
    }

    #[test]
    fn test_render_survives_a_tiny_viewport() {
        let state = GameState::new(3);
        let view = GameView::default();
        let fb = view.render(&state.snapshot(), Coord::new(0, 0), Viewport::new(4, 2));
        assert_eq!(fb.width(), 4);
    }
}
