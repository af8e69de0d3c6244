//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

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

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);

pub const SNAKE_HEAD: CellStyle = CellStyle::new(Rgb::new(0, 255, 0), PLAYFIELD_BG).bold();
pub const SNAKE_BODY: CellStyle = CellStyle::new(Rgb::new(0, 200, 0), PLAYFIELD_BG);
pub const FOOD: CellStyle = CellStyle::new(Rgb::new(255, 0, 0), PLAYFIELD_BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const TEXT: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
const GAME_OVER: CellStyle = CellStyle::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0)).bold();

/// A lightweight terminal renderer for the snake grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Terminal size needed to show the whole grid plus the score line.
    pub fn required_size(&self, snap: &GameSnapshot) -> Viewport {
        Viewport::new(
            (snap.grid_width as u16).saturating_mul(self.cell_w).saturating_add(2),
            (snap.grid_height as u16).saturating_mul(self.cell_h).saturating_add(3),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let need = self.required_size(snap);
        let frame_w = need.width;
        let frame_h = need.height - 1;
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(need.height) / 2;
        let board_y = origin_y + 1;

        fb.put_str(origin_x, origin_y, &format!("Score: {}", snap.score), TEXT);

        fb.fill_rect(
            origin_x + 1,
            board_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(PLAYFIELD_BG, PLAYFIELD_BG),
        );
        draw_border(fb, origin_x, board_y, frame_w, frame_h);

        let cell = |p: Position| -> Option<(u16, u16)> {
            p.in_bounds(snap.grid_width, snap.grid_height).then(|| {
                (
                    origin_x + 1 + p.x as u16 * self.cell_w,
                    board_y + 1 + p.y as u16 * self.cell_h,
                )
            })
        };

        if let Some((x, y)) = cell(snap.food) {
            fb.fill_rect(x, y, self.cell_w, self.cell_h, '█', FOOD);
        }
        for &p in &snap.body {
            if let Some((x, y)) = cell(p) {
                fb.fill_rect(x, y, self.cell_w, self.cell_h, '█', SNAKE_BODY);
            }
        }
        if let Some((x, y)) = cell(snap.head) {
            fb.fill_rect(x, y, self.cell_w, self.cell_h, '█', SNAKE_HEAD);
        }

        if snap.game_over() {
            let mid = board_y + frame_h / 2;
            let final_score = format!("Final Score: {}", snap.score);
            let lines = [
                ("GAME OVER", GAME_OVER),
                (final_score.as_str(), TEXT),
                ("Press R to restart", TEXT),
            ];
            for (i, (text, style)) in lines.iter().enumerate() {
                let w = text.chars().count() as u16;
                let x = origin_x + frame_w.saturating_sub(w) / 2;
                let y = (mid + i as u16).saturating_sub(1);
                fb.put_str(x, y, text, *style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.set(x, y, BORDER.cell('┌'));
    fb.set(right, y, BORDER.cell('┐'));
    fb.set(x, bottom, BORDER.cell('└'));
    fb.set(right, bottom, BORDER.cell('┘'));
    for cx in x + 1..right {
        fb.set(cx, y, BORDER.cell('─'));
        fb.set(cx, bottom, BORDER.cell('─'));
    }
    for cy in y + 1..bottom {
        fb.set(x, cy, BORDER.cell('│'));
        fb.set(right, cy, BORDER.cell('│'));
    }
}
