//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, ShapeSnapshot};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{cell_from_id, PieceKind, SessionState, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Minimum free columns right of the well before the side panel is drawn.
const MIN_PANEL_WIDTH: u16 = 12;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the bordered well landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WellRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Draws the well, the side panel and state overlays.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 makes cells roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Columns and rows taken by the bordered well.
    pub fn well_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Reusing one framebuffer across frames keeps this allocation-free
    /// unless the viewport changes size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let (frame_w, frame_h) = self.well_size();
        let well = WellRect {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        fb.fill_rect(
            well.x + 1,
            well.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            Style::new(WELL_BG, WELL_BG),
        );
        draw_border(fb, well, Style::new(Rgb::new(200, 200, 200), SCREEN_BG));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                match piece_for_id(id) {
                    Some(kind) => self.draw_block(fb, well, x as u16, y as u16, kind),
                    None => self.draw_empty(fb, well, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y, id) in active.cells() {
                let on_board =
                    (0..BOARD_WIDTH as i16).contains(&x) && (0..BOARD_HEIGHT as i16).contains(&y);
                if let (true, Some(kind)) = (on_board, piece_for_id(id)) {
                    self.draw_block(fb, well, x as u16, y as u16, kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, well);

        match snap.state {
            SessionState::Idle => draw_overlay(fb, well, 0, "PRESS ENTER"),
            SessionState::Paused => draw_overlay(fb, well, 0, "PAUSED"),
            SessionState::GameOver => {
                draw_overlay(fb, well, 0, "GAME OVER");
                draw_score_line(fb, well, 1, snap.score);
            }
            SessionState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, well: WellRect, x: u16, y: u16, kind: PieceKind) {
        let style = Style::new(Rgb::of_piece(kind), WELL_BG).bold();
        self.fill_cell(fb, well.x + 1, well.y + 1, x, y, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, well: WellRect, x: u16, y: u16) {
        let style = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        self.fill_cell(fb, well.x + 1, well.y + 1, x, y, '·', style);
    }

    /// Fill one board-cell sized block whose grid origin is `(origin_x, origin_y)`.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = origin_x + cell_x * self.cell_w;
        let py = origin_y + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        well: WellRect,
    ) {
        let panel_x = well.x.saturating_add(well.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_WIDTH {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = well.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x, y, &next);
        }
        y = y.saturating_add(5);

        let hint = value.dim();
        for line in ["ENTER start", "P     pause", "R     restart", "Q     quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &ShapeSnapshot) {
        for (dx, dy, id) in shape.filled() {
            if let Some(kind) = piece_for_id(id) {
                let style = Style::new(Rgb::of_piece(kind), SCREEN_BG).bold();
                fb.fill_rect(x + dx as u16 * self.cell_w, y + dy as u16, self.cell_w, 1, '█', style);
            }
        }
    }
}

fn piece_for_id(id: u8) -> Option<PieceKind> {
    cell_from_id(id).ok().flatten()
}

fn draw_border(fb: &mut FrameBuffer, r: WellRect, style: Style) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let (right, bottom) = (r.x + r.w - 1, r.y + r.h - 1);

    fb.put_char(r.x, r.y, '┌', style);
    fb.put_char(right, r.y, '┐', style);
    fb.put_char(r.x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for x in r.x + 1..right {
        fb.put_char(x, r.y, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in r.y + 1..bottom {
        fb.put_char(r.x, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
}

fn overlay_style() -> Style {
    Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold()
}

/// Centered text `line` rows below the middle of the well.
fn draw_overlay(fb: &mut FrameBuffer, well: WellRect, line: u16, text: &str) {
    let y = well.y.saturating_add(well.h / 2).saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = well.x.saturating_add(well.w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, overlay_style());
}

fn draw_score_line(fb: &mut FrameBuffer, well: WellRect, line: u16, score: u32) {
    const LABEL: &str = "SCORE ";
    let w = LABEL.len() as u16 + digit_count(score);
    let y = well.y.saturating_add(well.h / 2).saturating_add(line);
    let x = well.x.saturating_add(well.w.saturating_sub(w) / 2);
    fb.put_str(x, y, LABEL, overlay_style());
    fb.put_u32(x + LABEL.len() as u16, y, score, overlay_style());
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
