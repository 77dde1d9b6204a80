//! GameView: maps a [`GameSnapshot`] plus the move form into a framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{coordinate_label, GameSnapshot};
use crate::fb::{Style, FrameBuffer, Rgb};
use crate::input::{Field, MoveForm};
use crate::types::{Axis, Cell, Color};

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

/// Side panel contents that do not live in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    /// Elapsed play time, `mm:ss`
    pub clock: &'a str,
    pub status: &'a str,
    pub column_text: &'a str,
    pub row_text: &'a str,
    pub focus: Field,
    pub axis: Axis,
}

impl<'a> HudView<'a> {
    pub fn new(form: &'a MoveForm, clock: &'a str, status: &'a str) -> Self {
        Self {
            clock,
            status,
            column_text: form.column_text(),
            row_text: form.row_text(),
            focus: form.focus(),
            axis: form.axis(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const LABEL_W: u16 = 2;

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let board_px_w = (snap.cols as u16) * self.cell_w;
        let board_px_h = (snap.rows as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Row letters on the left, column letters on the line above the frame.
        let origin_x = viewport.width.saturating_sub(LABEL_W + frame_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };
        let frame_x = origin_x + LABEL_W;
        let frame_y = origin_y + 1;

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            frame_x + 1,
            frame_y + 1,
            board_px_w,
            board_px_h,
            ' ',
            Style::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        self.draw_border(fb, frame_x, frame_y, frame_w, frame_h, border);
        self.draw_labels(fb, snap, origin_x, frame_x, frame_y);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let (ch, style) = match snap.cell(row, col) {
                    Some(Cell::Token(color)) => ('█', Style::new(color_rgb(color), PLAY_BG)),
                    _ => (' ', Style::new(Rgb::new(90, 90, 100), PLAY_BG)),
                };
                let px = frame_x + 1 + (col as u16) * self.cell_w;
                let py = frame_y + 1 + (row as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, frame_x + frame_w, frame_y);
    }

    /// Allocates a fresh framebuffer; prefer [`GameView::render_into`] per frame.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_labels(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        origin_x: u16,
        frame_x: u16,
        frame_y: u16,
    ) {
        let style = Style::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0));
        for col in 0..snap.cols {
            if let Some(label) = coordinate_label(col) {
                let x = frame_x + 1 + (col as u16) * self.cell_w;
                fb.put_char(x, frame_y.saturating_sub(1), label, style);
            }
        }
        for row in 0..snap.rows {
            if let Some(label) = coordinate_label(row) {
                let y = frame_y + 1 + (row as u16) * self.cell_h;
                fb.put_char(origin_x, y, label, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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
        hud: &HudView<'_>,
        viewport: Viewport,
        frame_right: u16,
        top: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let focused = Style::new(Rgb::new(240, 220, 80), Rgb::new(0, 0, 0)).bold();

        let mut y = top;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x + 8, y, snap.score, value);
        y += 1;
        fb.put_str(panel_x, y, "TIME", label);
        fb.put_str(panel_x + 8, y, hud.clock, value);
        y += 1;
        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x + 8, y, snap.moves, value);
        y += 2;

        let fields = [
            (Field::Column, "COLUMN", hud.column_text),
            (Field::Row, "ROW", hud.row_text),
        ];
        for (field, name, text) in fields {
            let style = if field == hud.focus { focused } else { label };
            if field == hud.focus {
                fb.put_char(panel_x, y, '>', focused);
            }
            fb.put_str(panel_x + 2, y, name, style);
            fb.put_char(panel_x + 9, y, '[', value);
            fb.put_str(panel_x + 10, y, if text.is_empty() { " " } else { text }, value);
            fb.put_char(panel_x + 11, y, ']', value);
            y += 1;
        }
        fb.put_str(panel_x + 2, y, "SWAP", label);
        let axis = match hud.axis {
            Axis::Horizontal => "right",
            Axis::Vertical => "down",
        };
        fb.put_str(panel_x + 9, y, axis, value);
        y += 2;

        if snap.busy {
            let busy = Style::new(Rgb::new(255, 165, 0), Rgb::new(0, 0, 0)).bold();
            fb.put_str(panel_x, y, "BUSY", busy);
        }
        y += 1;
        fb.put_str(panel_x, y, hud.status, value);
        y += 2;

        if y < viewport.height {
            let hint = value.dim();
            fb.put_str(panel_x, y, "Enter swap  Space axis", hint);
            fb.put_str(panel_x, y + 1, "Ctrl-R restart  Esc quit", hint);
        }
    }
}

fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 80, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Magenta => Rgb::new(200, 120, 220),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::White => Rgb::new(235, 235, 235),
    }
}
