//! WorldView: rasterises a `core::World` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each terminal cell covers `px_w x px_h` world pixels and shows two
//! samples stacked vertically using the upper half block `▀`: the foreground
//! color is the upper sample, the background color the lower one. A sample
//! takes the color of the top-most sprite (in draw order) under that point.

use crate::core::World;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BLACK, WINDOW_HEIGHT, WINDOW_WIDTH};

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

/// A lightweight terminal renderer for the platformer world.
#[derive(Debug, Clone)]
pub struct WorldView {
    /// World pixels per terminal column.
    px_w: i32,
    /// World pixels per terminal row (two samples per row).
    px_h: i32,
    anchor_y: AnchorY,
}

impl Default for WorldView {
    fn default() -> Self {
        // 16x32 makes one tile 2 columns by 1 row, which looks square in
        // most terminal fonts.
        Self::new(16, 32)
    }
}

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HUD_LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const HUD_VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HUD_HINT: CellStyle = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0)).dim();

const CONTROLS_HINT: &str = "←/→ move  space jump  p pause  r restart  q quit";

impl WorldView {
    pub fn new(px_w: u16, px_h: u16) -> Self {
        Self {
            px_w: i32::from(px_w.max(1)),
            px_h: i32::from(px_h.max(2)),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Playfield size in cells (without border).
    pub fn field_size(&self) -> (u16, u16) {
        let cols = (WINDOW_WIDTH + self.px_w - 1) / self.px_w;
        let rows = (WINDOW_HEIGHT + self.px_h - 1) / self.px_h;
        (cols as u16, rows as u16)
    }

    /// Render the world into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, world: &World, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (field_w, field_h) = self.field_size();
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            // Keep one row for the HUD under the frame.
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, BORDER);

        for cy in 0..field_h {
            for cx in 0..field_w {
                let (ch, style) = self.cell_at(world, i32::from(cx), i32::from(cy));
                fb.put_char(start_x + 1 + cx, start_y + 1 + cy, ch, style);
            }
        }

        self.draw_hud(fb, world, viewport, start_x, start_y + frame_h);

        if world.paused() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, world: &World, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, viewport, &mut fb);
        fb
    }

    fn cell_at(&self, world: &World, cx: i32, cy: i32) -> (char, CellStyle) {
        let x = cx * self.px_w + self.px_w / 2;
        let top_y = cy * self.px_h + self.px_h / 4;
        let bottom_y = cy * self.px_h + (3 * self.px_h) / 4;

        let upper = sample(world, x, top_y);
        let lower = sample(world, x, bottom_y);
        if upper == lower {
            (' ', CellStyle::new(upper, upper))
        } else {
            ('▀', CellStyle::new(upper, lower))
        }
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

    fn draw_hud(&self, fb: &mut FrameBuffer, world: &World, viewport: Viewport, x: u16, y: u16) {
        if y >= viewport.height {
            return;
        }
        let mut cx = fb.put_str(x, y, "FRAME ", HUD_LABEL);
        cx = fb.put_u64(cx, y, world.frame(), HUD_VALUE);
        cx = cx.saturating_add(2);
        let state = if world.player().standing {
            "STANDING"
        } else {
            "AIRBORNE"
        };
        cx = fb.put_str(cx, y, state, HUD_VALUE);
        cx = cx.saturating_add(2);

        let hint_w = CONTROLS_HINT.chars().count() as u16;
        if cx.saturating_add(hint_w) <= viewport.width {
            fb.put_str(cx, y, CONTROLS_HINT, HUD_HINT);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Color of the top-most sprite under `(x, y)`; black where nothing is drawn.
fn sample(world: &World, x: i32, y: i32) -> Rgb {
    world
        .draw_list()
        .rev()
        .find_map(|s| s.sample(x, y))
        .unwrap_or(BLACK)
}
