//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and every frame after a resize or `invalidate`) is a
//! full redraw; later frames only rewrite the runs of cells that changed.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Whether keyboard enhancement flags are pushed on the terminal.
/// Process-wide, so a renderer built in a panic hook still pops them.
static KEYBOARD_ENHANCED: AtomicBool = AtomicBool::new(false);

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    release_events: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            release_events: false,
        }
    }

    /// Switch to raw mode on the alternate screen.
    ///
    /// Key-release reporting is requested when the terminal supports the
    /// keyboard enhancement protocol; see [`TerminalRenderer::release_events`].
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.release_events {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        KEYBOARD_ENHANCED.store(self.release_events, Ordering::SeqCst);

        log::info!(
            "terminal entered (key release events: {})",
            if self.release_events { "yes" } else { "no" }
        );
        Ok(())
    }

    /// Restore the terminal. Safe to call on a fresh renderer (e.g. from a
    /// panic hook): keyboard enhancement is popped if any renderer pushed it.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_exit_into(&mut self.buf)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::info!("terminal restored");
        Ok(())
    }

    /// Whether the terminal reports key releases.
    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(fb, &mut self.buf)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the terminal restore sequence into `out`.
///
/// Pops keyboard enhancement flags at most once per push.
pub fn encode_exit_into(out: &mut Vec<u8>) -> Result<()> {
    if KEYBOARD_ENHANCED.swap(false, Ordering::SeqCst) {
        out.queue(PopKeyboardEnhancementFlags)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    #[test]
    fn style_converts_to_true_color() {
        let style = CellStyle::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
        assert_eq!(rgb_to_color(style.fg), Color::Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(rgb_to_color(style.bg), Color::Rgb { r: 4, g: 5, b: 6 });
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn changed_run_iterator_splits_separate_runs() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        b.set(0, 0, Cell { ch: 'A', style });
        b.set(5, 0, Cell { ch: 'B', style });
        b.set(2, 1, Cell { ch: 'C', style });

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 0, 1), (5, 0, 1), (2, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(4, 2);
        let b = a.clone();
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();

        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        reset_only.queue(SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 1, Cell { ch: 'D', style });

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A'));
        assert!(text.contains('D'));
        assert!(text.contains("\r\n"));
    }

    #[test]
    fn exit_pops_keyboard_enhancement_once() {
        let mut pop = Vec::new();
        pop.queue(PopKeyboardEnhancementFlags).unwrap();

        // State left behind by `enter` on a terminal with release events.
        KEYBOARD_ENHANCED.store(true, Ordering::SeqCst);

        // A fresh renderer, as built by a panic hook, still pops the flags.
        assert!(!TerminalRenderer::new().release_events());
        let mut first = Vec::new();
        encode_exit_into(&mut first).unwrap();
        assert!(first.starts_with(&pop));

        let mut second = Vec::new();
        encode_exit_into(&mut second).unwrap();
        assert!(!second.starts_with(&pop));
        assert!(String::from_utf8_lossy(&second).contains("\x1b[?1049l"));
    }
}
