//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or `invalidate`) is a full
//! redraw; after that only changed runs of glyphs are written.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Ink};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
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
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        self.last = None;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// The caller gets the old frame back in `fb` and can render the next
    /// frame into it without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }

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

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut ink = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        encode_run(fb, 0, y, fb.width(), &mut ink, out)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of glyphs that differ between `prev` and `next`.
///
/// Both frames must have the same size. Writes nothing when they are equal.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut ink = None;
    let mut wrote = false;

    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        encode_run(next, x, y, len, &mut ink, out)?;
        wrote = true;
    }

    if wrote {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn encode_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    current: &mut Option<Ink>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let glyph = fb.get(x + dx, y).unwrap_or_default();
        if *current != Some(glyph.ink) {
            apply_ink(out, glyph.ink)?;
            *current = Some(glyph.ink);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn apply_ink(out: &mut Vec<u8>, ink: Ink) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(ink_color(ink)))?;
    match ink {
        Ink::Bright | Ink::Alert => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Ink::Faint => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Ink::Normal => {}
    }
    Ok(())
}

fn ink_color(ink: Ink) -> Color {
    match ink {
        Ink::Normal => Color::Green,
        Ink::Bright => Color::Green,
        Ink::Faint => Color::DarkGreen,
        Ink::Alert => Color::Yellow,
    }
}

/// Runs `(x, y, len)` of differing glyphs, row by row.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let w = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < w && !differs(x) {
                x += 1;
            }
            if x >= w {
                return None;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        b.put_str(1, 0, "XYZ", Ink::Bright);
        b.put(5, 1, '!', Ink::Alert);

        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn ink_change_alone_is_a_change() {
        let mut a = FrameBuffer::new(2, 1);
        let mut b = FrameBuffer::new(2, 1);
        a.put(0, 0, '#', Ink::Alert);
        b.put(0, 0, '#', Ink::Normal);
        assert_eq!(changed_runs(&a, &b).collect::<Vec<_>>(), vec![(0, 0, 1)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let mut a = FrameBuffer::new(4, 2);
        a.put_str(0, 0, "[]", Ink::Bright);
        let b = a.clone();

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn full_redraw_contains_every_glyph() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "ABC", Ink::Normal);
        fb.put_str(0, 1, "DEF", Ink::Faint);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ABC"));
        assert!(text.contains("DEF"));
    }
}
