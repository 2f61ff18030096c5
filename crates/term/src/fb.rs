//! Character framebuffer for the ASCII playfield.
//!
//! The 1984 look is monochrome text, so a cell is a character plus an [`Ink`]
//! rather than a full color style. The renderer maps inks to terminal colors.

/// How a glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Ink {
    /// Regular playfield text
    #[default]
    Normal,
    /// Locked blocks, the falling piece and labels
    Bright,
    /// Empty-cell dots and the ghost
    Faint,
    /// Blinking rows and overlays
    Alert,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub ink: Ink,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        ink: Ink::Normal,
    };

    pub const fn new(ch: char, ink: Ink) -> Self {
        Self { ch, ink }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// 2D grid of glyphs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and blank the buffer, keeping the allocation when it can.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(usize::from(width) * usize::from(height), Glyph::BLANK);
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.index(x, y).map(|i| self.glyphs[i])
    }

    /// Write one glyph; out-of-range writes are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, ink: Ink) {
        if let Some(i) = self.index(x, y) {
            self.glyphs[i] = Glyph::new(ch, ink);
        }
    }

    /// Write a string left to right, clipped at the right edge.
    ///
    /// Returns the column after the last character written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, ink: Ink) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch, ink);
            cx += 1;
        }
        cx
    }

    /// Write a string centered inside `[x, x + w)`.
    pub fn put_centered(&mut self, x: u16, w: u16, y: u16, s: &str, ink: Ink) {
        let len = s.chars().count() as u16;
        self.put_str(x.saturating_add(w.saturating_sub(len) / 2), y, s, ink);
    }

    /// The characters of row `y` as a string (used by tests and logs).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }

    /// Whole frame as text, one line per row.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
