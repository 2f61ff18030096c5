//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (10x20 by default) where each cell is
//! empty, filled, or flashing during a line-clear animation.
//! Uses a flat row-major vector so every row is a contiguous slice.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::types::{CellState, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellState>,
}

impl Board {
    /// Create a new empty board of the given size
    ///
    /// Dimensions are validated by [`crate::EngineConfig::validate`] before the
    /// engine builds its board; zero-sized boards are simply never valid for
    /// any piece.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
        }
    }

    /// Create a board from text rows, `#` for filled and anything else empty
    ///
    /// Every row must have the same length.
    ///
    /// ```
    /// use tetris_1984_core::Board;
    /// use tetris_1984_core::types::CellState;
    ///
    /// let board = Board::from_rows(&["....", "##.#"]);
    /// assert_eq!(board.width(), 4);
    /// assert_eq!(board.get(0, 1), Some(CellState::Filled));
    /// assert_eq!(board.get(2, 1), Some(CellState::Empty));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.chars().count(), width, "ragged board row {y}");
            for (x, ch) in row.chars().enumerate().take(width) {
                if ch == '#' {
                    board.cells[y * width + x] = CellState::Filled;
                }
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: CellState) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(CellState::Empty))
    }

    /// Check if a row is completely filled (flashing rows do not count)
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| *cell == CellState::Filled))
    }

    /// Row indices that are completely filled, bottom-most first
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height).rev().filter(|&y| self.is_row_full(y)).collect()
    }

    /// Borrow a whole row
    pub fn row(&self, y: usize) -> Option<&[CellState]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Overwrite every cell of a row
    pub fn fill_row(&mut self, y: usize, cell: CellState) {
        if y >= self.height {
            return;
        }
        let start = y * self.width;
        self.cells[start..start + self.width].fill(cell);
    }

    /// Remove the given rows and let everything above fall into the gaps
    ///
    /// Uses a two-pointer pass from the bottom up, so the order of `rows`
    /// does not matter and row indices never shift under the caller.
    /// Returns the number of rows removed.
    pub fn remove_rows(&mut self, rows: &[usize]) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut removed = 0;

        for read_y in (0..self.height).rev() {
            if rows.contains(&read_y) {
                removed += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        // Rows vacated at the top become empty
        self.cells[..write_y * width].fill(CellState::Empty);

        removed
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Render as text rows (`#` filled, `*` flashing, `.` empty)
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        CellState::Empty => '.',
                        CellState::Filled => '#',
                        CellState::Flashing => '*',
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
