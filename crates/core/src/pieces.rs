//! Pieces module - tetromino templates and 1984-style rotation
//!
//! Each piece is a small boolean matrix in its spawn orientation. Rotation
//! builds a new matrix (transpose with row reversal); templates are never
//! mutated. There is no rotation system beyond a short list of fallback
//! offsets tried when the rotated shape collides at its origin.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, KICK_OFFSETS};

/// Largest side of any piece matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// Offset of a single cell relative to the piece origin (dx, dy)
pub type CellOffset = (i32, i32);

/// A piece matrix of up to 4x4 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values
    fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_SIDE);
        let mut bits = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                bits[r][c] = v != 0;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            bits,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the matrix cell at (row, col) is part of the piece
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Rotate 90° clockwise: `rotated[i][j] = shape[rows - 1 - j][i]`
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows();
        let cols = self.cols();
        let mut bits = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, out_row) in bits.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.bits[rows - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Offsets (dx, dy) of the filled cells, row by row
    pub fn cells(&self) -> ArrayVec<CellOffset, 16> {
        let mut out = ArrayVec::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.bits[r][c] {
                    out.push((c as i32, r as i32));
                }
            }
        }
        out
    }
}

/// Get the spawn-orientation template for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Spawn column for a shape: horizontally centered
pub fn spawn_x(board_width: usize, shape: &Shape) -> i32 {
    (board_width / 2) as i32 - (shape.cols() / 2) as i32
}

/// A piece placed on the board: its current shape plus origin
///
/// Value type; every move or rotation returns a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceInstance {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl PieceInstance {
    /// Create a piece of the given kind at the spawn position
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let shape = template(kind);
        Self {
            kind,
            shape,
            x: spawn_x(board_width, &shape),
            y: 0,
        }
    }

    /// Same piece (and orientation) moved back to the spawn position
    pub fn respawned(&self, board_width: usize) -> Self {
        Self {
            x: spawn_x(board_width, &self.shape),
            y: 0,
            ..*self
        }
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Absolute board coordinates of every cell
    pub fn board_cells(&self) -> ArrayVec<CellOffset, 16> {
        self.shape
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Check that every cell satisfies `is_free`
    pub fn fits(&self, is_free: impl Fn(i32, i32) -> bool) -> bool {
        self.board_cells().iter().all(|&(x, y)| is_free(x, y))
    }
}

/// Try to rotate a piece clockwise, falling back to the fixed offset list
///
/// Returns the rotated instance, or None when no position fits.
pub fn try_rotate(piece: &PieceInstance, is_free: impl Fn(i32, i32) -> bool) -> Option<PieceInstance> {
    let rotated = PieceInstance {
        shape: piece.shape.rotated_cw(),
        ..*piece
    };

    std::iter::once((0, 0))
        .chain(KICK_OFFSETS)
        .map(|(dx, dy)| rotated.translated(dx, dy))
        .find(|candidate| candidate.fits(&is_free))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(template(kind).cells().len(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let rotated = template(PieceKind::T).rotated_cw();
        assert_eq!((rotated.rows(), rotated.cols()), (3, 2));
        // X.
        // XX
        // X.
        assert_eq!(rotated.cells().as_slice(), &[(0, 0), (0, 1), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(PieceInstance::spawn(PieceKind::I, 10).x, 3);
        assert_eq!(PieceInstance::spawn(PieceKind::O, 10).x, 4);
        assert_eq!(PieceInstance::spawn(PieceKind::T, 10).x, 4);
    }
}
