//! Pieces tests - templates, clockwise rotation and fallback offsets

use tetris_1984::core::pieces::{spawn_x, template, try_rotate, PieceInstance};
use tetris_1984::core::Board;
use tetris_1984::types::{CellState, PieceKind};

// ============== Shape Tests ==============

#[test]
fn test_template_dimensions() {
    let dims = |kind| {
        let shape = template(kind);
        (shape.rows(), shape.cols())
    };
    assert_eq!(dims(PieceKind::I), (1, 4));
    assert_eq!(dims(PieceKind::O), (2, 2));
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(dims(kind), (2, 3), "{kind:?}");
    }
}

#[test]
fn test_i_piece_rotates_to_vertical() {
    let vertical = template(PieceKind::I).rotated_cw();
    assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
    assert_eq!(vertical.cells().as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_l_piece_rotation() {
    // ..X      X.
    // XXX  ->  X.
    //          XX
    let rotated = template(PieceKind::L).rotated_cw();
    assert_eq!(rotated.cells().as_slice(), &[(0, 0), (0, 1), (0, 2), (1, 2)]);
}

#[test]
fn test_four_rotations_restore_every_piece() {
    for kind in PieceKind::ALL {
        let original = template(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = shape.rotated_cw();
            assert_eq!(shape.cells().len(), 4, "{kind:?} lost a cell");
        }
        assert_eq!(shape, original, "{kind:?}");
    }
}

#[test]
fn test_rotation_does_not_mutate_template() {
    let before = template(PieceKind::T);
    let _ = before.rotated_cw();
    assert_eq!(template(PieceKind::T), before);
}

// ============== Placement Tests ==============

#[test]
fn test_spawn_positions() {
    assert_eq!(spawn_x(10, &template(PieceKind::I)), 3);
    assert_eq!(spawn_x(10, &template(PieceKind::O)), 4);
    assert_eq!(spawn_x(10, &template(PieceKind::J)), 4);
    assert_eq!(spawn_x(8, &template(PieceKind::I)), 2);

    let piece = PieceInstance::spawn(PieceKind::S, 10);
    assert_eq!((piece.x, piece.y), (4, 0));
    assert_eq!(piece.shape, template(PieceKind::S));
}

#[test]
fn test_board_cells_follow_origin() {
    let piece = PieceInstance::spawn(PieceKind::O, 10).translated(1, 5);
    assert_eq!(
        piece.board_cells().as_slice(),
        &[(5, 5), (6, 5), (5, 6), (6, 6)]
    );
}

#[test]
fn test_respawn_keeps_orientation() {
    let mut piece = PieceInstance::spawn(PieceKind::I, 10).translated(-3, 12);
    piece.shape = piece.shape.rotated_cw();
    let back = piece.respawned(10);
    assert_eq!(back.shape, piece.shape);
    assert_eq!((back.x, back.y), (5, 0));
}

// ============== Rotation Offset Tests ==============

#[test]
fn test_rotation_in_open_space_uses_origin() {
    let board = Board::default();
    let piece = PieceInstance::spawn(PieceKind::T, 10).translated(0, 5);
    let rotated = try_rotate(&piece, |x, y| board.is_valid(x, y)).unwrap();
    assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
}

#[test]
fn test_rotation_tries_left_first() {
    // Vertical I with a block in the way of the flat I's last cell.
    let mut board = Board::default();
    board.set(7, 10, CellState::Filled);
    let piece = PieceInstance {
        kind: PieceKind::I,
        shape: template(PieceKind::I).rotated_cw(),
        x: 4,
        y: 10,
    };
    let rotated = try_rotate(&piece, |x, y| board.is_valid(x, y)).unwrap();
    assert_eq!((rotated.x, rotated.y), (3, 10));
}

#[test]
fn test_rotation_can_kick_upward() {
    // Near the floor a rotation can move up by one row, never more.
    let board = Board::default();
    let piece = PieceInstance {
        kind: PieceKind::I,
        shape: template(PieceKind::I),
        x: 3,
        y: 19,
    };
    // Vertical I needs 4 rows; from row 19 even one row up is not enough.
    assert!(try_rotate(&piece, |x, y| board.is_valid(x, y)).is_none());

    let t = PieceInstance {
        kind: PieceKind::T,
        shape: template(PieceKind::T),
        x: 4,
        y: 18,
    };
    // Upright T needs 3 rows; from row 18 it kicks up by one.
    let rotated = try_rotate(&t, |x, y| board.is_valid(x, y)).unwrap();
    assert_eq!((rotated.x, rotated.y), (4, 17));
}

#[test]
fn test_rotation_rejected_when_boxed_in() {
    let mut board = Board::default();
    for y in 0..20 {
        board.set(3, y, CellState::Filled);
        board.set(5, y, CellState::Filled);
    }
    let piece = PieceInstance {
        kind: PieceKind::I,
        shape: template(PieceKind::I).rotated_cw(),
        x: 4,
        y: 8,
    };
    assert!(try_rotate(&piece, |x, y| board.is_valid(x, y)).is_none());
}

#[test]
fn test_rotation_never_goes_above_the_board() {
    // Flat T at the top: the side offsets are blocked and the upward ones
    // would leave the board, so the rotation is rejected.
    let board = Board::from_rows(&[
        "..........", //
        "..........", //
        "..###.....", //
        "..........", //
    ]);
    let piece = PieceInstance {
        kind: PieceKind::T,
        shape: template(PieceKind::T),
        x: 3,
        y: 0,
    };
    assert!(piece.fits(|x, y| board.is_valid(x, y)));
    assert!(try_rotate(&piece, |x, y| board.is_valid(x, y)).is_none());

    // Same spot one row lower: the (0, -1) offset now lands at row 0.
    let lower = Board::from_rows(&[
        "..........", //
        "..........", //
        "..........", //
        "..###.....", //
    ]);
    let piece = piece.translated(0, 1);
    let rotated = try_rotate(&piece, |x, y| lower.is_valid(x, y)).unwrap();
    assert_eq!((rotated.x, rotated.y), (3, 0));
}
