use tetris_1984::core::{GameEngine, GameSnapshot, PieceInstance};
use tetris_1984::term::{FrameBuffer, GameView, Ink, Viewport};
use tetris_1984::types::{CellState, GamePhase, PieceKind};

// A 10x20 board with walls and floor is exactly 24x22.
const FIT: Viewport = Viewport {
    width: 24,
    height: 22,
};

fn snapshot() -> GameSnapshot {
    GameEngine::with_seed(1).snapshot()
}

fn text(fb: &FrameBuffer) -> String {
    fb.to_text()
}

#[test]
fn term_view_renders_walls_and_floor() {
    let fb = GameView::default().render(&snapshot(), FIT);

    assert!(fb.row_text(0).starts_with("<!"));
    assert!(fb.row_text(0).ends_with("!>"));
    assert_eq!(fb.row_text(20), format!("<!{}!>", "=".repeat(20)));
    assert_eq!(fb.row_text(21), format!("  {}  ", "\\/".repeat(10)));
}

#[test]
fn term_view_renders_empty_cells_as_dots() {
    let fb = GameView::default().render(&snapshot(), FIT);
    // Column 0 of the bottom row, away from the ghost.
    assert_eq!(fb.get(2, 19).unwrap().ch, ' ');
    assert_eq!(fb.get(3, 19).unwrap().ch, '.');
    assert_eq!(fb.get(3, 19).unwrap().ink, Ink::Faint);
}

#[test]
fn term_view_renders_locked_cell_as_brackets() {
    let mut snap = snapshot();
    snap.cells[19 * snap.width] = CellState::Filled;

    let fb = GameView::default().render(&snap, FIT);
    assert_eq!(fb.get(2, 19).unwrap().ch, '[');
    assert_eq!(fb.get(3, 19).unwrap().ch, ']');
}

#[test]
fn term_view_draws_current_and_ghost() {
    let snap = snapshot();
    let fb = GameView::default().render(&snap, FIT);

    let (x, y) = snap.current.board_cells()[0];
    let px = 2 + 2 * x as u16;
    assert_eq!(fb.get(px, y as u16).unwrap().ch, '[');
    assert_eq!(fb.get(px, y as u16).unwrap().ink, Ink::Bright);

    let (gx, gy) = snap.ghost.board_cells()[0];
    assert!(gy > y);
    assert_eq!(fb.get(2 + 2 * gx as u16, gy as u16).unwrap().ch, ':');

    let no_ghost = GameView::default().with_ghost(false).render(&snap, FIT);
    assert!(!text(&no_ghost).contains("::"));
}

#[test]
fn term_view_renders_flashing_rows() {
    let mut snap = snapshot();
    let start = 19 * snap.width;
    snap.cells[start..start + snap.width].fill(CellState::Flashing);
    snap.pending_rows = vec![19];

    let fb = GameView::default().render(&snap, FIT);
    assert_eq!(fb.row_text(19), format!("<!{}!>", "#".repeat(20)));
    assert_eq!(fb.get(2, 19).unwrap().ink, Ink::Alert);
    // The falling piece keeps being drawn during the animation.
    let (x, y) = snap.current.board_cells()[0];
    assert_eq!(fb.get(2 + 2 * x as u16, y as u16).unwrap().ch, '[');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot();
    snap.score = 1234;
    snap.high_score = 5000;
    snap.level = 2;
    snap.lines = 10;
    snap.game_time_secs = 75;
    snap.held = Some(PieceInstance::spawn(PieceKind::T, 10));

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = text(&fb);
    assert!(all.contains("SCORE 1234"));
    assert!(all.contains("HIGH 5000"));
    assert!(all.contains("LEVEL 2"));
    assert!(all.contains("LINES 10"));
    assert!(all.contains("TIME 1:15"));
    assert!(all.contains("NEXT"));
    assert!(all.contains("HOLD"));

    // Narrow viewport: no panel.
    let fb = GameView::default().render(&snap, FIT);
    assert!(!text(&fb).contains("SCORE"));
}

#[test]
fn term_view_centers_board_on_large_viewports() {
    let fb = GameView::default().render(&snapshot(), Viewport::new(24, 30));
    // start_y = (30 - 22) / 2 = 4
    assert!(fb.row_text(4).starts_with("<!"));
    assert!(!fb.row_text(3).contains("<!"));
}

#[test]
fn term_view_pause_overlay() {
    let mut snap = snapshot();
    snap.phase = GamePhase::Paused;
    let all = text(&GameView::default().render(&snap, FIT));
    assert!(all.contains("PAUSED"));
    // Paused games hide the falling piece.
    assert!(!all.contains("::"));
}

#[test]
fn term_view_game_over_countdown() {
    let mut snap = snapshot();
    snap.phase = GamePhase::GameOver;
    snap.restart_countdown = Some(3);
    let all = text(&GameView::default().render(&snap, FIT));
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("RESTART IN 3"));
}

#[test]
fn term_view_survives_tiny_viewports() {
    let snap = snapshot();
    for (w, h) in [(0, 0), (1, 1), (10, 5), (23, 21)] {
        let fb = GameView::default().render(&snap, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let snap = snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, FIT, &mut fb);
    assert_eq!(fb, view.render(&snap, FIT));
}
