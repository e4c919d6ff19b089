use falltris::core::{shape_for, GameSession, ShapeSnapshot};
use falltris::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use falltris::types::{PieceKind, SessionState};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default();

    // 10x20 cells at 2x1 => 20x20, plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide_in_piece_color() {
    let mut snap = GameSession::new(1).snapshot();
    snap.board[19][0] = PieceKind::I.id();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for x in [1, 2] {
        let glyph = fb.get(x, 20).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, Rgb::new(0xFF, 0x0D, 0x72));
    }
    // Neighbouring empty cell shows the grid dot.
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let mut session = GameSession::new(1);
    session.start();
    let snap = session.snapshot();
    let active = snap.active.unwrap();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    for (x, y, _) in active.cells() {
        let glyph = fb.get(1 + 2 * x as u16, 1 + y as u16).unwrap();
        assert_eq!(glyph.ch, '█');
    }
}

#[test]
fn term_view_draws_side_panel_and_next_preview() {
    let mut session = GameSession::new(1);
    session.start();
    let mut snap = session.snapshot();
    snap.score = 1234;
    snap.lines = 10;
    snap.level = 2;
    snap.next = Some(ShapeSnapshot::from(&shape_for(PieceKind::O)));

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let text = screen_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("LINES"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("NEXT"));

    // Well at x = (60 - 22) / 2 = 19, panel starts two columns past it.
    let panel_x = 19 + 22 + 2;
    assert_eq!(fb.row_text(9).chars().skip(panel_x).take(4).collect::<String>(), "NEXT");
    for (x, y) in [(0, 0), (3, 0), (0, 1), (3, 1)] {
        let glyph = fb.get(panel_x as u16 + x, 10 + y).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, Rgb::of_piece(PieceKind::O));
    }
}

#[test]
fn term_view_skips_panel_on_narrow_viewports() {
    let mut snap = GameSession::new(1).snapshot();
    snap.score = 987654;
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_session_state() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let mut session = GameSession::new(1);

    // Overlay line sits at the vertical middle of the well.
    let idle = view.render(&session.snapshot(), vp);
    assert!(idle.row_text(11).contains("PRESS ENTER"));

    session.start();
    let running = view.render(&session.snapshot(), vp);
    let text = screen_text(&running);
    assert!(!text.contains("PRESS ENTER"));
    assert!(!text.contains("PAUSED"));

    session.toggle_pause();
    let paused = view.render(&session.snapshot(), vp);
    assert!(paused.row_text(11).contains("PAUSED"));

    let mut over = session.snapshot();
    over.state = SessionState::GameOver;
    over.paused = false;
    over.game_over = true;
    over.score = 4200;
    let fb = view.render(&over, vp);
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(fb.row_text(12).contains("SCORE 4200"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSession::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_framebuffer() {
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    let first = fb.clone();

    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!(fb, first);
}
