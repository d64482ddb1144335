//! E2E tests rendering both widgets into an in-memory cell grid.
//!
//! Run with:
//!   cargo test --test `render_e2e` -- --nocapture

mod common;

use std::sync::Once;

use common::{BoundedSurface, grid, label, typed};
use termwidgets::{
    CellGrid, Color, InputEvent, InputOptions, LogLevel, MAX_CODEPOINTS, NodeId, RenderMode,
    Style, TextInput, Tree, TreeEvent, TreeGlyphs, TreeOptions, Viewport, set_log_callback,
};
use tracing::{Level, debug, info, span, warn};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .try_init();

        set_log_callback(|level, message| match level {
            LogLevel::Debug => debug!(target: "termwidgets", "{message}"),
            LogLevel::Info => info!(target: "termwidgets", "{message}"),
            LogLevel::Warn | LogLevel::Error => warn!(target: "termwidgets", "{message}"),
        });
    });
}

/// docs
/// ├──guide
/// │  ├──intro
/// │  └──usage
/// └──api
/// src
/// └──main.rs
fn project_tree() -> (Tree, NodeId) {
    let mut tree = Tree::new();
    tree.insert_sibling(
        label("docs")
            .with_child(label("guide").with_child(label("intro")).with_child(label("usage")))
            .with_child(label("api")),
    )
    .unwrap();
    let src = tree.insert_sibling(label("src").with_child(label("main.rs"))).unwrap();
    let main_rs = tree.children(src)[0];
    (tree, main_rs)
}

// ============================================================================
// Text Input
// ============================================================================

#[test]
fn e2e_input_empty_takes_one_row() {
    init_logging();
    let (mut grid, vp) = grid(80, 24);
    let mut input = TextInput::new();
    let rows = input.render(&mut grid, vp);
    info!(rows, "rendered empty input");
    assert_eq!(rows, 1);
    assert_eq!(grid.cursor(), Some((0, 23)));
}

#[test]
fn e2e_input_full_buffer_fills_screen() {
    init_logging();
    let span = span!(Level::INFO, "full_buffer");
    let _enter = span.enter();

    let (mut grid, vp) = grid(80, 24);
    let mut input = TextInput::new();
    for _ in 0..MAX_CODEPOINTS {
        input.handle(InputEvent::Insert('x'));
    }
    let rows = input.render(&mut grid, vp);
    debug!(rows, offset = input.scroll_offset(), "rendered");

    assert_eq!(rows, 24);
    for y in 0..23 {
        assert_eq!(grid.row_text(y), "x".repeat(79), "row {y}");
    }
    // Last line holds the remaining 25 codepoints
    assert_eq!(grid.row_text(23), "x".repeat(25));
    assert_eq!(grid.cursor(), Some((25, 23)));
}

#[test]
fn e2e_input_wide_glyph_moves_to_next_line() {
    init_logging();
    let (mut grid, vp) = grid(6, 2);
    let mut input = typed("abcde😄");
    assert_eq!(input.render(&mut grid, vp), 2);
    insta::assert_snapshot!(grid.to_text(), @r"
    abcde
    😄
    ");
    assert_eq!(grid.cursor(), Some((2, 1)));
}

#[test]
fn e2e_input_wide_glyph_fits_exactly() {
    init_logging();
    let (mut grid, vp) = grid(6, 2);
    let mut input = typed("abcd😄ef");
    assert_eq!(input.render(&mut grid, vp), 2);
    insta::assert_snapshot!(grid.to_text(), @r"
    abcd😄
    ef
    ");
    assert_eq!(grid.cursor(), Some((2, 1)));
}

#[test]
fn e2e_input_scrolls_with_cursor() {
    init_logging();
    let (mut grid, vp) = grid(4, 2);
    let mut input = typed("abcdefghi");
    input.handle(InputEvent::MoveLeft);
    assert_eq!(input.render(&mut grid, vp), 2);
    assert_eq!(input.scroll_offset(), 1);
    insta::assert_snapshot!(grid.to_text(), @r"
    def
    ghi
    ");
    assert_eq!(grid.cursor(), Some((2, 1)));
}

#[test]
fn e2e_input_short_content_bottom_anchored() {
    init_logging();
    let (mut grid, vp) = grid(6, 3);
    let mut input = typed("abcd😄ef");
    assert_eq!(input.render(&mut grid, vp), 2);
    assert_eq!(grid.to_text(), "\nabcd😄\nef");
}

#[test]
fn e2e_input_in_offset_viewport() {
    init_logging();
    let (mut grid, _) = grid(20, 5);
    let vp = Viewport::new(&grid, 5, 10, 1, 4);
    let mut input = typed("hello world");
    // 4 glyphs per line over columns 5..10
    assert_eq!(input.render(&mut grid, vp), 3);
    assert_eq!(input.scroll_offset(), 0);
    assert_eq!(grid.row_text(0), "");
    assert_eq!(grid.row_text(1), "     hell");
    assert_eq!(grid.row_text(2), "     o wo");
    assert_eq!(grid.row_text(3), "     rld");
    assert_eq!(grid.row_text(4), "");
    assert_eq!(grid.cursor(), Some((8, 3)));
}

#[test]
fn e2e_input_width_ten_holds_nine_glyphs() {
    init_logging();
    let (mut grid, vp) = grid(10, 2);
    let mut input = typed("abcdefghijk");
    assert_eq!(input.render(&mut grid, vp), 2);
    // Nine per line: the column after the cursor is kept for a wide glyph
    insta::assert_snapshot!(grid.to_text(), @r"
    abcdefghi
    jk
    ");
    assert_eq!(grid.cursor(), Some((2, 1)));
}

#[test]
fn e2e_input_horizontal_mode() {
    init_logging();
    let (mut grid, vp) = grid(8, 1);
    let options = InputOptions::new()
        .mode(RenderMode::Horizontal)
        .style(Style::bg(Color::Indexed(8)));
    let mut input = TextInput::with_options(options);
    input.set_text("scrolling text").unwrap();

    assert_eq!(input.render(&mut grid, vp), 1);
    assert_eq!(grid.row_text(0), "ng text");
    assert_eq!(grid.cursor(), Some((7, 0)));
    assert_eq!(
        grid.get(0, 0).map(|cell| cell.style.bg),
        Some(Color::Indexed(8))
    );

    for _ in 0..14 {
        input.handle(InputEvent::MoveLeft);
    }
    grid.clear();
    input.render(&mut grid, vp);
    assert_eq!(grid.row_text(0), "scrolli");
    assert_eq!(grid.cursor(), Some((0, 0)));
}

#[test]
fn e2e_input_measure_matches_render() {
    init_logging();
    let (mut grid, vp) = grid(10, 4);
    let mut input = typed("a fairly long line of text");
    let measured = input.measure(vp);
    let offset = input.scroll_offset();
    let rendered = input.render(&mut grid, vp);
    assert_eq!(measured, rendered);
    assert_eq!(offset, input.scroll_offset());
}

// ============================================================================
// Tree View
// ============================================================================

#[test]
fn e2e_tree_full_render() {
    init_logging();
    let (mut tree, _) = project_tree();
    let (mut grid, vp) = grid(12, 7);
    tree.render(&mut grid, vp);
    insta::assert_snapshot!(grid.to_text(), @r"
    docs
    ├──guide
    │  ├──intro
    │  └──usage
    └──api
    src
    └──main.rs
    ");
}

#[test]
fn e2e_tree_scrolls_to_selection() {
    init_logging();
    let span = span!(Level::INFO, "tree_scroll");
    let _enter = span.enter();

    let (mut tree, main_rs) = project_tree();
    let (mut grid, vp) = grid(12, 3);

    tree.handle(TreeEvent::JumpTo(main_rs));
    tree.render(&mut grid, vp);
    debug!(offset = tree.scroll_offset(), "after jump");
    assert_eq!(tree.scroll_offset(), 4);
    insta::assert_snapshot!(grid.to_text(), @r"
    └──api
    src
    └──main.rs
    ");

    for _ in 0..3 {
        tree.handle(TreeEvent::NavigateUp);
    }
    grid.clear();
    tree.render(&mut grid, vp);
    debug!(offset = tree.scroll_offset(), "after navigating up");
    assert_eq!(tree.scroll_offset(), 3);
    insta::assert_snapshot!(grid.to_text(), @r"
    │  └──usage
    └──api
    src
    ");
}

#[test]
fn e2e_tree_scroll_resets_at_top() {
    init_logging();
    let (mut tree, main_rs) = project_tree();
    let (mut grid, vp) = grid(12, 3);
    tree.jump_to(main_rs);
    tree.render(&mut grid, vp);

    let first = tree.children(tree.root())[0];
    tree.jump_to(first);
    tree.render(&mut grid, vp);
    assert_eq!(tree.scroll_offset(), 0);
}

#[test]
fn e2e_tree_selected_row_highlighted() {
    init_logging();
    let (mut tree, main_rs) = project_tree();
    let (mut grid, vp) = grid(12, 7);
    tree.jump_to(main_rs);
    tree.render(&mut grid, vp);

    let selected_cell = grid.get(3, 6).map(|cell| cell.style);
    assert_eq!(selected_cell, Some(Style::inverse()));
    let other_cell = grid.get(0, 5).map(|cell| cell.style);
    assert_eq!(other_cell, Some(Style::NONE));
}

#[test]
fn e2e_tree_connector_style_and_offset() {
    init_logging();
    let connector = Style::fg(Color::Rgb(90, 90, 90));
    let options = TreeOptions::new()
        .glyphs(TreeGlyphs::ascii())
        .connector_style(connector);
    let mut tree = Tree::with_options(options);
    tree.insert_sibling(label("a").with_child(label("b")).with_child(label("c")))
        .unwrap();

    let (mut grid, _) = grid(12, 5);
    let vp = Viewport::new(&grid, 2, 12, 1, 4);
    tree.render(&mut grid, vp);

    assert_eq!(grid.to_text(), "\n  a\n  |--b\n  `--c\n");
    assert_eq!(grid.get(2, 2).map(|cell| cell.style), Some(connector));
    assert_eq!(grid.get(5, 2).map(|cell| cell.style), Some(Style::NONE));
}

#[test]
fn e2e_empty_viewports_draw_nothing() {
    init_logging();
    let (mut tree, _) = project_tree();
    let mut input = typed("text");
    let (mut grid, _) = grid(10, 10);

    for vp in [
        Viewport::new(&grid, 3, 3, 0, 10),
        Viewport::new(&grid, 0, 10, 7, 7),
        Viewport::new(&grid, 20, 30, 0, 10),
        Viewport::new(&grid, -5, -1, -5, -1),
    ] {
        assert!(vp.is_empty());
        tree.render(&mut grid, vp);
        assert_eq!(input.render(&mut grid, vp), 0);
    }
    assert_eq!(grid.to_text(), "\n".repeat(9));
    assert_eq!(grid.cursor(), None);
}

// ============================================================================
// Surface Bounds
// ============================================================================

#[test]
fn e2e_stale_viewport_clipped_to_surface() {
    init_logging();
    // Viewport computed for a surface that has since shrunk
    let stale = Viewport::full(&CellGrid::new(20, 10));

    let mut surface = BoundedSurface::new(5, 3);
    let mut input = typed("hello world");
    let rows = input.render(&mut surface, stale);
    assert_eq!(rows, 3);
    assert_eq!(surface.grid.to_text(), "hell\no wo\nrld");
    assert_eq!(surface.grid.cursor(), Some((3, 2)));

    let (mut tree, _) = project_tree();
    surface.grid.clear();
    tree.render(&mut surface, stale);
    assert_eq!(surface.grid.to_text(), "docs\n├──gu\n│  ├─");

    let mut input = TextInput::with_options(InputOptions::new().mode(RenderMode::Horizontal));
    input.set_text("horizontal text").unwrap();
    assert_eq!(input.render(&mut surface, stale), 1);

    assert!(
        surface.out_of_bounds.is_empty(),
        "writes outside the surface: {:?}",
        surface.out_of_bounds
    );
}
