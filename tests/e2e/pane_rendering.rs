//! E2E tests for the welcome gradient and pass-through pane rendering

use crate::common::harness::{layout, WelcomeTestHarness};
use fresh_welcome::host::{EditorView, Theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};

const CONTENT_X: u16 = 4;

fn palette_colors(theme: &Theme) -> [Color; 5] {
    [
        theme.syntax_keyword,
        theme.syntax_type,
        theme.syntax_constant,
        theme.syntax_string,
        theme.syntax_comment,
    ]
}

fn welcome_lines(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("line{}", i)).collect()
}

fn harness_on_welcome(width: u16, height: u16, lines: &[String]) -> WelcomeTestHarness {
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut harness = WelcomeTestHarness::with_welcome(width, height, &lines);
    harness.register();
    let path = harness.welcome_path().to_path_buf();
    harness.tabs.open_file(&path).unwrap();
    harness
}

/// Ordinary files render exactly as they would without the plugin
#[test]
fn test_other_files_render_identically_with_plugin() {
    let content = "fn main() {\n    println!(\"hi 世界\");\n}\n";

    let mut plain = WelcomeTestHarness::with_welcome(30, 8, &["Welcome"]);
    plain.open_file("main.rs", content);
    plain.render();

    let mut hooked = WelcomeTestHarness::with_welcome(30, 8, &["Welcome"]);
    hooked.open_file("main.rs", content);
    hooked.register();
    hooked.render();

    assert_eq!(plain.buffer(), hooked.buffer());
    hooked.assert_screen_contains("1 │ fn main() {");
}

/// Welcome text starts after a blank gutter-width margin, in bold theme colors
#[test]
fn test_welcome_rows_use_banded_theme_colors() {
    let lines = welcome_lines(9);
    let mut harness = harness_on_welcome(30, 14, &lines);
    harness.render();

    let theme = Theme::dark();
    let colors = palette_colors(&theme);
    let top = layout::CONTENT_START_ROW;

    // Single-digit line count: 1 digit + 3 columns of margin, no line numbers
    assert_eq!(harness.screen_row(top), "    line0                     ");
    for row in 0..9u16 {
        let cell = harness.cell(CONTENT_X, top + row);
        assert_eq!(cell.fg, colors[(row as usize / 2) % 5], "row {}", row);
        assert!(cell.modifier.contains(Modifier::BOLD));
    }
    // Past the end of the document nothing is drawn
    assert_eq!(harness.screen_row(top + 9).trim(), "");
}

/// Colors repeat every ten rows
#[test]
fn test_gradient_period_is_ten_rows() {
    let lines = welcome_lines(40);
    let mut harness = harness_on_welcome(20, 31, &lines);
    harness.render();

    let top = layout::CONTENT_START_ROW;
    // Two-digit line count moves the text one column right
    for row in 0..20u16 {
        assert_eq!(
            harness.cell(5, top + row).fg,
            harness.cell(5, top + row + 10).fg,
            "row {} and row {} should share a color",
            row,
            row + 10
        );
    }
}

/// The pane scrolls to keep the cursor visible, like the built-in renderer
#[test]
fn test_welcome_scroll_follows_cursor() {
    let lines = welcome_lines(40);
    let mut harness = harness_on_welcome(20, 11, &lines);
    harness.set_active_cursor_line(25);

    harness.render();

    assert_eq!(harness.content_height(), 10);
    assert_eq!(harness.active_scroll(), 16);
    assert!(harness.screen_row(layout::CONTENT_START_ROW).starts_with("     line16"));
    assert!(harness.screen_row(layout::CONTENT_START_ROW + 9).starts_with("     line25"));

    harness.set_active_cursor_line(3);
    harness.render();
    assert_eq!(harness.active_scroll(), 3);
}

/// Colors come from whatever theme is active when the frame is drawn
#[test]
fn test_theme_change_applies_on_next_frame() {
    let lines = welcome_lines(3);
    let mut harness = harness_on_welcome(20, 6, &lines);
    harness.render();
    assert_eq!(
        harness.cell(CONTENT_X, layout::CONTENT_START_ROW).fg,
        Theme::dark().syntax_keyword
    );

    harness.ui.set_theme(Theme::light());
    harness.render();

    assert_eq!(
        harness.cell(CONTENT_X, layout::CONTENT_START_ROW).fg,
        Theme::light().syntax_keyword
    );
}

/// Wide characters at the right edge are dropped whole, never split
#[test]
fn test_wide_characters_clipped_at_pane_edge() {
    let lines = vec!["日本語のテキスト".to_string()];
    let mut harness = harness_on_welcome(9, 3, &lines);
    harness.render();

    let row = layout::CONTENT_START_ROW;
    // Columns 4-5 and 6-7 hold two characters; column 8 cannot fit a third
    assert_eq!(harness.cell(4, row).symbol(), "日");
    assert_eq!(harness.cell(6, row).symbol(), "本");
    assert_eq!(harness.cell(8, row).symbol(), " ");
}

/// A pane that does not start at column 0, as in a vertical split
#[test]
fn test_welcome_in_offset_split_pane() {
    let lines = welcome_lines(120);
    let mut harness = harness_on_welcome(30, 6, &lines);
    harness.set_active_cursor_line(119);

    let screen = Rect::new(0, 0, 30, 4);
    let pane = Rect::new(10, 0, 20, 4);
    let mut buf = Buffer::empty(screen);
    let tab = harness.tabs.tabs_mut().active_mut().unwrap();
    let path = tab.path().map(|p| p.to_path_buf());
    harness
        .ui
        .draw_editor_pane(&mut buf, &mut tab.view, pane, path.as_deref(), true);

    assert_eq!(tab.view.scroll_offset_y(), 116);
    let row = |y: u16| -> String { (0..30).map(|x| buf[(x, y)].symbol()).collect() };
    // Three-digit line count: text starts 6 columns into the pane
    assert_eq!(row(0), "                line116       ");
    assert_eq!(row(3), "                line119       ");
    assert_eq!(buf[(16, 0)].fg, Theme::dark().syntax_keyword);
    assert_eq!(buf[(16, 2)].fg, Theme::dark().syntax_type);
    // Columns left of the pane are untouched
    assert_eq!(buf[(9, 0)], Buffer::empty(screen)[(9, 0)]);
}
