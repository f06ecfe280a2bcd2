//! Screen drawing: clipped text surface, tab bar, and the editor pane hook point

use crate::hooks::HookPoint;
use crate::host::tabs::Tabs;
use crate::host::theme::Theme;
use crate::host::view::EditorView;
use crate::primitives::display_width::clip_graphemes;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use std::path::Path;

/// Name of the draw-editor-pane hook point
pub const DRAW_PANE_HOOK: &str = "draw-editor-pane";

/// Drawing target handed to pane renderers
pub trait Surface {
    /// Draw `text` at `(row, col)`, keeping only graphemes that fit entirely
    /// inside columns `[min_x, max_x)`. Rows outside the surface are ignored.
    fn addstr_clipped(
        &mut self,
        row: u16,
        col: u16,
        text: &str,
        style: Style,
        min_x: u16,
        max_x: u16,
    );

    /// Theme active for this frame
    fn theme(&self) -> &Theme;
}

/// [`Surface`] writing into a ratatui buffer
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    theme: &'a Theme,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, theme: &'a Theme) -> Self {
        Self { buf, theme }
    }
}

impl Surface for BufferSurface<'_> {
    fn addstr_clipped(
        &mut self,
        row: u16,
        col: u16,
        text: &str,
        style: Style,
        min_x: u16,
        max_x: u16,
    ) {
        let area = self.buf.area;
        if row < area.top() || row >= area.bottom() {
            return;
        }
        let min_x = min_x.max(area.left());
        let max_x = max_x.min(area.right());
        if min_x >= max_x {
            return;
        }

        for grapheme in clip_graphemes(text, col, min_x, max_x) {
            if let Some(cell) = self.buf.cell_mut((grapheme.column, row)) {
                cell.set_symbol(grapheme.symbol).set_style(style);
            }
            // Cells covered by the right half of a wide character
            for offset in 1..grapheme.width {
                if let Some(cell) = self.buf.cell_mut((grapheme.column + offset, row)) {
                    cell.reset();
                }
            }
        }
    }

    fn theme(&self) -> &Theme {
        self.theme
    }
}

/// Replaceable implementation of the editor pane renderer
pub trait DrawPane {
    /// Draw `view` into `area`. `path` is the file backing the pane's active
    /// tab, if any; `is_active` tells whether the pane has focus.
    fn draw_editor_pane(
        &mut self,
        surface: &mut dyn Surface,
        view: &mut dyn EditorView,
        area: Rect,
        path: Option<&Path>,
        is_active: bool,
    );
}

/// Gutter width for a buffer: the line-number digits plus " │ "
pub fn gutter_width(line_count: usize) -> u16 {
    (line_count.to_string().len() + 3) as u16
}

/// Adjust the view's scroll offset so the cursor row is one of the `height`
/// visible rows. Returns the cursor's visual row.
///
/// A cursor on a line missing from `visual` (e.g. hidden inside a fold) is
/// treated as being on row 0.
pub fn follow_cursor(view: &mut dyn EditorView, visual: &[usize], height: usize) -> usize {
    let cursor_line = view.cursor_line();
    let cursor_row = visual
        .iter()
        .position(|&line| line == cursor_line)
        .unwrap_or(0);
    if height == 0 {
        return cursor_row;
    }

    if cursor_row < view.scroll_offset_y() {
        view.set_scroll_offset_y(cursor_row);
    }
    if cursor_row >= view.scroll_offset_y() + height {
        view.set_scroll_offset_y(cursor_row - (height - 1));
    }
    cursor_row
}

/// Built-in pane renderer: line-number gutter followed by the raw line text
#[derive(Debug, Default)]
pub struct TextPaneRenderer;

impl DrawPane for TextPaneRenderer {
    fn draw_editor_pane(
        &mut self,
        surface: &mut dyn Surface,
        view: &mut dyn EditorView,
        area: Rect,
        _path: Option<&Path>,
        is_active: bool,
    ) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let height = area.height as usize;
        let visual = view.visual_indices();
        follow_cursor(view, &visual, height);

        let theme = surface.theme();
        let text_style = Style::default().fg(theme.editor_fg).bg(theme.editor_bg);
        let number_style = Style::default().fg(theme.line_number_fg).bg(theme.editor_bg);
        let current_number_style = Style::default()
            .fg(theme.current_line_number_fg)
            .bg(theme.editor_bg)
            .add_modifier(Modifier::BOLD);

        let digits = view.line_count().to_string().len();
        let content_x = area.x.saturating_add(gutter_width(view.line_count()));
        let right = area.right();

        for row in 0..height {
            let Some(&line) = visual.get(row + view.scroll_offset_y()) else {
                break;
            };
            let y = area.y + row as u16;
            let style = if is_active && line == view.cursor_line() {
                current_number_style
            } else {
                number_style
            };
            let number = format!("{:>digits$} │ ", line + 1);
            surface.addstr_clipped(y, area.x, &number, style, area.x, right);

            let text = view.line(line).unwrap_or_default();
            surface.addstr_clipped(y, content_x, text, text_style, content_x, right);
        }
    }
}

fn builtin_draw_pane() -> Box<dyn DrawPane> {
    Box::new(TextPaneRenderer)
}

/// Host UI: theme, tab bar and the editor pane hook point
#[derive(Debug)]
pub struct Ui {
    theme: Theme,
    draw_hook: HookPoint<dyn DrawPane>,
}

impl Ui {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            draw_hook: HookPoint::new(DRAW_PANE_HOOK, builtin_draw_pane),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn draw_hook_mut(&mut self) -> &mut HookPoint<dyn DrawPane> {
        &mut self.draw_hook
    }

    /// Clear `area` and draw one editor pane through the installed renderer
    pub fn draw_editor_pane(
        &mut self,
        buf: &mut Buffer,
        view: &mut dyn EditorView,
        area: Rect,
        path: Option<&Path>,
        is_active: bool,
    ) {
        let area = area.intersection(buf.area);
        clear_area(buf, area, Style::default().fg(self.theme.editor_fg).bg(self.theme.editor_bg));

        let mut surface = BufferSurface::new(buf, &self.theme);
        self.draw_hook
            .get_mut()
            .draw_editor_pane(&mut surface, view, area, path, is_active);
    }

    /// Draw the tab bar on the first row of `area` and the active tab below it
    pub fn render(&mut self, buf: &mut Buffer, area: Rect, tabs: &mut Tabs) {
        if area.height == 0 {
            return;
        }
        let bar = Rect::new(area.x, area.y, area.width, 1);
        self.render_tab_bar(buf, bar, tabs);

        let pane = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        let Some(tab) = tabs.active_mut() else {
            clear_area(buf, pane, Style::default().bg(self.theme.editor_bg));
            return;
        };
        let path = tab.path().map(Path::to_path_buf);
        self.draw_editor_pane(buf, &mut tab.view, pane, path.as_deref(), true);
    }

    fn render_tab_bar(&self, buf: &mut Buffer, bar: Rect, tabs: &Tabs) {
        let theme = &self.theme;
        clear_area(buf, bar, Style::default().bg(theme.tab_inactive_bg));

        let active = tabs.active_index();
        let mut surface = BufferSurface::new(buf, theme);
        let mut x = bar.x;
        for (index, tab) in tabs.iter().enumerate() {
            let label = format!(" {} ", tab.display_name());
            let style = if index == active {
                Style::default()
                    .fg(theme.tab_active_fg)
                    .bg(theme.tab_active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.tab_inactive_fg).bg(theme.tab_inactive_bg)
            };
            surface.addstr_clipped(bar.y, x, &label, style, bar.x, bar.right());
            x = x.saturating_add(crate::primitives::display_width::str_width(&label) as u16 + 1);
            if x >= bar.right() {
                break;
            }
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

fn clear_area(buf: &mut Buffer, area: Rect, style: Style) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_style(style);
            }
        }
    }
}
