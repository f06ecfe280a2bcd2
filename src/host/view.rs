//! Per-tab editor view state: line buffer, cursor, folds and vertical scroll

use std::ops::Range;

/// What pane renderers may read from, and adjust on, a tab's view.
///
/// Renderers only ever touch the scroll offset; the line buffer and cursor
/// belong to the editing commands.
pub trait EditorView {
    /// Visual row -> logical line mapping for the whole buffer.
    ///
    /// Lines hidden by folds are absent, so `visual_indices()[row]` is the
    /// logical line shown on visual row `row`.
    fn visual_indices(&self) -> Vec<usize>;

    /// Logical line of the primary cursor
    fn cursor_line(&self) -> usize;

    /// First visual row shown at the top of the pane
    fn scroll_offset_y(&self) -> usize;

    fn set_scroll_offset_y(&mut self, offset: usize);

    /// Number of logical lines in the buffer
    fn line_count(&self) -> usize;

    /// Text of a logical line, without its line terminator
    fn line(&self, index: usize) -> Option<&str>;
}

/// In-memory text view used by the host's tabs
#[derive(Debug, Clone, Default)]
pub struct TextView {
    lines: Vec<String>,
    cursor_line: usize,
    scroll_offset_y: usize,
    /// Folded regions; the first line of each range stays visible, the rest are hidden
    folds: Vec<Range<usize>>,
}

impl TextView {
    /// Build a view from file contents. An empty text still has one (empty) line.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            ..Self::default()
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            ..Self::default()
        }
    }

    /// Place the cursor on a logical line, clamped to the buffer
    pub fn set_cursor_line(&mut self, line: usize) {
        self.cursor_line = line.min(self.lines.len().saturating_sub(1));
    }

    /// Move the cursor down by `count` visible lines
    pub fn move_down(&mut self, count: usize) {
        let visual = self.visual_indices();
        let row = self.cursor_visual_row(&visual);
        if let Some(&line) = visual.get((row + count).min(visual.len().saturating_sub(1))) {
            self.cursor_line = line;
        }
    }

    /// Move the cursor up by `count` visible lines
    pub fn move_up(&mut self, count: usize) {
        let visual = self.visual_indices();
        let row = self.cursor_visual_row(&visual);
        if let Some(&line) = visual.get(row.saturating_sub(count)) {
            self.cursor_line = line;
        }
    }

    /// Fold `range`, keeping its first line visible.
    ///
    /// Ranges shorter than two lines have nothing to hide and are ignored.
    pub fn fold(&mut self, range: Range<usize>) {
        let end = range.end.min(self.lines.len());
        if end <= range.start + 1 {
            return;
        }
        self.folds.push(range.start..end);
    }

    fn is_hidden(&self, line: usize) -> bool {
        self.folds
            .iter()
            .any(|fold| line > fold.start && line < fold.end)
    }

    /// Visual row of the cursor, or the row of the nearest visible line above it
    fn cursor_visual_row(&self, visual: &[usize]) -> usize {
        visual
            .iter()
            .rposition(|&line| line <= self.cursor_line)
            .unwrap_or(0)
    }
}

impl EditorView for TextView {
    fn visual_indices(&self) -> Vec<usize> {
        (0..self.lines.len())
            .filter(|&line| !self.is_hidden(line))
            .collect()
    }

    fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    fn scroll_offset_y(&self) -> usize {
        self.scroll_offset_y
    }

    fn set_scroll_offset_y(&mut self, offset: usize) {
        self.scroll_offset_y = offset;
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}
