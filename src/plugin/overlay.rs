//! Gradient rendering for welcome documents
//!
//! Panes bound to a welcome document are drawn with their raw lines cycling
//! through theme colors in bands of rows. Every other pane goes to the
//! original renderer untouched.
//!
//! Scrolling follows the cursor exactly like the built-in renderer, and the
//! text starts after a blank margin as wide as the line-number gutter, so
//! moving between a normal file and the welcome tab does not shift anything.

use crate::host::theme::{SyntaxToken, Theme};
use crate::host::ui::{follow_cursor, gutter_width, DrawPane, Surface};
use crate::host::view::EditorView;
use crate::plugin::resource::VirtualDocument;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use std::path::Path;

/// Theme colors resolved for one draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCycle {
    styles: Vec<Style>,
    band_height: usize,
}

impl ColorCycle {
    pub fn from_theme(
        theme: &Theme,
        palette: &[SyntaxToken],
        band_height: usize,
        bold: bool,
    ) -> Self {
        let mut styles: Vec<Style> = palette
            .iter()
            .map(|&token| {
                let style = Style::default().fg(theme.syntax_color(token));
                if bold {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                }
            })
            .collect();
        if styles.is_empty() {
            styles.push(Style::default().fg(theme.editor_fg));
        }
        Self {
            styles,
            band_height: band_height.max(1),
        }
    }

    /// Rows after which the colors repeat
    pub fn period(&self) -> usize {
        self.styles.len() * self.band_height
    }

    /// Palette slot used for a screen row of the pane
    pub fn index_for_row(&self, row: usize) -> usize {
        (row / self.band_height) % self.styles.len()
    }

    pub fn style_for_row(&self, row: usize) -> Style {
        self.styles[self.index_for_row(row)]
    }
}

/// Draw-editor-pane wrapper rendering welcome documents as a gradient
pub struct WelcomeOverlay {
    original: Box<dyn DrawPane>,
    document: VirtualDocument,
    palette: Vec<SyntaxToken>,
    band_height: usize,
    bold: bool,
}

impl WelcomeOverlay {
    pub fn new(
        original: Box<dyn DrawPane>,
        document: VirtualDocument,
        palette: Vec<SyntaxToken>,
        band_height: usize,
        bold: bool,
    ) -> Self {
        Self {
            original,
            document,
            palette,
            band_height,
            bold,
        }
    }

    fn draw_gradient(&self, surface: &mut dyn Surface, view: &mut dyn EditorView, area: Rect) {
        let height = area.height as usize;
        if height == 0 || area.width == 0 {
            return;
        }

        let visual = view.visual_indices();
        follow_cursor(view, &visual, height);

        // Recomputed every frame so theme switches apply immediately
        let colors =
            ColorCycle::from_theme(surface.theme(), &self.palette, self.band_height, self.bold);

        let left_margin = area.x.saturating_add(gutter_width(view.line_count()));
        let right = area.right();
        let scroll = view.scroll_offset_y();

        for row in 0..height {
            let Some(&line) = visual.get(row + scroll) else {
                break;
            };
            let Some(text) = view.line(line) else {
                continue;
            };
            surface.addstr_clipped(
                area.y + row as u16,
                left_margin,
                text,
                colors.style_for_row(row),
                left_margin,
                right,
            );
        }
    }
}

impl DrawPane for WelcomeOverlay {
    fn draw_editor_pane(
        &mut self,
        surface: &mut dyn Surface,
        view: &mut dyn EditorView,
        area: Rect,
        path: Option<&Path>,
        is_active: bool,
    ) {
        match path {
            Some(path) if self.document.matches(path) => {
                tracing::trace!("Drawing welcome gradient for {}", path.display());
                self.draw_gradient(surface, view, area);
            }
            _ => self
                .original
                .draw_editor_pane(surface, view, area, path, is_active),
        }
    }
}
