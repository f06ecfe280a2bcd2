//! Display width helpers
//!
//! All text the host draws goes through [`clip_graphemes`] so that double-width
//! characters at a clipping edge are dropped whole instead of being split.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns
pub fn str_width(s: &str) -> usize {
    s.width()
}

/// A grapheme placed at a screen column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGrapheme<'a> {
    pub column: u16,
    pub symbol: &'a str,
    pub width: u16,
}

/// Lay `text` out starting at column `start` and keep only the graphemes that
/// fit entirely inside `[min_x, max_x)`.
///
/// Control characters and zero-width graphemes are skipped. A grapheme that
/// starts before `min_x` or ends after `max_x` is dropped, but still advances
/// the column so later graphemes keep their positions.
pub fn clip_graphemes(text: &str, start: u16, min_x: u16, max_x: u16) -> Vec<PlacedGrapheme<'_>> {
    let mut placed = Vec::new();
    let mut column = start as usize;
    let min_x = min_x as usize;
    let max_x = max_x as usize;

    for symbol in text.graphemes(true) {
        if column >= max_x {
            break;
        }
        if symbol.chars().any(char::is_control) {
            continue;
        }
        let width = symbol.width();
        if width == 0 {
            continue;
        }
        if column >= min_x && column + width <= max_x {
            placed.push(PlacedGrapheme {
                column: column as u16,
                symbol,
                width: width as u16,
            });
        }
        column += width;
    }

    placed
}
