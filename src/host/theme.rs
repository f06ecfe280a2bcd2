//! Color themes
//!
//! Only the colors the pane renderers consume are modeled here.

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Syntax highlight categories a theme assigns colors to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxToken {
    Keyword,
    Type,
    Constant,
    String,
    Comment,
}

/// Active editor color theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    pub editor_bg: Color,
    pub editor_fg: Color,
    pub line_number_fg: Color,
    pub current_line_number_fg: Color,

    pub tab_active_fg: Color,
    pub tab_active_bg: Color,
    pub tab_inactive_fg: Color,
    pub tab_inactive_bg: Color,

    pub syntax_keyword: Color,
    pub syntax_type: Color,
    pub syntax_constant: Color,
    pub syntax_string: Color,
    pub syntax_comment: Color,
}

impl Theme {
    /// Built-in theme names accepted by [`Theme::from_name`]
    pub const BUILTIN_OPTIONS: &'static [&'static str] = &["dark", "light"];

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            editor_bg: Color::Rgb(30, 30, 30),
            editor_fg: Color::Rgb(212, 212, 212),
            line_number_fg: Color::Rgb(100, 100, 100),
            current_line_number_fg: Color::Rgb(200, 200, 200),
            tab_active_fg: Color::Yellow,
            tab_active_bg: Color::Blue,
            tab_inactive_fg: Color::White,
            tab_inactive_bg: Color::DarkGray,
            syntax_keyword: Color::Rgb(86, 156, 214),
            syntax_type: Color::Rgb(78, 201, 176),
            syntax_constant: Color::Rgb(181, 206, 168),
            syntax_string: Color::Rgb(206, 145, 120),
            syntax_comment: Color::Rgb(106, 153, 85),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            editor_bg: Color::Rgb(255, 255, 255),
            editor_fg: Color::Rgb(0, 0, 0),
            line_number_fg: Color::Rgb(140, 140, 140),
            current_line_number_fg: Color::Rgb(0, 0, 0),
            tab_active_fg: Color::Black,
            tab_active_bg: Color::Cyan,
            tab_inactive_fg: Color::Black,
            tab_inactive_bg: Color::Gray,
            syntax_keyword: Color::Rgb(0, 0, 255),
            syntax_type: Color::Rgb(38, 127, 153),
            syntax_constant: Color::Rgb(9, 134, 88),
            syntax_string: Color::Rgb(163, 21, 21),
            syntax_comment: Color::Rgb(0, 128, 0),
        }
    }

    /// Look up a built-in theme by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Color this theme assigns to a syntax category
    pub fn syntax_color(&self, token: SyntaxToken) -> Color {
        match token {
            SyntaxToken::Keyword => self.syntax_keyword,
            SyntaxToken::Type => self.syntax_type,
            SyntaxToken::Constant => self.syntax_constant,
            SyntaxToken::String => self.syntax_string,
            SyntaxToken::Comment => self.syntax_comment,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
