//! Minimal editor host
//!
//! Owns the tab collection, per-tab views, the theme, and the two extension
//! points plugins can wrap: close-current-tab and draw-editor-pane.

#[cfg(feature = "runtime")]
pub mod input;
pub mod tabs;
pub mod theme;
pub mod ui;
pub mod view;

pub use tabs::{CloseTab, DefaultCloseTab, LoopControl, Tab, TabManager, TabSet, Tabs};
pub use theme::{SyntaxToken, Theme};
pub use ui::{BufferSurface, DrawPane, Surface, TextPaneRenderer, Ui};
pub use view::{EditorView, TextView};
