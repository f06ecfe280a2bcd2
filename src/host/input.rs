//! Key handling for the host main loop

use crate::host::tabs::{LoopControl, TabManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Apply one key press. `page` is the number of rows PageUp/PageDown move.
///
/// Only Ctrl+Q and a Ctrl+W that the close hook answers with `Exit` stop the loop.
pub fn handle_key(key: KeyEvent, tabs: &mut TabManager, page: usize) -> LoopControl {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => return LoopControl::Exit,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => return tabs.close_current_tab(),
        (KeyCode::Tab, _) => tabs.tabs_mut().next(),
        (KeyCode::BackTab, _) => tabs.tabs_mut().prev(),
        (code, _) => {
            if let Some(tab) = tabs.tabs_mut().active_mut() {
                match code {
                    KeyCode::Down => tab.view.move_down(1),
                    KeyCode::Up => tab.view.move_up(1),
                    KeyCode::PageDown => tab.view.move_down(page),
                    KeyCode::PageUp => tab.view.move_up(page),
                    _ => {}
                }
            }
        }
    }
    LoopControl::Continue
}
