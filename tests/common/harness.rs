// WelcomeTestHarness - virtual terminal environment for end-to-end tests

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fresh_welcome::config::WelcomeConfig;
use fresh_welcome::host::input::handle_key;
use fresh_welcome::host::{EditorView, LoopControl, TabManager, Theme, Ui};
use fresh_welcome::plugin::{Registration, RegistrationContext, WelcomePlugin};
use ratatui::buffer::{Buffer, Cell};
use ratatui::{backend::TestBackend, Terminal};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Terminal layout constants
pub mod layout {
    /// Tab bar is at row 0
    pub const TAB_BAR_ROW: u16 = 0;

    /// Pane content starts at row 1
    pub const CONTENT_START_ROW: u16 = 1;
}

/// Host, plugin and a TestBackend terminal wired together
pub struct WelcomeTestHarness {
    pub tabs: TabManager,
    pub ui: Ui,
    pub plugin: WelcomePlugin,
    terminal: Terminal<TestBackend>,
    temp_dir: TempDir,
    welcome_path: PathBuf,
}

impl WelcomeTestHarness {
    /// Harness with a welcome document containing `welcome_lines`.
    /// The plugin is created but not registered.
    pub fn with_welcome(width: u16, height: u16, welcome_lines: &[&str]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let welcome_path = temp_dir.path().join("Welcome.wlcm");
        std::fs::write(&welcome_path, welcome_lines.join("\n")).unwrap();
        let config = WelcomeConfig {
            document_path: Some(welcome_path.clone()),
            ..WelcomeConfig::default()
        };
        Self::with_config(width, height, config, temp_dir, welcome_path)
    }

    /// Harness whose configured welcome document does not exist
    pub fn without_welcome_file(width: u16, height: u16) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let welcome_path = temp_dir.path().join("Missing.wlcm");
        let config = WelcomeConfig {
            document_path: Some(welcome_path.clone()),
            ..WelcomeConfig::default()
        };
        Self::with_config(width, height, config, temp_dir, welcome_path)
    }

    fn with_config(
        width: u16,
        height: u16,
        config: WelcomeConfig,
        temp_dir: TempDir,
        welcome_path: PathBuf,
    ) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        Self {
            tabs: TabManager::new(),
            ui: Ui::new(Theme::dark()),
            plugin: WelcomePlugin::new(config),
            terminal,
            temp_dir,
            welcome_path,
        }
    }

    /// Register the plugin with both the tab manager and the UI
    pub fn register(&mut self) -> Registration {
        self.plugin.register(
            RegistrationContext::new()
                .with_tab_manager(&mut self.tabs)
                .with_ui(&mut self.ui),
        )
    }

    pub fn welcome_path(&self) -> &Path {
        &self.welcome_path
    }

    /// Write a file into the temp dir and open it in a new tab
    pub fn open_file(&mut self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        self.tabs.open_file(&path).unwrap();
        path
    }

    pub fn close_tab(&mut self) -> LoopControl {
        self.tabs.close_current_tab()
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> LoopControl {
        let page = self.content_height().max(1) as usize;
        handle_key(KeyEvent::new(code, modifiers), &mut self.tabs, page)
    }

    /// Rows available to the editor pane
    pub fn content_height(&self) -> u16 {
        self.buffer().area.height - layout::CONTENT_START_ROW
    }

    pub fn render(&mut self) {
        let Self {
            terminal, ui, tabs, ..
        } = self;
        terminal
            .draw(|frame| {
                let area = frame.area();
                ui.render(frame.buffer_mut(), area, tabs.tabs_mut());
            })
            .unwrap();
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn cell(&self, x: u16, y: u16) -> &Cell {
        self.buffer().cell((x, y)).unwrap()
    }

    /// Text of one screen row
    pub fn screen_row(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    pub fn screen_to_string(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.screen_row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    /// Path of the active tab, if it is backed by a file
    pub fn active_path(&self) -> Option<PathBuf> {
        self.tabs
            .tabs()
            .active()
            .and_then(|tab| tab.path().map(Path::to_path_buf))
    }

    pub fn active_scroll(&self) -> usize {
        self.tabs
            .tabs()
            .active()
            .map(|tab| tab.view.scroll_offset_y())
            .unwrap_or(0)
    }

    pub fn set_active_cursor_line(&mut self, line: usize) {
        if let Some(tab) = self.tabs.tabs_mut().active_mut() {
            tab.view.set_cursor_line(line);
        }
    }
}
