//! Tab collection and the close-current-tab extension point

use crate::hooks::HookPoint;
use crate::host::view::TextView;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Name of the close-current-tab hook point
pub const CLOSE_TAB_HOOK: &str = "close-current-tab";

/// What the main loop should do after a tab-closing command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep running the input/render loop
    Continue,
    /// Leave the main loop and shut down
    Exit,
}

/// Operations on the open tabs that close hooks may use
pub trait TabSet {
    /// Number of open tabs
    fn open_tab_count(&self) -> usize;

    /// Close the active tab. Returns false when there was nothing to close.
    fn close_active_tab(&mut self) -> bool;

    /// Open `path` in a new tab (or focus the tab already showing it)
    fn open_file(&mut self, path: &Path) -> anyhow::Result<()>;
}

/// Replaceable implementation of the close-current-tab command
pub trait CloseTab {
    fn close_current_tab(&mut self, tabs: &mut dyn TabSet) -> LoopControl;
}

/// Built-in close behavior: close the active tab and exit once none are left
#[derive(Debug, Default)]
pub struct DefaultCloseTab;

impl CloseTab for DefaultCloseTab {
    fn close_current_tab(&mut self, tabs: &mut dyn TabSet) -> LoopControl {
        tabs.close_active_tab();
        if tabs.open_tab_count() == 0 {
            LoopControl::Exit
        } else {
            LoopControl::Continue
        }
    }
}

fn builtin_close_tab() -> Box<dyn CloseTab> {
    Box::new(DefaultCloseTab)
}

/// A single open document
#[derive(Debug, Clone)]
pub struct Tab {
    path: Option<PathBuf>,
    name: String,
    pub view: TextView,
}

impl Tab {
    pub fn new(path: Option<PathBuf>, view: TextView) -> Self {
        let name = path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[No Name]".to_string());
        Self { path, name, view }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Name shown in the tab bar
    pub fn display_name(&self) -> &str {
        &self.name
    }
}

/// Ordered collection of open tabs with one active tab
#[derive(Debug, Default)]
pub struct Tabs {
    tabs: Vec<Tab>,
    active: usize,
}

impl Tabs {
    /// Append a tab and make it active
    pub fn push(&mut self, tab: Tab) {
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.get_mut(self.active)
    }

    /// Cycle focus to the next tab
    pub fn next(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + 1) % self.tabs.len();
        }
    }

    /// Cycle focus to the previous tab
    pub fn prev(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
        }
    }

    fn position_of(&self, path: &Path) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.path() == Some(path))
    }
}

impl TabSet for Tabs {
    fn open_tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn close_active_tab(&mut self) -> bool {
        if self.tabs.is_empty() {
            return false;
        }
        let closed = self.tabs.remove(self.active);
        tracing::debug!("Closed tab '{}'", closed.display_name());
        if self.active >= self.tabs.len() {
            self.active = self.tabs.len().saturating_sub(1);
        }
        true
    }

    fn open_file(&mut self, path: &Path) -> anyhow::Result<()> {
        if let Some(index) = self.position_of(path) {
            self.active = index;
            return Ok(());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        tracing::info!("Opened {}", path.display());
        self.push(Tab::new(Some(path.to_path_buf()), TextView::from_text(&text)));
        Ok(())
    }
}

/// Host tab manager: the tab collection plus its close hook point
#[derive(Debug)]
pub struct TabManager {
    tabs: Tabs,
    close_hook: HookPoint<dyn CloseTab>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Tabs::default(),
            close_hook: HookPoint::new(CLOSE_TAB_HOOK, builtin_close_tab),
        }
    }

    /// Close the active tab through whatever close implementation is installed
    pub fn close_current_tab(&mut self) -> LoopControl {
        self.close_hook
            .get_mut()
            .close_current_tab(&mut self.tabs)
    }

    pub fn open_file(&mut self, path: &Path) -> anyhow::Result<()> {
        self.tabs.open_file(path)
    }

    /// Open an unnamed buffer with the given contents
    pub fn open_scratch(&mut self, text: &str) {
        self.tabs.push(Tab::new(None, TextView::from_text(text)));
    }

    pub fn open_tab_count(&self) -> usize {
        self.tabs.open_tab_count()
    }

    pub fn tabs(&self) -> &Tabs {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut Tabs {
        &mut self.tabs
    }

    pub fn close_hook_mut(&mut self) -> &mut HookPoint<dyn CloseTab> {
        &mut self.close_hook
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}
