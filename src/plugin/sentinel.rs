//! Empty-state sentinel: keeps the editor alive when the last tab closes
//!
//! After the original close runs, an empty tab collection triggers one
//! best-effort attempt to open the welcome document, and the main loop is
//! told to continue whether or not that attempt worked.

use crate::host::tabs::{CloseTab, LoopControl, TabSet};
use crate::plugin::resource::WelcomeResource;
use std::cell::Cell;
use std::rc::Rc;

/// Outcome of one attempt to open the welcome document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    Opened,
    /// The welcome document does not exist; nothing was opened
    ResourceMissing,
    /// The host failed to open an existing welcome document
    OpenFailed,
}

/// Running totals of recovery attempts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryStats {
    pub opened: usize,
    pub missing: usize,
    pub failed: usize,
}

impl RecoveryStats {
    pub fn record(&mut self, recovery: Recovery) {
        match recovery {
            Recovery::Opened => self.opened += 1,
            Recovery::ResourceMissing => self.missing += 1,
            Recovery::OpenFailed => self.failed += 1,
        }
    }

    pub fn attempts(&self) -> usize {
        self.opened + self.missing + self.failed
    }
}

/// Open the welcome document in a new tab if it exists.
///
/// Failures are logged and reported through the return value only.
pub fn open_welcome(resource: &WelcomeResource, tabs: &mut dyn TabSet) -> Recovery {
    if !resource.exists() {
        tracing::debug!(
            "Welcome document {} not found, leaving no tabs open",
            resource.path().display()
        );
        return Recovery::ResourceMissing;
    }

    match tabs.open_file(resource.path()) {
        Ok(()) => {
            tracing::info!("Opened welcome document {}", resource.path().display());
            Recovery::Opened
        }
        Err(e) => {
            tracing::warn!("Failed to open welcome document: {:#}", e);
            Recovery::OpenFailed
        }
    }
}

/// Close-current-tab wrapper that lands on the welcome document instead of exiting
pub struct EmptyStateSentinel {
    original: Box<dyn CloseTab>,
    resource: WelcomeResource,
    stats: Rc<Cell<RecoveryStats>>,
}

impl EmptyStateSentinel {
    pub fn new(
        original: Box<dyn CloseTab>,
        resource: WelcomeResource,
        stats: Rc<Cell<RecoveryStats>>,
    ) -> Self {
        Self {
            original,
            resource,
            stats,
        }
    }
}

impl CloseTab for EmptyStateSentinel {
    fn close_current_tab(&mut self, tabs: &mut dyn TabSet) -> LoopControl {
        let result = self.original.close_current_tab(tabs);

        if tabs.open_tab_count() > 0 {
            return result;
        }

        let recovery = open_welcome(&self.resource, tabs);
        let mut stats = self.stats.get();
        stats.record(recovery);
        self.stats.set(stats);

        LoopControl::Continue
    }
}
