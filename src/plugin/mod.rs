//! Welcome plugin
//!
//! Registers two hooks on the host:
//! - close-current-tab: when the last tab closes, open the welcome document
//!   and keep the main loop running
//! - draw-editor-pane: render welcome documents as a color gradient
//!
//! Either hook is skipped when the registration context does not provide the
//! host object it attaches to.

pub mod overlay;
pub mod resource;
pub mod sentinel;

use crate::config::WelcomeConfig;
use crate::hooks::InstallOutcome;
use crate::host::tabs::TabManager;
use crate::host::ui::Ui;
use overlay::WelcomeOverlay;
use resource::{VirtualDocument, WelcomeResource};
use sentinel::{open_welcome, EmptyStateSentinel, Recovery, RecoveryStats};
use std::cell::Cell;
use std::rc::Rc;

/// Owner name the plugin's hooks are installed under
pub const PLUGIN_ID: &str = "welcome";

/// Host objects available to a plugin at registration
#[derive(Default)]
pub struct RegistrationContext<'a> {
    pub tab_manager: Option<&'a mut TabManager>,
    pub ui: Option<&'a mut Ui>,
}

impl<'a> RegistrationContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab_manager(mut self, tab_manager: &'a mut TabManager) -> Self {
        self.tab_manager = Some(tab_manager);
        self
    }

    pub fn with_ui(mut self, ui: &'a mut Ui) -> Self {
        self.ui = Some(ui);
        self
    }
}

/// State of one hook after registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    Installed,
    /// Installed by an earlier registration; left as it was
    AlreadyInstalled,
    /// The host object for this hook was not provided
    Unavailable,
    /// The plugin is disabled in its configuration
    Disabled,
}

impl From<InstallOutcome> for HookStatus {
    fn from(outcome: InstallOutcome) -> Self {
        match outcome {
            InstallOutcome::Installed => Self::Installed,
            InstallOutcome::AlreadyInstalled => Self::AlreadyInstalled,
        }
    }
}

/// What [`WelcomePlugin::register`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub close_tab: HookStatus,
    pub draw_pane: HookStatus,
    /// Result of the startup open, when one was attempted
    pub startup: Option<Recovery>,
}

pub struct WelcomePlugin {
    config: WelcomeConfig,
    resource: WelcomeResource,
    document: VirtualDocument,
    stats: Rc<Cell<RecoveryStats>>,
}

impl WelcomePlugin {
    pub fn new(config: WelcomeConfig) -> Self {
        let resource = WelcomeResource::from_config(&config);
        let document = VirtualDocument::from_config(&config);
        Self {
            config,
            resource,
            document,
            stats: Rc::new(Cell::new(RecoveryStats::default())),
        }
    }

    pub fn config(&self) -> &WelcomeConfig {
        &self.config
    }

    pub fn resource(&self) -> &WelcomeResource {
        &self.resource
    }

    pub fn document(&self) -> &VirtualDocument {
        &self.document
    }

    /// Totals over every recovery attempt made by this plugin's hooks
    pub fn recovery_stats(&self) -> RecoveryStats {
        self.stats.get()
    }

    /// Install the plugin's hooks into whatever the context provides.
    ///
    /// Registering again with the same host objects changes nothing.
    pub fn register(&self, context: RegistrationContext<'_>) -> Registration {
        if !self.config.enabled {
            tracing::info!("Welcome plugin disabled, no hooks installed");
            return Registration {
                close_tab: HookStatus::Disabled,
                draw_pane: HookStatus::Disabled,
                startup: None,
            };
        }

        let mut startup = None;
        let close_tab = match context.tab_manager {
            Some(tab_manager) => {
                let status = self.install_close_hook(tab_manager);
                if self.config.open_on_startup && tab_manager.open_tab_count() == 0 {
                    startup = Some(self.open_on_startup(tab_manager));
                }
                status
            }
            None => {
                tracing::debug!("No tab manager in registration context, close hook skipped");
                HookStatus::Unavailable
            }
        };

        let draw_pane = match context.ui {
            Some(ui) => self.install_draw_hook(ui),
            None => {
                tracing::debug!("No UI in registration context, draw hook skipped");
                HookStatus::Unavailable
            }
        };

        Registration {
            close_tab,
            draw_pane,
            startup,
        }
    }

    fn install_close_hook(&self, tab_manager: &mut TabManager) -> HookStatus {
        let resource = self.resource.clone();
        let stats = Rc::clone(&self.stats);
        tab_manager
            .close_hook_mut()
            .install(PLUGIN_ID, move |original| {
                Box::new(EmptyStateSentinel::new(original, resource, stats))
            })
            .into()
    }

    fn install_draw_hook(&self, ui: &mut Ui) -> HookStatus {
        let document = self.document.clone();
        let palette = self.config.palette.clone();
        let band_height = self.config.band_height;
        let bold = self.config.bold;
        ui.draw_hook_mut()
            .install(PLUGIN_ID, move |original| {
                Box::new(WelcomeOverlay::new(
                    original,
                    document,
                    palette,
                    band_height,
                    bold,
                ))
            })
            .into()
    }

    fn open_on_startup(&self, tab_manager: &mut TabManager) -> Recovery {
        let recovery = open_welcome(&self.resource, tab_manager.tabs_mut());
        let mut stats = self.stats.get();
        stats.record(recovery);
        self.stats.set(stats);
        recovery
    }
}
