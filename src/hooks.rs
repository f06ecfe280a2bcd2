//! Hook points: replaceable host operations with access to the original
//!
//! A host exposes each extensible operation as a `HookPoint` holding a boxed
//! implementation of a small capability trait. Installing a hook moves the
//! current implementation into a wrapper that keeps it as its fallback, so the
//! original behavior is always invoked explicitly rather than through runtime
//! rebinding.

use std::fmt;

/// Result of a hook installation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The wrapper now sits in front of the previous implementation
    Installed,
    /// The owner already has a wrapper on this hook point; nothing changed
    AlreadyInstalled,
}

/// A named, replaceable implementation of a host operation.
///
/// `T` is the capability trait object (e.g. `dyn CloseTab`). The built-in
/// factory produces the host's own implementation and is used both as the
/// initial value and by [`HookPoint::reset`].
pub struct HookPoint<T: ?Sized> {
    name: &'static str,
    builtin: fn() -> Box<T>,
    current: Box<T>,
    /// Owners in installation order (innermost first)
    owners: Vec<&'static str>,
}

impl<T: ?Sized> HookPoint<T> {
    /// Create a hook point running the built-in implementation
    pub fn new(name: &'static str, builtin: fn() -> Box<T>) -> Self {
        Self {
            name,
            builtin,
            current: builtin(),
            owners: Vec::new(),
        }
    }

    /// Name of the hooked operation (e.g. "close-current-tab")
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Wrap the current implementation.
    ///
    /// `wrap` receives the implementation that was active before this call and
    /// must return the replacement. Each owner may install at most once; a
    /// repeated install is skipped so a wrapper never ends up delegating to
    /// another copy of itself.
    pub fn install<F>(&mut self, owner: &'static str, wrap: F) -> InstallOutcome
    where
        F: FnOnce(Box<T>) -> Box<T>,
    {
        if self.is_installed(owner) {
            tracing::debug!(
                "Hook '{}' already wrapped by '{}', skipping install",
                self.name,
                owner
            );
            return InstallOutcome::AlreadyInstalled;
        }

        // The built-in only occupies the slot while `wrap` runs
        let original = std::mem::replace(&mut self.current, (self.builtin)());
        self.current = wrap(original);
        self.owners.push(owner);

        tracing::info!("Installed '{}' hook for '{}'", self.name, owner);
        InstallOutcome::Installed
    }

    /// Drop every installed wrapper and go back to the built-in implementation
    pub fn reset(&mut self) {
        if !self.owners.is_empty() {
            tracing::info!(
                "Resetting '{}' hook, removing {:?}",
                self.name,
                self.owners
            );
        }
        self.current = (self.builtin)();
        self.owners.clear();
    }

    /// Whether `owner` has a wrapper installed on this hook point
    pub fn is_installed(&self, owner: &str) -> bool {
        self.owners.iter().any(|o| *o == owner)
    }

    /// Owners in installation order
    pub fn owners(&self) -> &[&'static str] {
        &self.owners
    }

    /// The implementation hosts should invoke
    pub fn get(&self) -> &T {
        &self.current
    }

    /// Mutable access to the implementation hosts should invoke
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.current
    }
}

impl<T: ?Sized> fmt::Debug for HookPoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookPoint")
            .field("name", &self.name)
            .field("owners", &self.owners)
            .finish_non_exhaustive()
    }
}
