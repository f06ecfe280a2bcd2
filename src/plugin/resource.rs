//! Welcome document location and the predicate that recognizes it

use crate::config::{install_bundled_document, WelcomeConfig};
use std::path::{Path, PathBuf};

/// Locates the welcome document on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeResource {
    path: PathBuf,
}

impl WelcomeResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resource for the configured document. Without a configured path, a
    /// missing default document is installed from the embedded copy.
    pub fn from_config(config: &WelcomeConfig) -> Self {
        let resource = Self::new(config.resolved_document_path());
        if config.document_path.is_none() && !resource.exists() {
            match install_bundled_document(resource.path()) {
                Ok(()) => tracing::info!(
                    "Installed welcome document at {}",
                    resource.path().display()
                ),
                Err(e) => tracing::warn!(
                    "Failed to install welcome document at {}: {}",
                    resource.path().display(),
                    e
                ),
            }
        }
        resource
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Recognizes panes bound to a welcome document by path suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualDocument {
    suffix: String,
}

impl VirtualDocument {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn from_config(config: &WelcomeConfig) -> Self {
        Self::new(config.document_suffix.clone())
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// True for a non-empty path ending with the document suffix
    pub fn matches(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        !path.is_empty() && !self.suffix.is_empty() && path.ends_with(self.suffix.as_str())
    }
}
