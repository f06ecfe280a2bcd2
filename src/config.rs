//! Welcome plugin configuration
//!
//! Loaded from a JSON file. Every field has a default, so a partial file only
//! overrides what it names.

use crate::host::theme::SyntaxToken;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory under the user data dir holding the default welcome document
pub const RESOURCE_DIR_NAME: &str = "fresh-welcome";

/// File name of the default welcome document
pub const DEFAULT_DOCUMENT_NAME: &str = "Welcome.wlcm";

/// Welcome document shipped in the crate's `resources/` directory
pub const BUNDLED_DOCUMENT_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/resources/Welcome.wlcm");

/// Contents of the bundled welcome document, for installs without the source tree
pub const BUNDLED_DOCUMENT: &str = include_str!("../resources/Welcome.wlcm");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WelcomeConfig {
    /// Install the welcome hooks at all
    pub enabled: bool,

    /// Welcome document to open when the last tab closes.
    /// Defaults to `<data dir>/fresh-welcome/Welcome.wlcm` when that file
    /// exists, else the document bundled with the crate.
    pub document_path: Option<PathBuf>,

    /// Panes showing a file whose path ends with this suffix get the gradient rendering
    pub document_suffix: String,

    /// Open the welcome document at registration when no tabs are open
    pub open_on_startup: bool,

    /// Theme colors cycled through by the gradient, in order
    pub palette: Vec<SyntaxToken>,

    /// Consecutive rows sharing one palette color
    pub band_height: usize,

    /// Draw welcome text in bold
    pub bold: bool,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            document_path: None,
            document_suffix: ".wlcm".to_string(),
            open_on_startup: false,
            palette: vec![
                SyntaxToken::Keyword,
                SyntaxToken::Type,
                SyntaxToken::Constant,
                SyntaxToken::String,
                SyntaxToken::Comment,
            ],
            band_height: 2,
            bold: true,
        }
    }
}

impl WelcomeConfig {
    /// Load and validate a config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.as_ref().display(), e)))?;

        let config: Self =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::ValidationError(
                "palette must name at least one color".to_string(),
            ));
        }

        if self.band_height == 0 {
            return Err(ConfigError::ValidationError(
                "band_height must be greater than 0".to_string(),
            ));
        }

        if self.document_suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "document_suffix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Welcome document path: the configured one, else [`default_document_path`]
    pub fn resolved_document_path(&self) -> PathBuf {
        self.document_path
            .clone()
            .unwrap_or_else(default_document_path)
    }
}

/// `<data dir>/fresh-welcome/Welcome.wlcm`, falling back to the working directory
pub fn user_document_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(RESOURCE_DIR_NAME)
        .join(DEFAULT_DOCUMENT_NAME)
}

/// The user's copy of the welcome document if there is one, else the bundled
/// document. When neither exists the user path is returned so it can be
/// populated with [`install_bundled_document`].
pub fn default_document_path() -> PathBuf {
    let user = user_document_path();
    if user.is_file() {
        return user;
    }
    let bundled = PathBuf::from(BUNDLED_DOCUMENT_PATH);
    if bundled.is_file() {
        return bundled;
    }
    user
}

/// Write the embedded welcome document to `path`, creating parent directories
pub fn install_bundled_document(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, BUNDLED_DOCUMENT)
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
