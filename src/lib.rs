//! Welcome screen extension for the fresh terminal editor
//!
//! The crate contains a small editor host exposing two extension points
//! (closing the current tab and drawing an editor pane) and the welcome
//! plugin that wraps them. See [`plugin::WelcomePlugin::register`].

pub mod config;
pub mod hooks;
pub mod host;
pub mod plugin;
pub mod primitives;

#[cfg(feature = "runtime")]
pub mod services;
