//! keybinds-rs: plain-text key-binding loader
//!
//! This library reads `NAME = value` configuration files, keeps the
//! `K_`-prefixed key-binding entries, and resolves each symbolic key name
//! (`space`, `a`, `;`, ...) to a key code for an input-dispatch layer.

pub mod config;
pub mod keys;

// Re-export commonly used items
pub use config::{filter_bindings, read_config, resolve, ConfigError, KeyBindings};
pub use keys::Key;
