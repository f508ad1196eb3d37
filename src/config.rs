//! Key-binding configuration loader.
//!
//! Reads plain-text `NAME = value` files and resolves the `K_`-prefixed
//! entries into key codes.

use crate::keys::Key;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Parameter-name prefix marking a key binding.
pub const BINDING_PREFIX: &str = "K_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed line {line_no} (missing '='): '{line}'")]
    MalformedLine { line_no: usize, line: String },

    #[error("Unknown key symbol '{symbol}' bound to '{action}'")]
    UnknownKey { action: String, symbol: String },
}

/// Read a configuration file into a parameter-name to value map.
///
/// Lines starting with `#` are comments; lines of length <= 1 are noise.
/// Each remaining line is split on its first `=`, both halves trimmed and
/// the value lowercased. Entries are not limited to key bindings; the same
/// file may carry unrelated settings.
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>, ConfigError> {
    let path_ref = path.as_ref();
    info!("Reading configuration from: {}", path_ref.display());

    let content = std::fs::read_to_string(path_ref)?;
    let params = parse(&content)?;

    debug!("  - {} parameters", params.len());
    Ok(params)
}

fn parse(content: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut params = HashMap::new();

    for (idx, line) in content.lines().enumerate() {
        if line.starts_with('#') || line.len() <= 1 {
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            return Err(ConfigError::MalformedLine {
                line_no: idx + 1,
                line: line.to_string(),
            });
        };

        params.insert(
            name.trim().to_string(),
            value.trim().to_ascii_lowercase(),
        );
    }

    Ok(params)
}

/// Keep only the key-binding parameters (names starting with `K_`).
pub fn filter_bindings(params: &HashMap<String, String>) -> HashMap<String, String> {
    params
        .iter()
        .filter(|(name, _)| name.starts_with(BINDING_PREFIX))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Resolve every symbolic key name to its key.
///
/// Fails on the first symbol missing from the key table; a binding that
/// silently dropped out would leave a control unreachable with no
/// diagnostic.
pub fn resolve(bindings: HashMap<String, String>) -> Result<HashMap<String, Key>, ConfigError> {
    let mut resolved = HashMap::with_capacity(bindings.len());

    for (action, symbol) in bindings {
        match Key::parse(&symbol) {
            Ok(key) => {
                resolved.insert(action, key);
            }
            Err(_) => return Err(ConfigError::UnknownKey { action, symbol }),
        }
    }

    Ok(resolved)
}

/// Resolved key bindings, queried by action name.
///
/// Immutable once loaded. Action names keep their `K_` prefix, matching
/// the parameter names in the file.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct KeyBindings {
    map: HashMap<String, Key>,
}

impl KeyBindings {
    /// Load and resolve key bindings from a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let params = read_config(path)?;
        let bindings = filter_bindings(&params);
        debug!("  - {} key bindings", bindings.len());

        if bindings.is_empty() {
            warn!("No key bindings found (parameter names must start with '{BINDING_PREFIX}')");
        }

        let map = resolve(bindings)?;
        info!("✓ Resolved {} key bindings", map.len());

        Ok(Self { map })
    }

    /// Load key bindings from `config.txt` in the working directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load("config.txt")
    }

    /// Key bound to the given action, if any.
    pub fn get(&self, action: &str) -> Option<Key> {
        self.map.get(action).copied()
    }

    /// Iterate over (action, key) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Key)> {
        self.map.iter().map(|(action, key)| (action.as_str(), *key))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
