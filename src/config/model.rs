//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default, so a missing or partial file still yields the
//! stock counter: a `zustand` title and an `increment` button.

use serde::{Deserialize, Serialize};

use super::keys::{ConfigError, KeyMap};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keys: KeysConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            keys: KeysConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the configured key names into key codes.
    pub fn keymap(&self) -> Result<KeyMap, ConfigError> {
        KeyMap::from_config(&self.keys)
    }
}

/// Text shown by the counter view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_button_label")]
    pub button_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            button_label: default_button_label(),
        }
    }
}

/// Key names bound to the two user actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysConfig {
    #[serde(default = "default_increment_keys")]
    pub increment: Vec<String>,
    #[serde(default = "default_quit_keys")]
    pub quit: Vec<String>,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            increment: default_increment_keys(),
            quit: default_quit_keys(),
        }
    }
}

/// Diagnostic log file settings. Off by default since stdout is the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_title() -> String {
    "zustand".to_string()
}
fn default_button_label() -> String {
    "increment".to_string()
}
fn default_increment_keys() -> Vec<String> {
    vec!["Enter".into(), "Space".into(), "+".into()]
}
fn default_quit_keys() -> Vec<String> {
    vec!["q".into(), "Esc".into()]
}
fn default_log_dir() -> String {
    "~/.local/share/tuicounter/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
