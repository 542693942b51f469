//! Key name parsing for the `[keys]` config section.

use crossterm::event::KeyCode;
use thiserror::Error;

use super::model::KeysConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("empty key name in [keys].{binding}")]
    EmptyKey { binding: String },
    #[error("unknown key name {name:?} in [keys].{binding}")]
    UnknownKey { binding: String, name: String },
}

/// Key codes bound to each user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub increment: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl KeyMap {
    pub fn from_config(keys: &KeysConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            increment: parse_keys("increment", &keys.increment)?,
            quit: parse_keys("quit", &keys.quit)?,
        })
    }

    pub fn is_increment(&self, code: KeyCode) -> bool {
        self.increment.contains(&code)
    }

    pub fn is_quit(&self, code: KeyCode) -> bool {
        self.quit.contains(&code)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            increment: vec![KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('+')],
            quit: vec![KeyCode::Char('q'), KeyCode::Esc],
        }
    }
}

fn parse_keys(binding: &str, names: &[String]) -> Result<Vec<KeyCode>, ConfigError> {
    names.iter().map(|name| parse_key(binding, name)).collect()
}

/// Parse a key name such as `Enter`, `F5` or `+`.
///
/// Named keys are case-insensitive. Anything that is a single character maps
/// to that character as typed.
pub fn parse_key(binding: &str, name: &str) -> Result<KeyCode, ConfigError> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (None, _) => {
            return Err(ConfigError::EmptyKey {
                binding: binding.to_string(),
            })
        }
        (Some(c), None) => return Ok(KeyCode::Char(c)),
        _ => {}
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => KeyCode::F(n),
            _ => {
                return Err(ConfigError::UnknownKey {
                    binding: binding.to_string(),
                    name: name.to_string(),
                })
            }
        },
    };
    Ok(code)
}
