pub mod keys;
pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use keys::KeyMap;
pub use model::{AppConfig, LoggingConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tuicounter")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).context("Failed to parse config file")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_reads_sections() {
        let config = parse_config("[ui]\ntitle = \"counter\"\n").unwrap();
        assert_eq!(config.ui.title, "counter");
        assert_eq!(config.ui.button_label, "increment");
    }

    #[test]
    fn malformed_toml_is_reported_with_context() {
        let err = parse_config("[ui\ntitle = ").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse config file");
        assert!(err.chain().count() >= 2);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let err = parse_config("[keys]\nquit = \"q\"\n").unwrap_err();
        assert!(err.chain().any(|cause| cause.to_string().contains("quit")));
    }
}
