//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily file
//! named `tuicounter_<date>.log` in the configured log directory (default:
//! `~/.local/share/tuicounter/logs/`). Nothing is installed unless
//! `[logging] enabled = true`. `RUST_LOG` overrides the configured level.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Returns the log file path when logging is
/// active. Failures only print a warning; the app runs without logs.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let log_dir = expand_home(&config.log_dir);
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: cannot create log directory {}: {}", log_dir.display(), e);
        return None;
    }

    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = log_dir.join(format!("tuicounter_{}.log", date));
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: logging already initialized: {}", e);
        return None;
    }

    Some(path)
}

/// Expand `~` or a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };
    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
