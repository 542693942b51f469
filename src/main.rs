mod app;
mod config;
mod logging;
mod store;
mod ui;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::config::KeyMap;
use crate::store::CounterStore;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    let keymap = cfg.keymap().context("Invalid [keys] section in config")?;

    if let Some(path) = logging::init(&cfg.logging) {
        tracing::info!(log_file = %path.display(), "logging enabled");
    }
    tracing::info!(config = %config::config_path().display(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, keymap).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    keymap: KeyMap,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let store = CounterStore::init_counter();
    let size = terminal.size()?;
    let mut state = AppState::new(
        store,
        cfg,
        keymap,
        Rect::new(0, 0, size.width, size.height),
    );

    // Spawn terminal input task
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if event_tx.send(AppEvent::Terminal(event)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        for action in handler::handle_event(&mut state, event) {
            handler::apply(&mut state, action);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if the store or viewport changed)
        if state.take_dirty() {
            terminal.draw(|f| ui::render(f, &state))?;
        }
    }

    tracing::info!(count = state.count(), "shutting down");
    Ok(())
}
