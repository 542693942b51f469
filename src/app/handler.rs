use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::InputClosed => {
            tracing::warn!("terminal input closed");
            vec![Action::Quit]
        }
    }
}

/// Carry out an action. `Increment` goes straight to the store.
pub fn apply(state: &mut AppState, action: Action) {
    match action {
        Action::Increment => state.store.increment(),
        Action::Quit => {
            tracing::info!(count = state.count(), "quit requested");
            state.should_quit = true;
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.mark_dirty();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return vec![];
    }

    if state.keymap.is_quit(key.code) {
        vec![Action::Quit]
    } else if state.keymap.is_increment(key.code) {
        vec![Action::Increment]
    } else {
        vec![]
    }
}

fn handle_mouse(state: &AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let app_layout = layout::compute_layout(state.viewport, &state.config.ui.button_label);
    if app_layout
        .button
        .contains(Position::new(mouse.column, mouse.row))
    {
        vec![Action::Increment]
    } else {
        vec![]
    }
}
