mod button;
mod counter;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, &state.config.ui.button_label);

    counter::render_title(frame, app_layout.title, state);
    counter::render(frame, app_layout.count, state);
    button::render(frame, app_layout.button, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::event::AppEvent;
    use crate::app::handler;
    use crate::config::{AppConfig, KeyMap};
    use crate::store::CounterStore;
    use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;

    const WIDTH: u16 = 40;
    const HEIGHT: u16 = 12;

    fn new_state(store: &CounterStore) -> AppState {
        AppState::new(
            store.clone(),
            AppConfig::default(),
            KeyMap::default(),
            Rect::new(0, 0, WIDTH, HEIGHT),
        )
    }

    fn row_text(buffer: &Buffer, area: Rect) -> String {
        (area.left()..area.right())
            .map(|x| buffer[(x, area.y)].symbol())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Draws the view and returns the text of the count row.
    fn displayed_count(terminal: &mut Terminal<TestBackend>, state: &AppState) -> String {
        terminal.draw(|f| render(f, state)).unwrap();
        let app_layout = layout::compute_layout(state.viewport, &state.config.ui.button_label);
        row_text(terminal.backend().buffer(), app_layout.count)
    }

    fn click_button(state: &mut AppState) {
        let button = layout::compute_layout(state.viewport, &state.config.ui.button_label).button;
        let event = AppEvent::Terminal(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: button.x + button.width / 2,
            row: button.y + 1,
            modifiers: KeyModifiers::NONE,
        }));
        let actions = handler::handle_event(state, event);
        assert_eq!(actions, vec![Action::Increment]);
        for action in actions {
            handler::apply(state, action);
        }
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap()
    }

    #[test]
    fn initial_render_shows_zero() {
        let store = CounterStore::init_counter();
        let state = new_state(&store);
        let mut terminal = terminal();
        assert_eq!(displayed_count(&mut terminal, &state), "0");
    }

    #[test]
    fn render_shows_title_and_button() {
        let store = CounterStore::init_counter();
        let state = new_state(&store);
        let mut terminal = terminal();
        terminal.draw(|f| render(f, &state)).unwrap();

        let app_layout = layout::compute_layout(state.viewport, "increment");
        let buffer = terminal.backend().buffer();
        assert_eq!(row_text(buffer, app_layout.title), "zustand");

        let label_row = Rect {
            y: app_layout.button.y + 1,
            ..app_layout.button
        };
        assert_eq!(row_text(buffer, label_row), "│ increment │");
    }

    #[test]
    fn one_click_shows_one() {
        let store = CounterStore::init_counter();
        let mut state = new_state(&store);
        let mut terminal = terminal();

        click_button(&mut state);
        assert!(state.take_dirty());
        assert_eq!(displayed_count(&mut terminal, &state), "1");
    }

    #[test]
    fn three_clicks_show_three() {
        let store = CounterStore::init_counter();
        let mut state = new_state(&store);
        let mut terminal = terminal();

        for _ in 0..3 {
            click_button(&mut state);
        }
        assert_eq!(displayed_count(&mut terminal, &state), "3");
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn direct_store_increment_is_rendered() {
        let store = CounterStore::init_counter();
        let state = new_state(&store);
        let mut terminal = terminal();
        assert_eq!(displayed_count(&mut terminal, &state), "0");

        store.increment();
        assert!(state.take_dirty());
        assert_eq!(displayed_count(&mut terminal, &state), "1");
    }

    #[test]
    fn display_tracks_every_update() {
        let store = CounterStore::init_counter();
        let mut state = new_state(&store);
        let mut terminal = terminal();

        for expected in 1..=5 {
            click_button(&mut state);
            assert_eq!(displayed_count(&mut terminal, &state), expected.to_string());
            assert_eq!(state.count(), store.get_state().count);
        }
    }
}
