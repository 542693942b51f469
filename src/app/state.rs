use crate::config::{AppConfig, KeyMap};
use crate::store::{CounterState, CounterStore, Subscription};
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;

/// State of the counter view.
///
/// The count itself is never copied here: every render reads it from the
/// store. The view only keeps a subscription that flags it for redraw.
pub struct AppState {
    pub store: CounterStore,
    pub config: AppConfig,
    pub keymap: KeyMap,
    /// Last known terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub should_quit: bool,
    dirty: Rc<Cell<bool>>,
    _subscription: Subscription<CounterState>,
}

impl AppState {
    pub fn new(store: CounterStore, config: AppConfig, keymap: KeyMap, viewport: Rect) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let subscription = store.subscribe({
            let dirty = Rc::clone(&dirty);
            move |state: &CounterState| {
                tracing::debug!(count = state.count, "store changed");
                dirty.set(true);
            }
        });
        tracing::debug!(subscribers = store.subscriber_count(), "view subscribed");

        Self {
            store,
            config,
            keymap,
            viewport,
            should_quit: false,
            dirty,
            _subscription: subscription,
        }
    }

    pub fn count(&self) -> i64 {
        self.store.count()
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state(store: &CounterStore) -> AppState {
        AppState::new(
            store.clone(),
            AppConfig::default(),
            KeyMap::default(),
            Rect::new(0, 0, 40, 12),
        )
    }

    #[test]
    fn starts_clean_at_zero() {
        let store = CounterStore::init_counter();
        let state = new_state(&store);
        assert_eq!(state.count(), 0);
        assert!(!state.take_dirty());
    }

    #[test]
    fn store_update_flags_redraw() {
        let store = CounterStore::init_counter();
        let state = new_state(&store);

        store.increment();
        assert_eq!(state.count(), 1);
        assert!(state.take_dirty());
        assert!(!state.take_dirty());
    }

    #[test]
    fn teardown_unsubscribes() {
        let store = CounterStore::init_counter();
        let state = new_state(&store);
        assert_eq!(store.subscriber_count(), 1);

        drop(state);
        assert_eq!(store.subscriber_count(), 0);
        store.increment();
        assert_eq!(store.count(), 1);
    }
}
