use super::reducer::Reducer;
use super::store::Store;

/// State of the counter store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: CounterState, intent: CounterIntent) -> CounterState {
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count + 1,
            },
        }
    }
}

pub type CounterStore = Store<CounterReducer>;

impl Store<CounterReducer> {
    /// Create a counter store starting at zero.
    pub fn init_counter() -> Self {
        Store::init(CounterState::default())
    }

    /// Add one to the count and notify subscribers.
    pub fn increment(&self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn count(&self) -> i64 {
        self.read(|state| state.count)
    }
}
