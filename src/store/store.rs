use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use super::reducer::Reducer;

type Subscriber<S> = Rc<dyn Fn(&S)>;

struct Shared<S> {
    state: RefCell<S>,
    subscribers: RefCell<Vec<(usize, Subscriber<S>)>>,
    next_id: Cell<usize>,
    notifying: Cell<bool>,
    pending: Cell<bool>,
}

/// A single-threaded store for managing application state.
///
/// Cloning a store yields another handle to the same state. State can only
/// change through [`Store::dispatch`], which runs the reducer and then calls
/// every subscriber with the new state.
pub struct Store<R: Reducer> {
    shared: Rc<Shared<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: 'static,
{
    /// Create a new store with the given initial state.
    pub fn init(initial: R::State) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(initial),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                notifying: Cell::new(false),
                pending: Cell::new(false),
            }),
            _reducer: PhantomData,
        }
    }

    /// Get a clone of the current state.
    pub fn get_state(&self) -> R::State {
        self.shared.state.borrow().clone()
    }

    /// Read state without cloning it.
    ///
    /// # Panics
    ///
    /// The state stays borrowed while `f` runs, so calling
    /// [`Store::dispatch`] from inside `f` panics. Use [`Store::get_state`]
    /// when the state is needed across a dispatch.
    pub fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        f(&*self.shared.state.borrow())
    }

    /// Run the reducer on the current state and publish the result.
    pub fn dispatch(&self, intent: R::Intent) {
        let current = self.get_state();
        let next = R::reduce(current, intent);
        *self.shared.state.borrow_mut() = next;
        self.notify();
    }

    /// Subscribe to state changes.
    ///
    /// The callback is called with the new state after every dispatch, in
    /// registration order. It stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<R::State>
    where
        F: Fn(&R::State) + 'static,
    {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));

        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }

    // Callbacks get a snapshot and run with no borrow held, so they may
    // read, dispatch or unsubscribe. A dispatch from inside a callback only
    // flags the running round, which then restarts with the newer state so
    // the last call every subscriber sees carries the current state.
    fn notify(&self) {
        let shared = &self.shared;
        if shared.notifying.replace(true) {
            shared.pending.set(true);
            return;
        }
        let _reset = ResetOnDrop(&shared.notifying);

        'round: loop {
            shared.pending.set(false);
            let snapshot = self.get_state();
            let subscribers: Vec<Subscriber<R::State>> = shared
                .subscribers
                .borrow()
                .iter()
                .map(|(_, subscriber)| Rc::clone(subscriber))
                .collect();
            for subscriber in subscribers {
                subscriber(&snapshot);
                if shared.pending.get() {
                    continue 'round;
                }
            }
            break;
        }
    }
}

struct ResetOnDrop<'a>(&'a Cell<bool>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            _reducer: PhantomData,
        }
    }
}

/// RAII guard for a store subscriber. Dropping it unregisters the callback.
pub struct Subscription<S> {
    id: usize,
    shared: Weak<Shared<S>>,
}

impl<S> Drop for Subscription<S> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
