//! Application state container.
//!
//! A [`Store`] owns one state value and changes it only through a
//! [`Reducer`]. Views register callbacks with [`Store::subscribe`] and are
//! notified after every transition.

pub mod counter;
pub mod reducer;
mod store;

pub use counter::{CounterState, CounterStore};
pub use store::Subscription;
