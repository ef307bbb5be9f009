//! Store seam shared by every page state.
//!
//! A [`Store`] owns exactly one state value and applies actions to it in
//! submission order. Views never hold their own copy; they read the state
//! back after each dispatch or subscribe to be notified.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::explanation::{Explanation, RequestTicket};

/// A state value with a closed set of pure transitions.
pub trait Reducer: Default {
    /// Closed set of transitions for this state.
    type Action: fmt::Debug;

    /// Apply one transition, producing the next state.
    #[must_use]
    fn reduce(self, action: Self::Action) -> Self;
}

/// A state that carries an explanation sub-state.
pub trait ExplanationHost: Reducer {
    /// Explanation sub-state.
    fn explanation(&self) -> &Explanation;

    /// Action that settles the request identified by `ticket`.
    fn settle_action(ticket: RequestTicket, outcome: Result<String, String>) -> Self::Action;
}

type Listener<S> = Box<dyn Fn(&S) + Send>;

/// Single-writer owner of one state value.
pub struct Store<S: Reducer> {
    state: S,
    listeners: Vec<Listener<S>>,
    dispatched: u64,
}

impl<S: Reducer> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Reducer> Store<S> {
    /// Create a store around an initial state.
    pub fn new(state: S) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            dispatched: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Number of actions applied so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&mut self, action: S::Action) {
        tracing::debug!(action = ?action, "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
        self.dispatched += 1;
        for listener in &self.listeners {
            listener(&self.state);
        }
    }

    /// Register a callback run after every dispatch.
    pub fn subscribe(&mut self, listener: impl Fn(&S) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl<S: ExplanationHost> Store<S> {
    /// Dispatch a begin action and return the ticket it issued.
    ///
    /// Returns `None` unless this dispatch started a new request, so an
    /// unrelated action sent while another request is pending never borrows
    /// that request's ticket.
    pub fn begin_explanation(&mut self, begin: S::Action) -> Option<RequestTicket> {
        let before = self.state.explanation().current_ticket();
        self.dispatch(begin);
        let explanation = self.state.explanation();
        let issued = explanation.current_ticket();
        if explanation.is_pending() && issued != before {
            issued
        } else {
            tracing::warn!("begin action did not start a new request");
            None
        }
    }

    /// Dispatch the settlement for `ticket`.
    ///
    /// Returns whether the settlement was applied: the ticket was current and
    /// not yet settled.
    pub fn settle_explanation(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<String, String>,
    ) -> bool {
        let accepted = self.state.explanation().accepts(ticket);
        self.dispatch(S::settle_action(ticket, outcome));
        accepted
    }
}

impl<S: Reducer + fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("dispatched", &self.dispatched)
            .finish()
    }
}

/// Shared reference to a store, for async callers.
///
/// The lock is only held for the duration of one closure and is never held
/// across an await point.
pub struct StoreHandle<S: Reducer> {
    inner: Arc<Mutex<Store<S>>>,
}

impl<S: Reducer> Clone for StoreHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Reducer> Default for StoreHandle<S> {
    fn default() -> Self {
        Self::new(Store::default())
    }
}

impl<S: Reducer> StoreHandle<S> {
    /// Wrap a store for sharing.
    pub fn new(store: Store<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Store<S>> {
        // Reducers are pure, so a panic mid-dispatch cannot leave a torn state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store<S>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Dispatch a single action.
    pub fn dispatch(&self, action: S::Action) {
        self.lock().dispatch(action);
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.lock().state().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Counter(i64);

    #[derive(Debug)]
    enum CounterAction {
        Add(i64),
        Reset,
    }

    impl Reducer for Counter {
        type Action = CounterAction;

        fn reduce(self, action: CounterAction) -> Self {
            match action {
                CounterAction::Add(n) => Self(self.0 + n),
                CounterAction::Reset => Self(0),
            }
        }
    }

    #[test]
    fn test_actions_apply_in_order() {
        let mut store = Store::<Counter>::default();
        store.dispatch(CounterAction::Add(2));
        store.dispatch(CounterAction::Reset);
        store.dispatch(CounterAction::Add(5));
        assert_eq!(store.state(), &Counter(5));
        assert_eq!(store.dispatched(), 3);
    }

    #[test]
    fn test_subscribers_see_every_dispatch() {
        let seen = Arc::new(AtomicUsize::new(0));
        let mut store = Store::<Counter>::default();
        let counter = Arc::clone(&seen);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CounterAction::Add(1));
        store.dispatch(CounterAction::Add(1));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_handle_shares_state() {
        let handle = StoreHandle::<Counter>::default();
        let other = handle.clone();
        other.dispatch(CounterAction::Add(7));
        assert_eq!(handle.snapshot(), Counter(7));
    }
}
