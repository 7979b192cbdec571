//! Thread-safe store engine.
//!
//! The store ties state, reducer, middleware, and subscribers together.
//! It allows multiple readers to take state snapshots concurrently while
//! serializing transitions through a write lock. No lock is held while
//! middleware or subscriber callbacks run, so callbacks may re-enter the
//! store (including dispatching further actions) without deadlocking.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::action::Action;
use crate::error::StoreError;
use crate::middleware::{Middleware, Next};
use crate::reducer::Reducer;
use crate::state::State;
use crate::subscription::{SubscriberId, SubscriberSet, Subscription};

/// The stateful engine owning current state and orchestrating
/// dispatch and subscription.
///
/// Cloning a `Store` is cheap and yields another handle to the same
/// engine, which is how it is shared across threads.
pub struct Store<S: State, A: Action<S>> {
    inner: Arc<StoreInner<S, A>>,
}

struct StoreInner<S: State, A: Action<S>> {
    state: RwLock<S>,
    reducer: Reducer<S, A>,
    /// Ordered dispatch chain, fixed at construction. First entry is
    /// outermost, last entry sits closest to the reducer. Never
    /// rebuilt per dispatch.
    chain: Vec<Arc<dyn Middleware<S, A>>>,
    subscribers: Arc<RwLock<SubscriberSet<S>>>,
}

impl<S: State, A: Action<S>> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, A: Action<S>> Store<S, A> {
    /// Create a store from a reducer, an initial state, and an ordered
    /// (possibly empty) middleware list.
    ///
    /// The reducer must be pure; in particular it must not call back
    /// into the store, since it runs inside the state write lock.
    pub fn new(
        reducer: impl Fn(S, &A) -> Result<S, StoreError> + Send + Sync + 'static,
        initial_state: S,
        middleware: Vec<Arc<dyn Middleware<S, A>>>,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial_state),
                reducer: Box::new(reducer),
                chain: middleware,
                subscribers: Arc::new(RwLock::new(SubscriberSet::new())),
            }),
        }
    }

    /// Dispatch an action through the middleware pipeline.
    ///
    /// Runs synchronously: outermost middleware first, then inward to
    /// the terminal stage, which applies the reducer and atomically
    /// swaps the stored state. Subscribers registered at that moment
    /// are then invoked in registration order with a snapshot of the
    /// new state.
    ///
    /// If the reducer rejects the action the error propagates to the
    /// caller, state is left untouched, and no subscriber fires. A
    /// middleware that drops `next` without calling it likewise leaves
    /// state untouched and fires no subscriber, though dispatch still
    /// returns `Ok`.
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        let mut applied = false;
        let result = self.run_stage(0, &action, &mut applied);
        if let Err(err) = &result {
            tracing::trace!(action = action.kind(), error = %err, "dispatch rejected");
        }
        result?;
        if applied {
            self.notify();
        }
        Ok(())
    }

    /// Run the pipeline stage at `index`; past the end of the chain,
    /// apply the reducer and swap the state.
    pub(crate) fn run_stage(
        &self,
        index: usize,
        action: &A,
        applied: &mut bool,
    ) -> Result<(), StoreError> {
        match self.inner.chain.get(index) {
            Some(stage) => stage.dispatch(self, action, Next::new(self, index + 1, applied)),
            None => {
                // Reduce inside the write lock so concurrent dispatches
                // cannot interleave between read and swap.
                let mut guard = self.inner.state.write();
                let next_state = (self.inner.reducer)((*guard).clone(), action)?;
                *guard = next_state;
                *applied = true;
                Ok(())
            }
        }
    }

    /// Snapshot of the current state.
    ///
    /// The returned value is an independent copy; mutating it never
    /// affects the store. Safe to call concurrently with any other
    /// store operation.
    pub fn get_state(&self) -> S {
        self.inner.state.read().clone()
    }

    /// Register a callback invoked after every completed transition.
    ///
    /// The returned [`Subscription`] removes exactly this callback when
    /// unsubscribed. Callbacks run outside the store's locks and may
    /// dispatch further actions.
    pub fn subscribe(
        &self,
        callback: impl Fn(&S) + Send + Sync + 'static,
    ) -> Subscription<S> {
        let id = SubscriberId::next();
        self.inner.subscribers.write().insert(id, Arc::new(callback));
        Subscription::new(id, Arc::downgrade(&self.inner.subscribers))
    }

    /// Invoke subscribers with a snapshot of the freshly swapped state.
    /// Both the state and the subscriber list are snapshotted under
    /// their read locks and released before any callback runs.
    fn notify(&self) {
        let snapshot = self.inner.state.read().clone();
        let callbacks = self.inner.subscribers.read().callbacks();
        for callback in callbacks {
            callback(&snapshot);
        }
    }
}
