//! Middleware wrappers around the dispatch pipeline.

use crate::action::Action;
use crate::error::StoreError;
use crate::state::State;
use crate::store::Store;

/// A composable wrapper around dispatch.
///
/// Middleware run in registration order: the first registered is
/// outermost (first on the way in, last on the way out), the last
/// registered sits closest to the reducer. A middleware may run logic
/// before and after forwarding through [`Next::call`], but must not
/// mutate the action or state.
///
/// Dropping `next` without calling it stalls the action: state never
/// updates and no subscriber is notified.
pub trait Middleware<S: State, A: Action<S>>: Send + Sync {
    /// Observe or intercept a dispatch, forwarding via `next`.
    fn dispatch(
        &self,
        store: &Store<S, A>,
        action: &A,
        next: Next<'_, S, A>,
    ) -> Result<(), StoreError>;
}

/// Continuation to the next pipeline stage.
///
/// Consumed by [`Next::call`], so a middleware can forward at most
/// once per dispatch.
pub struct Next<'a, S: State, A: Action<S>> {
    store: &'a Store<S, A>,
    index: usize,
    applied: &'a mut bool,
}

impl<'a, S: State, A: Action<S>> Next<'a, S, A> {
    pub(crate) fn new(store: &'a Store<S, A>, index: usize, applied: &'a mut bool) -> Self {
        Self {
            store,
            index,
            applied,
        }
    }

    /// Forward the action to the next stage.
    ///
    /// The innermost stage applies the reducer and swaps the stored
    /// state.
    pub fn call(self, action: &A) -> Result<(), StoreError> {
        self.store.run_stage(self.index, action, self.applied)
    }
}

/// Reference middleware that logs every dispatch.
///
/// Emits one debug event with the pre-dispatch snapshot before
/// forwarding and one with the post-dispatch snapshot after. Purely
/// observational; demonstrates the contract other middleware
/// (validation, persistence hooks) would follow.
pub struct LoggingMiddleware;

impl<S: State, A: Action<S>> Middleware<S, A> for LoggingMiddleware {
    fn dispatch(
        &self,
        store: &Store<S, A>,
        action: &A,
        next: Next<'_, S, A>,
    ) -> Result<(), StoreError> {
        let previous = store.get_state();
        tracing::debug!(action = action.kind(), state = ?previous, "dispatching action");
        let result = next.call(action);
        let current = store.get_state();
        tracing::debug!(action = action.kind(), state = ?current, "action applied");
        result
    }
}
