//! Reducer types for the dispatch pipeline.

use crate::action::Action;
use crate::error::StoreError;
use crate::state::State;

/// The reducer held by a store.
///
/// The reducer is the only place where state transitions happen. It
/// must be a pure function: calling it twice with the same inputs
/// yields equal outputs, and it must not retain the input state.
///
/// A reducer may reject an action with [`StoreError::InvalidTransition`];
/// the store then leaves state untouched and notifies no subscriber.
/// Locking and notification are the store's responsibility, never the
/// reducer's.
pub type Reducer<S, A> = Box<dyn Fn(S, &A) -> Result<S, StoreError> + Send + Sync>;

/// The canonical reducer: delegate the transition to the action itself.
///
/// Total for any [`Action`] whose `apply` is total; never returns an
/// error.
pub fn reduce<S: State, A: Action<S>>(state: S, action: &A) -> Result<S, StoreError> {
    Ok(action.apply(state))
}
