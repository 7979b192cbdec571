use crate::counter::action::CounterAction;
use crate::counter::state::CounterState;
use crate::error::StoreError;

/// Counter reducer: delegates the transition to the action. Counter
/// actions are total, so this never returns an error.
pub fn reduce(state: CounterState, action: &CounterAction) -> Result<CounterState, StoreError> {
    crate::reducer::reduce(state, action)
}
