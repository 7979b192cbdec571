use crate::action::Action;
use crate::counter::state::CounterState;

/// Counter transitions. Stateless commands; new variants extend the
/// domain without touching the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// Increment the count by 1.
    Increment,
    /// Decrement the count by 1.
    Decrement,
}

impl Action<CounterState> for CounterAction {
    fn kind(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }

    fn apply(&self, state: CounterState) -> CounterState {
        match self {
            Self::Increment => CounterState {
                count: state.count.wrapping_add(1),
            },
            Self::Decrement => CounterState {
                count: state.count.wrapping_sub(1),
            },
        }
    }
}
