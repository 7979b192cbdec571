use crate::state::State;

/// Counter state: a single `i64` count.
///
/// Overflow policy: transitions wrap at the `i64` boundaries
/// (`i64::MAX + 1 == i64::MIN`), keeping every action total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl State for CounterState {}
