//! Base trait for actions (requested state transitions).

use crate::state::State;

/// A command describing a requested state transition.
///
/// Actions represent:
/// - User input (button clicks, key presses)
/// - System events (timers, completions)
///
/// Actions are processed by a reducer to produce new states.
pub trait Action<S: State>: Send + Sync + 'static {
    /// Stable tag identifying the action variant.
    ///
    /// Used for logging and diagnostics instead of runtime type
    /// inspection.
    fn kind(&self) -> &'static str;

    /// Produce the successor state.
    ///
    /// Must be pure: no side effects and no shared mutable captures,
    /// since a reducer may invoke it from concurrent dispatches.
    fn apply(&self, state: S) -> S;
}
