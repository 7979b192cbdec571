//! Reference counter domain.
//!
//! The smallest complete consumer of the store: a single integer
//! counter with increment/decrement actions and a view model that
//! dispatches on behalf of a UI layer.

mod action;
mod reducer;
mod state;
mod view_model;

pub use action::CounterAction;
pub use reducer::reduce;
pub use state::CounterState;
pub use view_model::CounterViewModel;
