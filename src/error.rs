//! Error types for store operations.

use thiserror::Error;

/// Errors that can surface from [`Store::dispatch`](crate::Store::dispatch).
///
/// A missing reducer is not represented here: construction takes the
/// reducer by value, so a store without one cannot exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The reducer determined the action is inapplicable to the
    /// current state. State remains unchanged and no subscriber fires.
    #[error("action '{action}' is not applicable to the current state")]
    InvalidTransition { action: &'static str },
}
