//! Unidirectional-data-flow state container.
//!
//! This crate provides a typed store for implementing unidirectional
//! data flow: all state transitions go through a single dispatch
//! pipeline, and consumers observe results through snapshots and
//! change subscriptions.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Middleware ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                               │
//!    └───────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of application state
//! - **Action**: Commands describing requested transitions
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Middleware**: Ordered wrappers around dispatch for cross-cutting
//!   concerns (logging, validation)
//! - **Store**: The engine owning current state, the dispatch pipeline,
//!   and change subscribers
//!
//! The store is safe to share across threads: state lives behind a
//! reader/writer lock, and no lock is held while user callbacks run.

pub mod action;
pub mod counter;
pub mod error;
pub mod middleware;
pub mod reducer;
pub mod state;
pub mod store;
pub mod subscription;

pub use action::Action;
pub use error::StoreError;
pub use middleware::{LoggingMiddleware, Middleware, Next};
pub use reducer::{reduce, Reducer};
pub use state::State;
pub use store::Store;
pub use subscription::{SubscriberId, Subscription};
