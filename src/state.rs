//! Base trait for application state.

/// Marker trait for state objects held by a store.
///
/// States should be:
/// - Immutable (Clone to create new states; a clone is a full,
///   independent copy — mutating it never affects the store)
/// - Self-contained (all data needed by consumers)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}
