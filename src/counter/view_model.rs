use crate::counter::action::CounterAction;
use crate::counter::state::CounterState;
use crate::store::Store;
use crate::subscription::Subscription;

/// Consumer adapter over a counter store.
///
/// Sits between a UI layer and the store: translates user input into
/// dispatches and reads snapshots for rendering. Holds its own store
/// handle, so it can be handed to the UI without any process-wide
/// singleton.
pub struct CounterViewModel {
    store: Store<CounterState, CounterAction>,
}

impl CounterViewModel {
    pub fn new(store: Store<CounterState, CounterAction>) -> Self {
        Self { store }
    }

    pub fn increment(&self) {
        // Counter transitions are total; the reducer cannot reject them.
        let _ = self.store.dispatch(CounterAction::Increment);
    }

    pub fn decrement(&self) {
        let _ = self.store.dispatch(CounterAction::Decrement);
    }

    /// Current count, formatted for display.
    pub fn count_label(&self) -> String {
        self.store.get_state().count.to_string()
    }

    /// Register a re-render trigger, fired after every transition.
    pub fn on_change(
        &self,
        callback: impl Fn(&CounterState) + Send + Sync + 'static,
    ) -> Subscription<CounterState> {
        self.store.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter;

    fn make_view_model() -> CounterViewModel {
        let store = Store::new(counter::reduce, CounterState::default(), Vec::new());
        CounterViewModel::new(store)
    }

    #[test]
    fn label_reflects_dispatches() {
        let vm = make_view_model();
        assert_eq!(vm.count_label(), "0");

        vm.increment();
        vm.increment();
        vm.decrement();
        assert_eq!(vm.count_label(), "1");
    }

    #[test]
    fn on_change_fires_per_transition() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let vm = make_view_model();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_callback = Arc::clone(&fired);
        let _subscription = vm.on_change(move |_| {
            fired_in_callback.fetch_add(1, Ordering::SeqCst);
        });

        vm.increment();
        vm.decrement();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
