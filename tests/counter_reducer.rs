use uniflow::counter::{self, CounterAction, CounterState};
use uniflow::Action;

#[test]
fn increment_increment_decrement_yields_one() {
    let mut state = CounterState::default();
    for action in [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
    ] {
        state = counter::reduce(state, &action).expect("counter actions are total");
    }
    assert_eq!(state, CounterState { count: 1 });
}

#[test]
fn final_count_is_sum_of_contributions() {
    let sequence = [
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::Decrement,
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Increment,
    ];
    let expected: i64 = sequence
        .iter()
        .map(|action| match action {
            CounterAction::Increment => 1,
            CounterAction::Decrement => -1,
        })
        .sum();

    let mut state = CounterState::default();
    for action in &sequence {
        state = counter::reduce(state, action).expect("counter actions are total");
    }
    assert_eq!(state.count, expected);
}

#[test]
fn reducer_is_referentially_transparent() {
    let state = CounterState { count: 41 };
    let once = counter::reduce(state, &CounterAction::Increment).unwrap();
    let twice = counter::reduce(state, &CounterAction::Increment).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once.count, 42);
    // The input was copied, not aliased.
    assert_eq!(state.count, 41);
}

#[test]
fn increment_wraps_at_i64_max() {
    let state = CounterState { count: i64::MAX };
    let next = CounterAction::Increment.apply(state);
    assert_eq!(next.count, i64::MIN);
}

#[test]
fn decrement_wraps_at_i64_min() {
    let state = CounterState { count: i64::MIN };
    let next = CounterAction::Decrement.apply(state);
    assert_eq!(next.count, i64::MAX);
}

#[test]
fn action_kinds_are_stable_tags() {
    assert_eq!(CounterAction::Increment.kind(), "increment");
    assert_eq!(CounterAction::Decrement.kind(), "decrement");
}
