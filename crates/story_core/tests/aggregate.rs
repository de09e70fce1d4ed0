use std::cell::RefCell;

use story_core::{
    compute_aggregate, transition, AggregateCache, AggregateObserver, CollectionState, Event,
    NoopObserver, Record,
};

#[derive(Default)]
struct CountingObserver {
    calls: RefCell<Vec<u64>>,
}

impl AggregateObserver for CountingObserver {
    fn recomputed(&self, _state: &CollectionState, value: u64) {
        self.calls.borrow_mut().push(value);
    }
}

fn record(object_id: &str, num_comments: u64) -> Record {
    Record {
        object_id: object_id.to_string(),
        title: format!("story {object_id}"),
        url: String::new(),
        author: String::new(),
        num_comments,
        points: 0,
    }
}

fn loaded(data: Vec<Record>) -> CollectionState {
    CollectionState {
        data,
        is_loading: false,
        is_error: false,
    }
}

#[test]
fn sums_comment_counts() {
    let state = loaded(vec![record("0", 3), record("1", 2)]);
    assert_eq!(compute_aggregate(&state), 5);
}

#[test]
fn empty_collection_sums_to_zero() {
    assert_eq!(compute_aggregate(&CollectionState::new()), 0);
}

#[test]
fn sum_saturates_instead_of_overflowing() {
    let state = loaded(vec![record("0", u64::MAX), record("1", 1)]);
    assert_eq!(compute_aggregate(&state), u64::MAX);
}

#[test]
fn cache_does_not_recompute_unchanged_state() {
    let observer = CountingObserver::default();
    let mut cache = AggregateCache::new();
    let state = loaded(vec![record("0", 3), record("1", 2)]);

    assert_eq!(cache.get(&state, &observer), 5);
    assert_eq!(cache.get(&state, &observer), 5);
    assert_eq!(cache.get(&state.clone(), &observer), 5);

    assert_eq!(*observer.calls.borrow(), vec![5]);
}

#[test]
fn cache_recomputes_after_each_transition() {
    let observer = CountingObserver::default();
    let mut cache = AggregateCache::new();
    let state = loaded(vec![record("0", 3), record("1", 2)]);

    assert_eq!(cache.get(&state, &observer), 5);
    let state = transition(state, Event::RemoveRecord(record("0", 3)));
    assert_eq!(cache.get(&state, &observer), 2);
    let state = transition(state, Event::FetchStarted);
    assert_eq!(cache.get(&state, &observer), 2);
    assert_eq!(cache.get(&state, &observer), 2);

    assert_eq!(*observer.calls.borrow(), vec![5, 2, 2]);
}

#[test]
fn noop_observer_still_returns_value() {
    let mut cache = AggregateCache::new();
    let state = loaded(vec![record("0", 7)]);
    assert_eq!(cache.get(&state, &NoopObserver), 7);
}
