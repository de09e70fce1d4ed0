use crate::CollectionState;

/// Total comment count across the collection, saturating at `u64::MAX`.
pub fn compute_aggregate(state: &CollectionState) -> u64 {
    state
        .data
        .iter()
        .fold(0u64, |total, record| total.saturating_add(record.num_comments))
}

/// Hook invoked each time the cached aggregate is actually recomputed.
pub trait AggregateObserver {
    fn recomputed(&self, state: &CollectionState, value: u64);
}

/// Observer that ignores every recomputation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AggregateObserver for NoopObserver {
    fn recomputed(&self, _state: &CollectionState, _value: u64) {}
}

/// Memoizes [`compute_aggregate`] keyed on the value of the input state.
///
/// Returns the cached value while the state compares equal to the last
/// input; the observer only hears about real recomputations.
#[derive(Debug, Default, Clone)]
pub struct AggregateCache {
    memo: Option<(CollectionState, u64)>,
}

impl AggregateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, state: &CollectionState, observer: &dyn AggregateObserver) -> u64 {
        if let Some((key, value)) = &self.memo {
            if key == state {
                return *value;
            }
        }

        let value = compute_aggregate(state);
        observer.recomputed(state, value);
        self.memo = Some((state.clone(), value));
        value
    }
}
