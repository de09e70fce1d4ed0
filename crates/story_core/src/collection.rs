use crate::{Collection, Record};

/// Tri-state wrapper around the fetched collection.
///
/// `is_loading` and `is_error` are never both set: every transition that
/// raises one clears the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionState {
    pub data: Collection,
    pub is_loading: bool,
    pub is_error: bool,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The only ways a [`CollectionState`] can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchStarted,
    FetchSucceeded(Collection),
    FetchFailed,
    RemoveRecord(Record),
}

/// Pure transition function: applies one event and returns the next state.
///
/// Never triggers a fetch; the caller decides what to do with the result.
pub fn transition(state: CollectionState, event: Event) -> CollectionState {
    match event {
        Event::FetchStarted => CollectionState {
            is_loading: true,
            is_error: false,
            ..state
        },
        Event::FetchSucceeded(payload) => CollectionState {
            data: payload,
            is_loading: false,
            is_error: false,
        },
        Event::FetchFailed => CollectionState {
            is_loading: false,
            is_error: true,
            ..state
        },
        Event::RemoveRecord(target) => {
            // Matches by id only; every duplicate of the id goes.
            let data = state
                .data
                .into_iter()
                .filter(|record| record.object_id != target.object_id)
                .collect();
            CollectionState { data, ..state }
        }
    }
}
