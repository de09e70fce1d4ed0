use story_logging::story_debug;

use crate::{AppState, Effect, Event, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.is_mounted() {
                return (state, Vec::new());
            }
            state.mark_mounted();
            vec![run_fetch(&mut state)]
        }
        Msg::SearchInput(query) => {
            // Typing never fetches; it only updates and persists the query.
            if state.set_query(query) {
                vec![Effect::PersistQuery(state.query().to_string())]
            } else {
                Vec::new()
            }
        }
        Msg::SearchSubmitted => {
            if state.query().trim().is_empty() {
                return (state, Vec::new());
            }
            // A failed fetch is retried even when the endpoint is unchanged.
            if state.submit_query() || state.stories().is_error {
                vec![run_fetch(&mut state)]
            } else {
                story_debug!("Endpoint unchanged; skipping refetch");
                Vec::new()
            }
        }
        Msg::Fetch { request_id, event } => {
            if state.latest_request() != Some(request_id) {
                story_debug!(
                    "Discarding stale fetch event request_id={} latest={:?}",
                    request_id,
                    state.latest_request()
                );
                return (state, Vec::new());
            }
            state.apply_event(event);
            Vec::new()
        }
        Msg::RemoveClicked(record) => {
            state.apply_event(Event::RemoveRecord(record));
            Vec::new()
        }
        Msg::Tick(clock) => {
            state.set_clock(clock);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn run_fetch(state: &mut AppState) -> Effect {
    let request_id = state.issue_request();
    let endpoint = state.endpoint().clone();
    story_debug!("Issuing request_id={} endpoint={}", request_id, endpoint);
    Effect::RunFetch {
        request_id,
        endpoint,
    }
}
