use crate::{Event, Record, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The UI finished its first render; triggers the initial fetch.
    Mounted,
    /// User edited the search input.
    SearchInput(String),
    /// User submitted the current search input.
    SearchSubmitted,
    /// Orchestrator progress for one fetch cycle.
    Fetch { request_id: RequestId, event: Event },
    /// User clicked the remove button on a row.
    RemoveClicked(Record),
    /// Clock tick carrying the formatted wall-clock time.
    Tick(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
