//! Story engine: network I/O and the fetch orchestrator that turns its
//! outcome into collection events.
mod engine;
mod fetch;
mod orchestrator;
mod persist;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, ReqwestFetcher, SearchFetcher, SearchResponse};
pub use orchestrator::{run_fetch, ChannelEventSink, EventSink};
pub use persist::{AtomicFileWriter, PersistError};
pub use types::{FailureKind, FetchError, FetchEvent};
