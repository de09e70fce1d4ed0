use std::sync::mpsc;

use story_core::{Endpoint, Event, RequestId};
use story_logging::{story_info, story_warn};

use crate::{FetchEvent, SearchFetcher};

/// Receives the events of a fetch cycle.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: FetchEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<FetchEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<FetchEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: FetchEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs one fetch cycle for `endpoint`.
///
/// Emits `FetchStarted` before any I/O, then exactly one of
/// `FetchSucceeded` or `FetchFailed`. Every transport and decoding error
/// ends here as `FetchFailed`.
pub async fn run_fetch(
    fetcher: &dyn SearchFetcher,
    request_id: RequestId,
    endpoint: &Endpoint,
    sink: &dyn EventSink,
) {
    sink.emit(FetchEvent {
        request_id,
        event: Event::FetchStarted,
    });

    let event = match fetcher.fetch(endpoint).await {
        Ok(hits) => {
            story_info!(
                "Fetch request_id={} succeeded with {} hits",
                request_id,
                hits.len()
            );
            Event::FetchSucceeded(hits)
        }
        Err(err) => {
            story_warn!("Fetch request_id={} failed: {}", request_id, err);
            Event::FetchFailed
        }
    };

    sink.emit(FetchEvent { request_id, event });
}
