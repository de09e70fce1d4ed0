use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use story_core::{Endpoint, RequestId};
use story_logging::story_debug;

use crate::orchestrator::{run_fetch, EventSink};
use crate::{FetchSettings, ReqwestFetcher, SearchFetcher};

enum EngineCommand {
    RunFetch {
        request_id: RequestId,
        endpoint: Endpoint,
    },
}

/// Owns the tokio runtime that performs fetches off the UI thread.
///
/// Fetches are never cancelled; overlapping requests all run to completion
/// and the caller decides which result is current. Dropping the handle
/// closes the command channel and lets the worker thread exit.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)), sink)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn SearchFetcher>,
        sink: Arc<dyn EventSink>,
    ) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("story-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, sink.as_ref()).await;
                    });
                }
                story_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn run_fetch(&self, request_id: RequestId, endpoint: Endpoint) {
        let _ = self.cmd_tx.send(EngineCommand::RunFetch {
            request_id,
            endpoint,
        });
    }
}

async fn handle_command(fetcher: &dyn SearchFetcher, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::RunFetch {
            request_id,
            endpoint,
        } => run_fetch(fetcher, request_id, &endpoint, sink).await,
    }
}
