use std::sync::mpsc;

use story_core::{ArmedPreference, Effect, Msg, PreferenceStore};
use story_engine::{EngineHandle, EventSink, FetchEvent};
use story_logging::story_info;

use super::app::AppEvent;

/// Executes the effects returned by `update`.
pub(crate) struct EffectRunner<S> {
    engine: EngineHandle,
    preference: ArmedPreference<S>,
}

impl<S: PreferenceStore> EffectRunner<S> {
    pub(crate) fn new(engine: EngineHandle, preference: ArmedPreference<S>) -> Self {
        Self { engine, preference }
    }

    pub(crate) fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RunFetch {
                    request_id,
                    endpoint,
                } => {
                    story_info!("RunFetch request_id={} endpoint={}", request_id, endpoint);
                    self.engine.run_fetch(request_id, endpoint);
                }
                Effect::PersistQuery(query) => self.preference.set(&query),
            }
        }
    }
}

/// Forwards orchestrator events into the app loop as messages.
pub(crate) struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl MsgSink {
    pub(crate) fn new(tx: mpsc::Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: FetchEvent) {
        let _ = self.tx.send(AppEvent::Msg(Msg::Fetch {
            request_id: event.request_id,
            event: event.event,
        }));
    }
}
