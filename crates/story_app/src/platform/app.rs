use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use story_core::{
    update, AggregateCache, AggregateObserver, AppState, AppViewModel, CollectionState,
    LoadedPreference, Msg, PreferenceStore,
};
use story_engine::EngineHandle;
use story_logging::{story_debug, story_info, story_warn};

use super::clock::ClockTicker;
use super::config::AppConfig;
use super::effects::{EffectRunner, MsgSink};
use super::logging;
use super::persistence::FilePreferenceStore;
use super::ui::input::{parse_command, row_to_remove, Command, HELP};
use super::ui::render;

/// Everything the app loop reacts to.
pub(crate) enum AppEvent {
    Msg(Msg),
    Input(String),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::default();
    logging::initialize(&config.log_path);
    story_info!("Starting story_search in {:?}", config.state_dir);

    // Phase one: read the stored query. Nothing can be written yet.
    let loaded = LoadedPreference::load(
        FilePreferenceStore::open(&config.state_dir),
        config.preference_key.clone(),
        &config.default_query,
    );
    let state =
        AppState::with_api_endpoint(config.api_endpoint.clone(), loaded.value().to_string());

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let sink = Arc::new(MsgSink::new(event_tx.clone()));
    let engine =
        EngineHandle::new(config.fetch.clone(), sink).context("failed to start the fetch engine")?;
    // Phase two: the initial state exists, so later query changes may persist.
    let runner = EffectRunner::new(engine, loaded.arm());

    let _clock = ClockTicker::start(config.clock_interval, event_tx.clone())
        .context("failed to start the clock")?;
    spawn_input_reader(event_tx)?;

    let mut app = App::new(state, runner);
    app.dispatch(Msg::Mounted);
    app.run(event_rx)
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("story-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(AppEvent::Input(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}

struct LoggingObserver;

impl AggregateObserver for LoggingObserver {
    fn recomputed(&self, state: &CollectionState, value: u64) {
        story_debug!(
            "Recomputed total comments over {} stories: {}",
            state.data.len(),
            value
        );
    }
}

struct App<S> {
    state: AppState,
    runner: EffectRunner<S>,
    aggregate: AggregateCache,
    last_view: Option<AppViewModel>,
    notice: Option<String>,
}

impl<S: PreferenceStore> App<S> {
    fn new(state: AppState, runner: EffectRunner<S>) -> Self {
        Self {
            state,
            runner,
            aggregate: AggregateCache::new(),
            last_view: None,
            notice: None,
        }
    }

    fn run(&mut self, event_rx: mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        self.paint()?;
        while let Ok(event) = event_rx.recv() {
            match event {
                AppEvent::Msg(msg) => self.dispatch(msg),
                AppEvent::Input(line) => {
                    if !self.handle_input(&line) {
                        break;
                    }
                }
                AppEvent::InputClosed => break,
            }
            self.paint()?;
        }
        story_info!("Shutting down");
        Ok(())
    }

    /// Returns `false` when the user asked to quit.
    fn handle_input(&mut self, line: &str) -> bool {
        self.notice = None;
        match parse_command(line) {
            Command::Search(query) => {
                self.dispatch(Msg::SearchInput(query));
                self.dispatch(Msg::SearchSubmitted);
            }
            Command::Resubmit => self.dispatch(Msg::SearchSubmitted),
            Command::Remove(index) => match row_to_remove(self.state.stories(), index) {
                Ok(record) => self.dispatch(Msg::RemoveClicked(record)),
                Err(reason) => {
                    story_warn!("Remove of row {} rejected: {}", index, reason);
                    self.notice = Some(reason);
                }
            },
            Command::Help => self.notice = Some(HELP.to_string()),
            Command::Quit => return false,
            Command::Invalid(reason) => self.notice = Some(reason),
        }
        // Notices are drawn with the screen, so force a full repaint.
        self.last_view = None;
        true
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    fn paint(&mut self) -> io::Result<()> {
        if !self.state.consume_dirty() && self.last_view.is_some() {
            return Ok(());
        }

        let view = self.state.view();
        let total = self.aggregate.get(&view.stories, &LoggingObserver);
        let only_clock_changed = self
            .last_view
            .as_ref()
            .is_some_and(|last| same_apart_from_clock(last, &view));

        let mut out = io::stdout().lock();
        if only_clock_changed {
            out.write_all(render::render_headline(&view, total).as_bytes())?;
        } else {
            let screen = render::render(&view, total, self.notice.as_deref());
            out.write_all(screen.as_bytes())?;
        }
        out.flush()?;

        self.last_view = Some(view);
        Ok(())
    }
}

fn same_apart_from_clock(last: &AppViewModel, next: &AppViewModel) -> bool {
    last.query == next.query
        && last.endpoint == next.endpoint
        && last.stories == next.stories
        && last.can_submit == next.can_submit
}
