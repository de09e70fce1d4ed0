use std::io;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Local;
use story_core::Msg;

use super::app::AppEvent;

/// Background ticker feeding the header clock.
///
/// The ticker thread lives exactly as long as this guard: dropping it
/// stops the thread and joins it.
pub(crate) struct ClockTicker {
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ClockTicker {
    pub(crate) fn start(interval: Duration, tx: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("story-clock".to_string())
            .spawn(move || loop {
                if tx.send(AppEvent::Msg(Msg::Tick(now_label()))).is_err() {
                    break;
                }
                match stop_rx.recv_timeout(interval) {
                    Err(mpsc::RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            })?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        // Closing the stop channel wakes the thread immediately.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn now_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
