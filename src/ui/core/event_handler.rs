use crossterm::event::{poll, read, Event, KeyEventKind};
use log::{debug, error};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;

use super::actions::Action;

/// How long the reader thread blocks before re-checking its stop flag
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reads terminal events on a dedicated thread and posts them to the action queue.
///
/// Terminal reads block, so they stay off the async runtime; the controller
/// sees key presses and resizes on the same queue that loads report to.
pub struct EventHandler {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn spawn(action_sender: mpsc::UnboundedSender<Action>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = std::thread::spawn(move || {
            while !thread_stop.load(Ordering::Relaxed) {
                let event = match poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => read(),
                    Err(e) => Err(e),
                };

                let action = match event {
                    Ok(event) => match translate_event(event) {
                        Some(action) => action,
                        None => continue,
                    },
                    Err(e) => {
                        error!("Input: terminal read failed: {}", e);
                        let _ = action_sender.send(Action::InputFailed(e.to_string()));
                        break;
                    }
                };

                if action_sender.send(action).is_err() {
                    debug!("Input: action queue closed, stopping reader");
                    break;
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the reader thread and wait for it to exit
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Map a terminal event onto a queue message; key releases and repeats are dropped.
pub fn translate_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Action::Key(key)),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}
