use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll, read};
use tokio::sync::{broadcast, mpsc};

use crate::error::AppResult;
use crate::shutdown::ShutdownSender;

use super::model::UiEvent;

/// How long a single poll may block before shutdown is re-checked.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reads terminal events on a blocking thread and forwards the ones the
/// render loop cares about. Stops on shutdown or when the loop is gone.
pub(crate) fn spawn_input_reader(
    shutdown_tx: &ShutdownSender,
    events: mpsc::Sender<UiEvent>,
) -> tokio::task::JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();

    tokio::task::spawn_blocking(move || {
        loop {
            match shutdown_rx.try_recv() {
                Ok(()) => break,
                Err(broadcast::error::TryRecvError::Closed) => break,
                Err(broadcast::error::TryRecvError::Empty) => {}
                Err(broadcast::error::TryRecvError::Lagged(_)) => {}
            }

            if !poll(INPUT_POLL_INTERVAL).unwrap_or_default() {
                continue;
            }
            let Ok(event) = read() else {
                continue;
            };
            let Some(ui_event) = map_event(&event) else {
                continue;
            };
            if events.blocking_send(ui_event).is_err() {
                break;
            }
        }
    })
}

/// Signals the reader thread to stop and waits for it.
///
/// # Errors
///
/// Returns [`crate::error::AppError::Join`] when the reader panicked or was
/// cancelled.
pub(crate) async fn stop_input_reader(
    shutdown_tx: &ShutdownSender,
    reader: tokio::task::JoinHandle<()>,
) -> AppResult<()> {
    drop(shutdown_tx.send(()));
    reader.await?;
    Ok(())
}

/// Raw mode swallows SIGINT, so Ctrl+C is treated like `q`.
pub(crate) fn map_event(event: &Event) -> Option<UiEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        Event::Resize(width, height) => Some(UiEvent::Resize {
            width: *width,
            height: *height,
        }),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Mouse(_) | Event::Paste(_) => {
            None
        }
    }
}

fn map_key(key: &KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q' | 'Q') => Some(UiEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(UiEvent::Quit),
        _ => None,
    }
}
