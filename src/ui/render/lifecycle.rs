use std::time::Duration;

use ratatui::{Terminal, prelude::Backend};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::error::AppResult;
use crate::probe::ResultStore;
use crate::shutdown::shutdown_channel;
use crate::ui::input::{spawn_input_reader, stop_input_reader};
use crate::ui::model::{TableLayout, UiEvent, UiRenderData};

use super::dashboard::{Ui, UiActions};

/// Redraw period of the live table.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
/// Input events buffered between the reader thread and the render loop.
const EVENT_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Initializing,
    Running,
    Stopped,
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}

/// Render loop state: the terminal, the store it reads from, and the
/// current table layout.
pub struct Dashboard<B: Backend> {
    terminal: Terminal<B>,
    store: ResultStore,
    layout: TableLayout,
    state: RenderState,
    no_color: bool,
    frames: u64,
}

impl<B: Backend> Dashboard<B> {
    #[must_use]
    pub fn new(terminal: Terminal<B>, store: ResultStore, no_color: bool) -> Self {
        let layout = TableLayout::new(0, 0, store.len());
        Self {
            terminal,
            store,
            layout,
            state: RenderState::Initializing,
            no_color,
            frames: 0,
        }
    }

    /// Builds the layout and forces the first draw. The first timer tick
    /// comes one period later, so this draw cannot be left to it.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal size cannot be read.
    pub fn start(&mut self) -> AppResult<()> {
        let size = self.terminal.size()?;
        self.layout = TableLayout::new(size.width, size.height, self.store.len());
        self.draw();
        self.state = RenderState::Running;
        Ok(())
    }

    /// Handles one event and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal cannot be cleared after a resize.
    pub fn handle(&mut self, event: UiEvent) -> AppResult<RenderState> {
        if self.state != RenderState::Running {
            return Ok(self.state);
        }
        match event {
            UiEvent::Tick => self.draw(),
            UiEvent::Resize { width, height } => {
                debug!(width, height, "terminal resized");
                self.layout.resize(width, height, self.store.len());
                self.terminal.clear()?;
                self.draw();
            }
            UiEvent::Quit => {
                debug!("quit requested");
                self.state = RenderState::Stopped;
            }
        }
        Ok(self.state)
    }

    fn draw(&mut self) {
        let data = UiRenderData::from_snapshot(&self.store.snapshot(), self.no_color);
        self.layout.fit_rows(data.rows.len());
        Ui::render(&mut self.terminal, &data, self.layout);
        self.frames = self.frames.saturating_add(1);
    }

    #[must_use]
    pub const fn state(&self) -> RenderState {
        self.state
    }

    #[must_use]
    pub const fn layout(&self) -> TableLayout {
        self.layout
    }

    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub const fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Runs the event loop until a quit event arrives or the event source
/// closes. Only waits on the next tick or the next input event; probes run
/// elsewhere and never block a redraw.
///
/// # Errors
///
/// Returns an error when the initial layout or a resize fails.
pub async fn drive<B: Backend>(
    dashboard: &mut Dashboard<B>,
    events: &mut mpsc::Receiver<UiEvent>,
    tick_period: Duration,
) -> AppResult<()> {
    if dashboard.state() == RenderState::Initializing {
        dashboard.start()?;
    }

    let first_tick = Instant::now()
        .checked_add(tick_period)
        .unwrap_or_else(Instant::now);
    let mut ticker = interval_at(first_tick, tick_period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            _ = ticker.tick() => UiEvent::Tick,
            received = events.recv() => received.unwrap_or(UiEvent::Quit),
        };
        if dashboard.handle(event)? == RenderState::Stopped {
            return Ok(());
        }
    }
}

/// Takes over the terminal, shows the live table until the user quits, and
/// restores the terminal on the way out.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or drawn.
pub async fn run_dashboard(store: ResultStore, no_color: bool) -> AppResult<()> {
    let terminal = Ui::setup_terminal()?;
    let _guard = TerminalGuard;

    let shutdown_tx = shutdown_channel();
    let (event_tx, mut event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let input = spawn_input_reader(&shutdown_tx, event_tx);

    let mut dashboard = Dashboard::new(terminal, store, no_color);
    let result = drive(&mut dashboard, &mut event_rx, TICK_PERIOD).await;

    drop(event_rx);
    let stopped = stop_input_reader(&shutdown_tx, input).await;
    result?;
    stopped
}
