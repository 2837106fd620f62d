//! Terminal front end: owns the screen, multiplexes input, ticks and fetch
//! results, and redraws the store after every change.

mod components;
pub mod theme;
mod ui;

use crate::components::event_feed::FetchResult;
use crate::components::traffic::TrafficSnapshot;
use crate::components::{EventFeedHandle, TrafficFeedHandle};
use crate::config::Config;
use crate::dashboard::input::{self, Effect};
use crate::dashboard::state::DashboardState;
use crate::error::DashResult;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Ticks faster than this only burn CPU
const MIN_TICK_RATE_MS: u64 = 16;

/// Results delivered to the event loop by fetch tasks
#[derive(Debug)]
enum AppMessage {
    EventsFetched { generation: u64, result: FetchResult },
    TrafficFetched(DashResult<Option<TrafficSnapshot>>),
}

/// The interactive dashboard
pub struct Dashboard {
    config: Arc<RwLock<Config>>,
    events: EventFeedHandle,
    traffic: Option<TrafficFeedHandle>,
    shutdown: CancellationToken,
}

impl Dashboard {
    pub fn new(
        config: Arc<RwLock<Config>>,
        events: EventFeedHandle,
        traffic: Option<TrafficFeedHandle>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            config,
            events,
            traffic,
            shutdown,
        }
    }

    /// Take over the terminal until the user quits or shutdown is requested
    pub async fn run(self) -> DashResult<()> {
        install_panic_hook();
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        if let Err(e) = restore_terminal(&mut terminal) {
            error!("Failed to restore terminal: {}", e);
        }
        result
    }

    async fn event_loop(&self, terminal: &mut Tui) -> DashResult<()> {
        let tick_rate_ms = self.config.read().await.tick_rate_ms.max(MIN_TICK_RATE_MS);
        let mut ticker = tokio::time::interval(Duration::from_millis(tick_rate_ms));
        let mut reader = EventStream::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let size = terminal.size()?;
        let mut state = DashboardState::new(size.width);
        self.request_refresh(&mut state, &tx);

        loop {
            terminal.draw(|f| ui::draw(f, &mut state))?;

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("Shutdown requested, leaving the dashboard");
                    break;
                }
                _ = ticker.tick() => state.on_tick(),
                Some(message) = rx.recv() => match message {
                    AppMessage::EventsFetched { generation, result } => {
                        state.complete_refresh(generation, result);
                    }
                    AppMessage::TrafficFetched(result) => state.update_traffic(result),
                },
                maybe_event = reader.next() => match maybe_event {
                    Some(Ok(event)) => {
                        let action = input::map_event(&event, &state);
                        match state.dispatch(action) {
                            Effect::Quit => {
                                info!("Quit requested");
                                break;
                            }
                            Effect::Refresh => self.request_refresh(&mut state, &tx),
                            Effect::None => {}
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("Terminal event stream closed");
                        break;
                    }
                },
            }
        }

        Ok(())
    }

    /// Start a new generation and fetch events (and traffic) for it
    fn request_refresh(&self, state: &mut DashboardState, tx: &mpsc::UnboundedSender<AppMessage>) {
        let generation = state.begin_refresh();
        info!("Refreshing events (generation {})", generation);

        let events = self.events.clone();
        let events_tx = tx.clone();
        tokio::spawn(async move {
            let result = events.fetch_events().await;
            if events_tx
                .send(AppMessage::EventsFetched { generation, result })
                .is_err()
            {
                debug!("Dashboard closed before events arrived");
            }
        });

        if let Some(traffic) = self.traffic.clone() {
            let traffic_tx = tx.clone();
            tokio::spawn(async move {
                let result = traffic.fetch_snapshot().await;
                if traffic_tx.send(AppMessage::TrafficFetched(result)).is_err() {
                    debug!("Dashboard closed before traffic arrived");
                }
            });
        }
    }
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Give the shell its terminal back before a panic message is printed
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        default_hook(info);
    }));
}
