//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, EventType};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub poll_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, poll_interval: Duration) -> Self {
        Self {
            with_background_color,
            poll_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying deposit records and connection status.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from worker threads.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Events that arrive while the splash screen is up. The first poll
    /// usually completes during the splash; its outcome must not be lost.
    splash_backlog: Vec<WorkerEvent>,

    /// Requests an immediate poll from the worker.
    sync_sender: mpsc::Sender<()>,

    /// Broadcasts shutdown signal to worker threads.
    shutdown_sender: broadcast::Sender<()>,

    /// Receives poll budget completion signal.
    max_polls_shutdown_receiver: broadcast::Receiver<()>,

    /// Whether to disable background colors
    with_background_color: bool,

    /// Cadence between scheduled polls, for display.
    poll_interval: Duration,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        sync_sender: mpsc::Sender<()>,
        shutdown_sender: broadcast::Sender<()>,
        max_polls_shutdown_receiver: broadcast::Receiver<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            splash_backlog: Vec::new(),
            sync_sender,
            shutdown_sender,
            max_polls_shutdown_receiver,
            with_background_color: ui_config.with_background_color,
            poll_interval: ui_config.poll_interval,
        }
    }

    fn dashboard_state(&self) -> DashboardState {
        let ui_config = UIConfig::new(self.with_background_color, self.poll_interval);
        DashboardState::new(self.environment.clone(), self.start_time, ui_config)
    }

    /// Switch from the splash screen to the dashboard, feeding it any events
    /// that arrived in the meantime.
    fn enter_dashboard(&mut self) {
        let mut state = self.dashboard_state();
        for event in self.splash_backlog.drain(..) {
            state.add_event(event);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Check for poll budget completion signal (non-blocking)
        if app.max_polls_shutdown_receiver.try_recv().is_ok() {
            // Send shutdown signal to workers and exit
            let _ = app.shutdown_sender.send(());
            return Ok(());
        }

        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            match &mut app.current_screen {
                Screen::Dashboard(state) => state.add_event(event),
                Screen::Splash => app.splash_backlog.push(event),
            }
        }

        // Update the state based on the current screen
        match &mut app.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => {
                state.update();
            }
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Q always quits
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                // ESC closes an open detail modal first, then quits
                if key.code == KeyCode::Esc {
                    if let Screen::Dashboard(state) = &mut app.current_screen {
                        if state.details_open() {
                            state.close_details();
                            continue;
                        }
                    }
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.enter_dashboard();
                    }
                    Screen::Dashboard(state) => match key.code {
                        // Manual sync, independent of the cadence timer
                        KeyCode::Char('s') | KeyCode::Char('S') => {
                            let _ = app.sync_sender.try_send(());
                            state.add_event(WorkerEvent::interface(
                                "Manual sync requested".to_string(),
                                EventType::Refresh,
                            ));
                        }
                        KeyCode::Char('t') | KeyCode::Char('T') => {
                            state.toggle_view();
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            state.select_previous();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            state.select_next();
                        }
                        KeyCode::Enter => {
                            state.open_details();
                        }
                        // No-op when no modal is open
                        KeyCode::Char('x') | KeyCode::Char('X') => {
                            state.close_details();
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
