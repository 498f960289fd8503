//! Application state and event handling

pub mod action;
pub mod clock;
pub mod effects;
pub mod form;
pub mod input;
pub mod reducer;
pub mod scroll;
pub mod state;
pub mod store;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::data;
use crate::theme::Theme;
use crate::ui::{self, HitMap};
use action::Action;
use clock::ClockReading;
use effects::EffectRunner;
use state::{AppState, Mount};
use store::Store;

/// Spinner and other animation cadence
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How the process was launched
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub mount: Mount,
    pub display_name: String,
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    theme: Theme,

    /// Owns the application state
    store: Store,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,

    effects: EffectRunner,

    /// Results from background tasks
    actions: mpsc::UnboundedReceiver<Action>,
    tx: mpsc::UnboundedSender<Action>,

    /// Stops the clock task
    shutdown: CancellationToken,

    /// Regions drawn in the last frame
    hits: HitMap,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, options: LaunchOptions) -> Result<Self> {
        let (tx, actions) = mpsc::unbounded_channel();
        let effects = EffectRunner::new(&config, tx.clone())?;

        let forecast = data::weekly_forecast(&mut rand::thread_rng());
        let state = AppState::new(options.mount, options.display_name, forecast)
            .with_submit_policy(config.submit_policy);
        let theme = config.active_theme();

        let terminal = Self::setup_terminal()?;

        Ok(Self {
            config,
            theme,
            store: Store::new(state),
            terminal,
            effects,
            actions,
            tx,
            shutdown: CancellationToken::new(),
            hits: HitMap::default(),
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        let clock = clock::spawn(self.config.clock_interval(), self.tx.clone(), self.shutdown.clone());
        self.apply(vec![Action::ClockTick(ClockReading::now())]);
        if self.store.state().mount == Mount::Dashboard {
            self.apply(vec![Action::WeatherMount]);
        }

        let result = self.event_loop().await;

        self.shutdown.cancel();
        self.effects.shutdown();
        if let Err(e) = clock.await {
            tracing::warn!("Clock task ended abnormally: {}", e);
        }

        self.restore_terminal()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            // Draw UI
            let state = self.store.state();
            let theme = &self.theme;
            let mut hits = HitMap::default();
            self.terminal.draw(|frame| {
                hits = ui::draw(frame, state, theme);
            })?;
            let measured: Vec<Action> = hits
                .viewports()
                .map(|(section, viewport)| Action::ViewportMeasured { section, viewport })
                .collect();
            self.hits = hits;
            self.apply(measured);

            // Handle events
            if event::poll(Duration::from_millis(16))? {
                let state = self.store.state();
                let actions = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => input::map_key(key, state),
                    Event::Mouse(mouse) => input::map_mouse(mouse, state, &self.hits),
                    _ => Vec::new(),
                };
                if self.apply(actions) {
                    break;
                }
            }

            // Results from background tasks
            let mut finished = Vec::new();
            while let Ok(action) = self.actions.try_recv() {
                finished.push(action);
            }
            if self.apply(finished) {
                break;
            }

            // Update animations
            if last_tick.elapsed() >= TICK_INTERVAL {
                last_tick = Instant::now();
                self.apply(vec![Action::Tick]);
            }

            self.effects.reap();
        }

        tracing::info!("Shutting down with {} task(s) in flight", self.effects.pending());
        Ok(())
    }

    /// Dispatch actions and start their effects; returns true if should exit
    fn apply(&mut self, actions: Vec<Action>) -> bool {
        for action in actions {
            if action == Action::Quit {
                return true;
            }
            let result = self.store.dispatch(action);
            for effect in result.effects {
                self.effects.run(effect);
            }
        }
        false
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown.cancel();
        let _ = self.restore_terminal();
    }
}
