use crate::config::Config;
use crate::content::{CircleRegistry, MemoryRepository, SystemClock};
use crate::events::content::{Event as ContentEvent, Handler as ContentEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger;
use crate::state::{Payload, State};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;

pub type ContentEventSender = std::sync::mpsc::Sender<ContentEvent>;
type ContentEventReceiver = std::sync::mpsc::Receiver<ContentEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    repository: MemoryRepository,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration,
    /// optionally deep-linking to a screen id. Returns the result of the
    /// application execution.
    ///
    pub fn start(config: Config, deep_link: Option<&str>) -> Result<()> {
        let log_buffer = logger::init(config.log_level_filter()?)?;

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<ContentEvent>();
        let splash_delay_ms = i64::try_from(config.splash_delay_ms).unwrap_or(i64::MAX);
        let splash_delay = chrono::Duration::milliseconds(splash_delay_ms);
        let state = State::new(
            tx,
            Arc::new(SystemClock),
            splash_delay,
            config.settings.clone(),
            Theme::by_name(&config.theme_name),
            log_buffer,
        );
        let mut app = App {
            state,
            repository: MemoryRepository::new(CircleRegistry::builtin()),
            config,
        };

        if let Some(id) = deep_link {
            info!("Opening deep link '{}'...", id);
            app.state.navigate_to(id, Payload::none());
        }

        app.start_ui(rx)?;

        // Save config on exit
        app.config.settings = app.state.get_settings().clone();
        app.config.theme_name = app.state.get_theme().name.clone();
        if let Err(e) = app.config.save() {
            error!("Failed to save config on exit: {}", e);
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Apply every queued content event on the main thread.
    ///
    fn drain_content_events(&mut self, receiver: &ContentEventReceiver) {
        while let Ok(event) = receiver.try_recv() {
            let mut handler = ContentEventHandler::new(&mut self.state, &mut self.repository);
            if let Err(e) = handler.handle(event) {
                error!("Failed to handle content event: {}", e);
            }
        }
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self, receiver: ContentEventReceiver) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal, &receiver);

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        receiver: &ContentEventReceiver,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            self.drain_content_events(receiver);
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
