use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use snapdeck_core::{AppConfig, Deck};
use snapdeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    widgets::{NavBarWidget, SectionsWidget},
};

pub fn run(config: AppConfig, deck_path: Option<PathBuf>) -> Result<()> {
    // Resolve the deck: CLI argument, then configured default, then the
    // built-in demo.
    let deck = match deck_path.or_else(|| config.general.deck_path.clone()) {
        Some(path) => Deck::load(&path)
            .with_context(|| format!("failed to load deck {}", path.display()))?,
        None => {
            info!("no deck given, using the built-in demo deck");
            Deck::sample()
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("snapdeck")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);
    let mut app = App::new(deck, config, (size.width, size.height), Instant::now());

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.on_tick(now);

        terminal.draw(|frame| {
            // Hit boxes are rebuilt from scratch every draw.
            app.hits.clear();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .split(frame.area());

            SectionsWidget::render(frame, rows[1], app, now);
            NavBarWidget::render(frame, rows[0], app);
        })?;

        // Poll faster while the snap interpolation runs.
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app.hits);
                    app.handle_action(action, now);
                }
                AppEvent::Resize(width, height) => {
                    app.on_resize(width, height, now);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
