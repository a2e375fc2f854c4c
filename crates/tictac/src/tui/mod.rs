//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{KeyAction, map_key, move_cursor};

use crate::config::AppConfig;
use crate::controller::MatchController;
use crate::orchestrator::{Command, Orchestrator};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(mode = ?config.mode()))]
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> Result<()> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let controller = MatchController::new(*config.mode(), crate::seeded_rng(*config.seed()));
    let orchestrator = Orchestrator::new(controller, config.cpu_delay(), command_rx, event_tx);
    let handle = tokio::spawn(orchestrator.run());

    let mut app = App::new();

    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if handle.is_finished() {
            break;
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = app.handle_key(key.code)
        {
            let quit = command == Command::Quit;
            // A closed channel means the orchestrator already stopped.
            let _ = command_tx.send(command);
            if quit {
                break;
            }
        }

        tokio::task::yield_now().await;
    }

    drop(command_tx);
    let controller = handle.await.context("Orchestrator task panicked")??;
    info!(tally = %controller.tally(), "Session ended");
    Ok(())
}
