mod app;
mod cli;
mod clipboard;
mod composer;
mod config;
mod editor;
mod error;
mod generation;
mod logging;
mod models;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info, warn};

use crate::app::{App, FetchOutcome};
use crate::config::AppConfig;
use crate::generation::{GeminiClient, RuleGenerator};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner/animation step
const TICK_RATE: Duration = Duration::from_millis(120);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();

    let cli = cli::parse_args()?;
    let log_dir = cli.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init(&log_dir)
        .with_context(|| format!("failed to initialise logging in {}", log_dir.display()))?;

    let config = AppConfig::load(&cli)?;
    info!(
        version = cli::VERSION,
        model = %config.model.model,
        options = %config.options_source,
        timeout_secs = config.model.request_timeout.map(|t| t.as_secs()),
        "starting dq-rules"
    );
    if config.model.api_key.is_none() {
        warn!("no API key found in GEMINI_API_KEY or API_KEY; rule generation will fail");
    }

    let generator: Arc<dyn RuleGenerator> = Arc::new(GeminiClient::new(&config.model)?);
    let (mut app, outcomes) = App::new(config.options, generator);

    install_panic_hook();

    // Setup terminal
    let mut terminal = setup_or_restore(
        || {
            enable_raw_mode()?;
            stdout().execute(EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout()))
        },
        restore_terminal,
    )?;

    // Run the app
    let result = run(&mut terminal, &mut app, outcomes);

    // Restore terminal
    restore_terminal()?;

    if let Err(err) = &result {
        error!(error = %err, "event loop failed");
    }
    info!("exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut outcomes: UnboundedReceiver<FetchOutcome>,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_fetch_outcome(outcome);
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

/// Run `setup`, undoing any partial terminal changes with `restore` if it fails
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    setup().inspect_err(|_| {
        let _ = restore();
    })
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Leave raw mode before the default hook prints, so the message is readable
fn install_panic_hook() {
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        error!(panic = %info, "dq-rules panicked");
        prev_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = setup_or_restore(
            || Err(io::Error::other("no tty")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = setup_or_restore(
            || Ok(42),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(result.unwrap(), 42);
        assert!(!restored.get());
    }
}
