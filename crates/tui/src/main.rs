//! Rebind TUI - interactive control bindings menu.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal and file logging.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Menu state or key routing (see `rebind_tui::runtime::app`).
//! - Configuration persistence (see `crates/config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Logs go to a file; the terminal is in raw mode and never sees them.
//! - The event loop is single-threaded; the store and controller are not `Send`.

use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use rebind_tui::cli::Cli;
use rebind_tui::runtime::{App, config::open_store, terminal::TerminalGuard};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "rebind-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let store = Rc::new(open_store(&cli)?);
    if let Some(path) = store.config_path() {
        tracing::info!(path = %path.display(), "Using controls file");
    }
    let mut app = App::new(Rc::clone(&store), cli.log_lines);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Restores the terminal on panic/unwind; explicit cleanup below covers normal exit.
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventStream::new();
    loop {
        if app.take_dirty() {
            terminal.draw(|f| app.render(f))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(Ok(event)) => app.handle_event(event),
            Some(Err(e)) => {
                tracing::error!(error = %e, "Terminal event stream failed");
                break;
            }
            None => break,
        }
    }

    // Release the menu (and its input grant) before tearing down the terminal.
    drop(app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Exited cleanly");
    Ok(())
}
