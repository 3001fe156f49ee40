//! `tuido` — single-screen terminal to-do list.
//!
//! Launches the TUI, loads the persisted task list from disk, and writes
//! every change back in the background. Configuration via CLI flags,
//! environment variables, or config file (`~/.config/tuido/config.toml`).
//!
//! ```bash
//! cargo run
//!
//! # Keep the list somewhere else
//! cargo run -- --data-file /tmp/tasks.json
//!
//! # Or via environment variables
//! TUIDO_DATA_FILE=/tmp/tasks.json cargo run
//! ```

use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

use tuido::app::App;
use tuido::config::{CliArgs, Config};
use tuido::store::{JsonFileStore, TaskStore, spawn_writer};
use tuido::ui;

/// Buffer size for the persistence snapshot channel.
const WRITER_CAPACITY: usize = 16;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            Config::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("tuido starting");

    let data_file = config
        .data_file
        .clone()
        .or_else(JsonFileStore::default_path)
        .unwrap_or_else(|| std::env::temp_dir().join("tuido-tasks.json"));
    tracing::info!(path = %data_file.display(), "using data file");
    let store = Arc::new(JsonFileStore::new(data_file));

    // Load before the event loop starts, so no save can ever race the
    // initial load and clobber a previously persisted list. A missing or
    // unreadable file starts the session empty.
    let tasks = match store.load() {
        Ok(tasks) => tasks,
        Err(err) => {
            tracing::warn!(error = %err, "could not load saved tasks, starting empty");
            Vec::new()
        }
    };

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, App::with_tasks(tasks), store, &config).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("tuido exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown
/// to ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("tuido.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    store: Arc<JsonFileStore>,
    config: &Config,
) -> io::Result<()> {
    let (save_tx, writer) = spawn_writer(store, WRITER_CAPACITY);

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        // Step 3: One snapshot per mutation; the writer owns the outcome.
        if app.take_dirty() {
            match save_tx.try_send(app.tasks.clone()) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    // The next mutation's snapshot supersedes this one.
                    tracing::debug!("save queue full, snapshot dropped");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    tracing::warn!("persistence writer stopped, changes will not be saved");
                }
            }
        }

        if app.should_quit {
            // Closing the channel lets the writer flush the last snapshot.
            drop(save_tx);
            let _ = writer.await;
            return Ok(());
        }
    }
}
