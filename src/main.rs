mod cli;
mod config;
mod controller;
mod error;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use view::AppView;
use controller::AppController;
use model::{AppModel, DeezerClient};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let (config, warnings) = args.resolve_config();

    if cli::run_command(&args, &config, &warnings).await? {
        return Ok(());
    }

    // Hold the guard until exit so buffered log lines are flushed
    let _log_guard = match logging::init_logging(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!("=== Album Browser Starting ===");
    tracing::debug!(
        base_url = %config.api.base_url,
        debounce_ms = config.search.debounce_ms,
        grid_columns = config.search.grid_columns,
        "Configuration loaded"
    );

    let catalog = Arc::new(DeezerClient::new(&config.api)?);
    let model = Arc::new(AppModel::with_grid_columns(config.search.grid_columns));
    let (controller, committed_rx) = AppController::new(
        model.clone(),
        catalog,
        Duration::from_millis(config.search.debounce_ms),
    );
    let commit_loop = controller.spawn_commit_loop(committed_rx);

    // Seed the search box; the seed goes through the debouncer like typed text
    let initial = model.update_search_query(config.search.initial_query.clone()).await;
    if !initial.is_empty() {
        controller.on_query_input(initial).await;
    }

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller.clone()).await;

    controller.shutdown().await;
    commit_loop.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Album Browser shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        // Get current state
        let ui_state = model.get_ui_state().await;
        let search = model.get_search_snapshot().await;
        let detail = model.get_album_detail().await;

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &ui_state, &search, detail.as_ref());
        })?;

        // Short poll so search results show up without a keypress
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
