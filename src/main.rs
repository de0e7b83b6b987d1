use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event;

mod about;
mod app;
mod clipboard;
mod config;
mod generation;
mod notification;

use app::App;
use config::Config;

/// Generate data-driven marketing plans from a plain-text business description.
#[derive(Debug, Parser)]
#[command(name = "markplan", version, about)]
struct Args {
    /// Gemini model to use (overrides the config file)
    #[arg(long)]
    model: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is only wired up in debug builds
    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Args::parse();

    let mut config = config::load();
    if let Some(model) = args.model {
        config.generation.model = model;
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, config);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: Config) -> Result<()> {
    let mut app = App::new(config);

    while !app.should_quit() {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Short poll keeps the UI responsive to worker responses and lets
        // the copy acknowledgment expire without a key press.
        if event::poll(Duration::from_millis(50))? {
            app.handle_events()?;
        }

        app.poll_worker();
        app.tick(Instant::now());
    }

    Ok(())
}
