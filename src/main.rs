use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};

use jsonlens::app::App;
use jsonlens::document::Document;
use jsonlens::input::action_for_key;
use jsonlens::logging;
use jsonlens::theme::Theme;

/// A keyboard-driven terminal viewer for JSON documents
#[derive(Parser, Debug)]
#[command(name = "jsonlens")]
#[command(version, about)]
struct Cli {
    /// JSON file to view
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Field path (dot notation) the `t` key descends into
    #[arg(short, long, value_name = "PATH", default_value = "merchant")]
    query: String,

    /// Write diagnostics to this file (also enabled by JSONLENS_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = log_destination(&cli) {
        logging::init(&path)?;
    }

    // Load and parse before touching the terminal: a malformed document is
    // fatal and must surface as a plain error message, not a garbled screen.
    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let document = Document::parse(&text)
        .with_context(|| format!("failed to parse {} as JSON", cli.file.display()))?;
    tracing::info!(file = %cli.file.display(), lines = document.line_count(), "document loaded");

    let app = App::new(document, Theme::dark(), cli.query);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, app);
    ratatui::restore();
    result
}

fn log_destination(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.log_file {
        return Some(path.clone());
    }
    match std::env::var(logging::LOG_ENV) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        Ok(_) => Some(logging::default_log_path()),
        Err(_) => None,
    }
}

fn run(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        terminal.draw(|frame| render(frame, &app))?;

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = action_for_key(&key) {
                    app.apply(action);
                }
            }
            Event::Resize(width, height) => app.resize(width, height),
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn render(frame: &mut Frame, app: &App) {
    frame.render_widget(Paragraph::new(app.frame()), frame.area());
}
