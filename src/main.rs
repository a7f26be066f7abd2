//! taginput - a tag input with typeahead suggestions in the terminal.
//!
//! Type to see suggestions, accept them with Enter or Tab, or type free text
//! separated by commas. The bound value is printed on exit.

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde_json::Value;

use taginput::app::App;
use taginput::candidates::{build_source, collect_candidates};
use taginput::config::{Config, ValueEncoding};
use taginput::error::AppError;
use taginput::events::EventHandler;
use taginput::logging;
use taginput::tags::TagInputOptions;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Parser)]
#[command(name = "taginput", version, about = "Tag input with typeahead suggestions")]
struct Args {
    /// Configuration file (defaults to the platform config directory).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Candidate file: a JSON array or one candidate per line.
    #[arg(short = 'f', long, value_name = "FILE")]
    candidates: Option<PathBuf>,

    /// Maximum number of tags.
    #[arg(long)]
    max: Option<usize>,

    /// Accept the same tag more than once.
    #[arg(long)]
    allow_duplicates: bool,

    /// Treat tags differing only in case as distinct.
    #[arg(long)]
    case_sensitive: bool,

    /// Characters typed before suggestions appear.
    #[arg(long)]
    min_length: Option<usize>,

    /// Maximum suggestions shown.
    #[arg(long)]
    items: Option<usize>,

    /// Simulated suggestion latency in milliseconds.
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Print the bound value as comma-separated ids instead of JSON.
    #[arg(long)]
    comma: bool,

    /// Placeholder shown in the empty entry.
    #[arg(long)]
    placeholder: Option<String>,

    /// Initial tag; may be repeated.
    #[arg(long = "value", value_name = "TAG")]
    values: Vec<String>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

impl Args {
    /// Overlay command-line options on the loaded configuration.
    fn apply(&self, config: &mut Config) {
        let widget = &mut config.widget;
        if let Some(max) = self.max {
            widget.max = Some(max);
        }
        if self.allow_duplicates {
            widget.allow_duplicates = true;
        }
        if self.case_sensitive {
            widget.case_insensitive = false;
        }
        if let Some(min_length) = self.min_length {
            widget.min_length = min_length;
        }
        if let Some(items) = self.items {
            widget.items = items;
        }
        if self.comma {
            widget.value_encoding = ValueEncoding::Comma;
        }
        if let Some(placeholder) = &self.placeholder {
            widget.placeholder = placeholder.clone();
        }

        let candidates = &mut config.candidates;
        if let Some(file) = &self.candidates {
            candidates.file = Some(file.clone());
        }
        if let Some(latency_ms) = self.latency_ms {
            candidates.latency_ms = latency_ms;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load()?,
    };
    args.apply(&mut config);
    config.validate()?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let values = collect_candidates(&config.candidates)?;
    let source = build_source(values, Duration::from_millis(config.candidates.latency_ms));
    let mut app = App::new(TagInputOptions::new(config.widget.clone(), source));
    app.set_values(args.values.iter().cloned().map(Value::String))?;

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    logging::shutdown();
    result?;

    println!("{}", app.serialized_value());
    Ok(())
}

fn run(terminal: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    let events = EventHandler::new();
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        let event = events.next()?;
        app.update(event);
    }
    Ok(())
}

fn setup_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode().map_err(|e| AppError::terminal(format!("enabling raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )?;

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = reset_terminal();
        default_hook(info);
    }));

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn reset_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        DisableFocusChange,
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
}

fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    reset_terminal()?;
    terminal.show_cursor()?;
    Ok(())
}
