//! userdir binary entry point.
//!
//! Parses CLI options, initializes logging and the terminal in raw mode,
//! runs the TUI event loop, and restores the terminal state on exit.
//!
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use userdir::app;
use userdir::directory;
use userdir::error::Result;

/// Browse and search a remote user directory from the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL of the directory API.
    #[arg(long, env = "USERDIR_BASE_URL", default_value = directory::DEFAULT_BASE_URL)]
    base_url: String,

    /// Theme configuration file (created with defaults when missing).
    #[arg(long, default_value = "theme.conf")]
    theme: String,

    /// Run without a network source (empty collection).
    #[arg(long)]
    offline: bool,

    /// Append logs to this file; the terminal itself is owned by the TUI.
    /// Filtered via RUST_LOG.
    #[arg(long)]
    log_file: Option<std::path::PathBuf>,
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn init_logging(path: &std::path::Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let theme = app::Theme::load_or_init(&args.theme);

    let http;
    let empty;
    let source: &dyn directory::DirectorySource = if args.offline {
        empty = directory::StaticDirectory::default();
        &empty
    } else {
        http = directory::HttpDirectory::new(args.base_url.clone());
        &http
    };

    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;

    let res = app::run(&mut terminal, source, theme);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err}");
    }
    Ok(())
}
