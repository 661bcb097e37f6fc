use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::{Duration, Instant};

use crate::app::{AppState, InputMode, Theme, View};
use crate::directory::DirectorySource;
use crate::ui;

/// How long to block on input when no debounce deadline is pending.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Run the cooperative event loop: draw, wait for input or the debounce
/// deadline, apply the transition, repeat. All state transitions are
/// serialized through this loop; the debounce delay is the only suspension
/// point.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    source: &dyn DirectorySource,
    theme: Theme,
) -> Result<()> {
    let mut app = AppState::new(source, theme);

    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        // Wake up for the debounce deadline even when no key arrives.
        let now = Instant::now();
        let timeout = app
            .debouncer
            .next_deadline()
            .map(|d| d.saturating_duration_since(now).min(IDLE_POLL))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(&mut app, source, key.code) {
                    break;
                }
            }
        }

        app.tick(Instant::now());
    }

    // Dropping the state cancels any pending emission with it.
    Ok(())
}

/// Apply one key press; returns true when the app should exit.
fn handle_key(app: &mut AppState, source: &dyn DirectorySource, code: KeyCode) -> bool {
    match app.input_mode {
        InputMode::Search => match code {
            KeyCode::Enter => {
                app.flush_search();
                app.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                app.clear_search();
                app.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                app.search_input.pop();
                app.queue_search(Instant::now());
            }
            KeyCode::Char(c) => {
                app.search_input.push(c);
                app.queue_search(Instant::now());
            }
            _ => {}
        },
        InputMode::Normal => match app.view {
            View::List => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('/') => {
                    app.search_input = app.effective_query.clone();
                    app.input_mode = InputMode::Search;
                }
                KeyCode::Esc => app.clear_search(),
                KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
                KeyCode::Right | KeyCode::Char('l') => app.next_page(),
                KeyCode::Char(c @ '1'..='9') => {
                    app.go_to_page(c as usize - '0' as usize);
                }
                KeyCode::Char('r') => app.reload(source),
                KeyCode::Enter => app.open_detail_with(source),
                _ => {}
            },
            View::Detail => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
                KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                _ => {}
            },
        },
    }
    false
}
