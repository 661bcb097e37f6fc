pub mod components;
pub mod detail;
pub mod list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode, View};

pub fn render(f: &mut Frame, app: &AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());

    let prompt = match app.input_mode {
        InputMode::Search => format!("  search: {}▌", app.search_input),
        InputMode::Normal if !app.effective_query.is_empty() => {
            format!("  filter: {}", app.effective_query)
        }
        InputMode::Normal => String::new(),
    };
    let screen = match app.view {
        View::List => "[Users]",
        View::Detail => "[Details]",
    };
    let header = Paragraph::new(format!(
        "userdir  {screen}{prompt}  — /: search; ←/→: page; 1-9: go to page; Enter: details; r: reload; q: quit"
    ))
    .block(
        Block::default()
            .title("userdir")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(header, root[0]);

    match app.view {
        View::List => list::render_list(f, root[1], app),
        View::Detail => detail::render_detail(f, root[1], app),
    }

    components::render_status_bar(f, root[2], app);
}
