//! List screen: the paginated users table and its navigation bar.
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::AppState;
use crate::ui::components;

pub fn render_list(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)].as_ref())
        .split(area);

    render_users_table(f, chunks[0], app);
    components::render_pagination_bar(f, chunks[1], app);
}

fn render_users_table(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .title("Users")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));

    let view = app.visible_page();
    if view.items.is_empty() {
        let msg = if let Some(err) = &app.load_error {
            format!("Collection unavailable: {err}\n\nPress r to retry.")
        } else if app.effective_query.is_empty() {
            "No users.".to_string()
        } else {
            format!("No users matching \"{}\".", app.effective_query)
        };
        let p = Paragraph::new(msg)
            .style(Style::default().fg(app.theme.muted))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let rows = view.items.iter().enumerate().map(|(i, u)| {
        let absolute_index = view.offset + i;
        let style = if absolute_index == app.selected_index {
            Style::default()
                .fg(app.theme.highlight_fg)
                .bg(app.theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        Row::new(vec![
            Cell::from(format!("{} (@{})", u.name, u.username)),
            Cell::from(u.email.clone()),
            Cell::from(u.phone.clone()),
            Cell::from(u.company.name.clone()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Percentage(32),
        Constraint::Percentage(28),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];
    let header = Row::new(vec!["NAME", "EMAIL", "PHONE", "COMPANY"]).style(
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);
}
