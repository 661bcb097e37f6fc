//! Shared UI components (status bar, pagination bar).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, InputMode};
use crate::pagination::{PAGE_WINDOW, page_window};

/// Render the bottom status bar with mode, counts and the current page.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
    };
    let view = app.visible_page();
    let pending = if app.debouncer.is_pending() {
        "  filtering…"
    } else {
        ""
    };
    let msg = format!(
        "mode: {mode}  users:{}/{}  page:{}/{}{pending}",
        app.users.len(),
        app.users_all.len(),
        view.current_page,
        view.total_pages.max(1),
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// Render the page-number controls: a bounded window of pages around the
/// current one plus prev/next arrows that dim at the boundaries.
pub fn render_pagination_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let view = app.visible_page();
    if view.total_pages <= 1 {
        return;
    }

    let dim = Style::default().fg(app.theme.muted);
    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        if view.is_first_page() { "   " } else { " ← " },
        dim,
    ));
    for page in page_window(view.current_page, view.total_pages, PAGE_WINDOW) {
        if page == view.current_page {
            spans.push(Span::styled(
                format!("[{page}]"),
                Style::default()
                    .fg(app.theme.highlight_fg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {page} "),
                Style::default().fg(app.theme.text),
            ));
        }
    }
    spans.push(Span::styled(
        if view.is_last_page() { "   " } else { " → " },
        dim,
    ));

    let (from, to) = view.shown_range();
    spans.push(Span::styled(
        format!("  showing {from}-{to} of {}", view.total_items),
        dim,
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
