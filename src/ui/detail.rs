//! Detail screen: one record in full, plus the location widget.
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::directory::UserRecord;
use crate::geo::{GeoPoint, MARKER_RADIUS};

pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(user) = app.selected_user() else {
        let p = Paragraph::new("No user selected. Press Esc to go back.")
            .style(Style::default().fg(app.theme.muted))
            .block(
                Block::default()
                    .title("Details")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
        f.render_widget(p, area);
        return;
    };

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    render_profile(f, body[0], app, user);
    render_location(f, body[1], app, user);
}

fn render_profile(f: &mut Frame, area: Rect, app: &AppState, user: &UserRecord) {
    let text = format!(
        "Name: {} (@{})\nEmail: {}\nPhone: {}\nWebsite: {}\n\nCompany: {}\n  \"{}\"\n  {}\n\nAddress:\n  {} {}\n  {} {}",
        user.name,
        user.username,
        user.email,
        user.phone,
        user.website,
        user.company.name,
        user.company.catch_phrase,
        user.company.bs,
        user.address.street,
        user.address.suite,
        user.address.city,
        user.address.zipcode,
    );
    let p = Paragraph::new(text)
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title("Profile")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}

/// Flat map overlay with the record's position marker.
///
/// The marker cell comes straight from the overlay projection; the caption
/// reports the raw coordinates and the matching point on the marker sphere.
/// A record with unparseable coordinates gets a text fallback instead of a
/// misplaced marker.
fn render_location(f: &mut Frame, area: Rect, app: &AppState, user: &UserRecord) {
    let block = Block::default()
        .title("Location")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let point = match GeoPoint::parse(&user.address.geo.lat, &user.address.geo.lng) {
        Ok(point) => point,
        Err(e) => {
            let p = Paragraph::new(format!("Location unavailable: {e}"))
                .style(Style::default().fg(app.theme.muted));
            f.render_widget(p, inner);
            return;
        }
    };

    // Two caption lines at the bottom, the map grid above them.
    let caption_height = 2u16.min(inner.height);
    let map = Rect {
        height: inner.height - caption_height,
        ..inner
    };

    if map.width > 0 && map.height > 0 {
        let w = map.width as usize;
        let h = map.height as usize;
        let (dx, dy) = point.overlay_offset();
        // Percentage offset from center into cell coordinates.
        let mx = (((w - 1) as f64 / 2.0) * (1.0 + dx / 100.0)).round() as usize;
        let my = (((h - 1) as f64 / 2.0) * (1.0 + dy / 100.0)).round() as usize;
        let mx = mx.min(w - 1);
        let my = my.min(h - 1);

        let grid_style = Style::default().fg(app.theme.muted);
        let marker_style = Style::default()
            .fg(app.theme.highlight_fg)
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = (0..h)
            .map(|row| {
                if row == my {
                    Line::from(vec![
                        Span::styled("·".repeat(mx), grid_style),
                        Span::styled("◉", marker_style),
                        Span::styled("·".repeat(w - 1 - mx), grid_style),
                    ])
                } else {
                    Line::from(Span::styled("·".repeat(w), grid_style))
                }
            })
            .collect();
        f.render_widget(Paragraph::new(lines), map);
    }

    if caption_height > 0 {
        let caption_area = Rect {
            y: inner.y + map.height,
            height: caption_height,
            ..inner
        };
        let [sx, sy, sz] = point.sphere_position(MARKER_RADIUS);
        let caption = vec![
            Line::from(Span::styled(
                format!("📍 {:.4}°, {:.4}°  {}", point.lat(), point.lng(), user.address.city),
                Style::default().fg(app.theme.text),
            )),
            Line::from(Span::styled(
                format!("sphere: ({sx:.3}, {sy:.3}, {sz:.3})"),
                Style::default().fg(app.theme.muted),
            )),
        ];
        f.render_widget(Paragraph::new(caption), caption_area);
    }
}
