//! Application state types and entry glue.
//!
//! Defines the per-session state of the browser (collection, query,
//! pagination, selection) together with pure transition methods, plus the
//! theme configuration and the event-loop entry point (re-exported as
//! `run`).
//!
pub mod update;

use ratatui::style::Color;
use std::time::Instant;

use crate::debounce::Debouncer;
use crate::directory::{DirectorySource, UserRecord};
use crate::pagination::{PageView, Pager};
use crate::search::filter_users;

/// Which screen is on display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
}

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Theme {
    /// Dark default theme.
    #[allow(dead_code)]
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Yellow,
            highlight_bg: Color::Reset,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
        }
    }

    /// Load theme from a simple key=value file. Unknown or missing keys fall
    /// back to `mocha`.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(|s| s.trim()).unwrap_or("");
            let val = parts.next().map(|s| s.trim()).unwrap_or("");
            if key.is_empty() || val.is_empty() {
                continue;
            }
            if let Some(color) = Self::parse_color(val) {
                match key {
                    "text" => theme.text = color,
                    "muted" => theme.muted = color,
                    "title" => theme.title = color,
                    "border" => theme.border = color,
                    "header_bg" => theme.header_bg = color,
                    "header_fg" => theme.header_fg = color,
                    "status_bg" => theme.status_bg = color,
                    "status_fg" => theme.status_fg = color,
                    "highlight_fg" => theme.highlight_fg = color,
                    "highlight_bg" => theme.highlight_bg = color,
                    _ => {}
                }
            }
        }

        Some(theme)
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB") or the special name
    /// "reset".
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Some(Color::Rgb(r, g, b));
            }
        }
        None
    }

    /// Persist the theme to a config file in key=value format.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;

        fn color_to_str(c: Color) -> String {
            match c {
                Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
                _ => "reset".to_string(),
            }
        }

        let mut buf = String::new();
        buf.push_str("# userdir theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");

        let mut kv = |k: &str, v: Color| {
            let _ = writeln!(&mut buf, "{} = {}", k, color_to_str(v));
        };
        kv("text", self.text);
        kv("muted", self.muted);
        kv("title", self.title);
        kv("border", self.border);
        kv("header_bg", self.header_bg);
        kv("header_fg", self.header_fg);
        kv("status_bg", self.status_bg);
        kv("status_fg", self.status_fg);
        kv("highlight_fg", self.highlight_fg);
        kv("highlight_bg", self.highlight_bg);

        std::fs::write(path, buf)
    }

    /// Ensure a config file exists; if missing, write one with the default
    /// theme and return it. If present, load from it; on parse errors,
    /// return `mocha`.
    pub fn load_or_init(path: &str) -> Self {
        let p = std::path::Path::new(path);
        if p.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let t = Self::mocha();
        let _ = t.write_file(path);
        t
    }
}

/// Mutable state for one mounted browser session.
///
/// Everything here lives for the session and is dropped when the event loop
/// exits; dropping it also cancels any pending debounce emission.
pub struct AppState {
    pub started_at: Instant,
    /// Full collection as fetched, insertion order preserved.
    pub users_all: Vec<UserRecord>,
    /// Filtered collection currently backing the list view.
    pub users: Vec<UserRecord>,
    pub view: View,
    pub input_mode: InputMode,
    /// Raw in-flight keystroke value.
    pub search_input: String,
    /// Settled query actually used for filtering.
    pub effective_query: String,
    pub debouncer: Debouncer,
    pub pager: Pager,
    /// Selected row, absolute index into `users`.
    pub selected_index: usize,
    /// Set when the collection could not be fetched.
    pub load_error: Option<String>,
    pub theme: Theme,
}

impl AppState {
    /// Fetch the collection and build the initial state. A failed fetch is
    /// not fatal: the list starts empty with the error shown in the UI.
    pub fn new(source: &dyn DirectorySource, theme: Theme) -> Self {
        let mut app = Self::with_users(Vec::new(), theme);
        app.reload(source);
        app
    }

    /// Build state over an already-loaded collection.
    pub fn with_users(users_all: Vec<UserRecord>, theme: Theme) -> Self {
        Self {
            started_at: Instant::now(),
            users: users_all.clone(),
            users_all,
            view: View::List,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            effective_query: String::new(),
            debouncer: Debouncer::default(),
            pager: Pager::default(),
            selected_index: 0,
            load_error: None,
            theme,
        }
    }

    /// (Re)fetch the collection, keeping the current effective query.
    pub fn reload(&mut self, source: &dyn DirectorySource) {
        match source.fetch_all() {
            Ok(users) => {
                tracing::info!(count = users.len(), "loaded user collection");
                self.users_all = users;
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "user collection unavailable");
                self.users_all.clear();
                self.load_error = Some(e.to_string());
            }
        }
        let query = self.effective_query.clone();
        self.apply_effective_query(query);
    }

    /// Install a settled query: refilter and jump back to the first page.
    ///
    /// This is the only place a query change lands, so "new effective query
    /// implies page 1" holds for debounced, flushed and cleared input alike.
    pub fn apply_effective_query(&mut self, query: String) {
        self.users = filter_users(&self.users_all, &query);
        self.effective_query = query;
        self.pager.reset();
        self.selected_index = 0;
    }

    /// Record the current raw input; it becomes effective after the quiet
    /// period unless another keystroke replaces it first.
    pub fn queue_search(&mut self, now: Instant) {
        self.debouncer.submit(self.search_input.clone(), now);
    }

    /// Advance time: settle a pending emission once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.poll(now) {
            tracing::debug!(query = %query, "search settled");
            self.apply_effective_query(query);
        }
    }

    /// Clear the search immediately, cancelling any pending emission.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.debouncer.cancel();
        self.apply_effective_query(String::new());
    }

    /// Commit the raw input without waiting out the delay.
    pub fn flush_search(&mut self) {
        // The pending value, when present, equals the raw input; draining it
        // through the debouncer keeps the slot empty either way.
        let query = self
            .debouncer
            .flush()
            .unwrap_or_else(|| self.search_input.clone());
        self.apply_effective_query(query);
    }

    pub fn visible_page(&self) -> PageView<'_, UserRecord> {
        self.pager.slice(&self.users)
    }

    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.users.get(self.selected_index)
    }

    pub fn next_page(&mut self) {
        self.pager.next_page(self.users.len());
        self.snap_selection_to_page();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev_page(self.users.len());
        self.snap_selection_to_page();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, self.users.len());
        self.snap_selection_to_page();
    }

    /// Move the selection down one row, crossing onto the next page at the
    /// page edge.
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.users.len() {
            self.selected_index += 1;
            self.follow_selection();
        }
    }

    /// Move the selection up one row, crossing onto the previous page at the
    /// page edge.
    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.follow_selection();
        }
    }

    pub fn open_detail(&mut self) {
        if self.selected_user().is_some() {
            self.view = View::Detail;
        }
    }

    /// Open the detail view, refreshing the selected record from the source
    /// first. A failed refresh keeps the cached copy; the view opens either
    /// way.
    pub fn open_detail_with(&mut self, source: &dyn DirectorySource) {
        let Some(user) = self.selected_user() else {
            return;
        };
        let id = user.id;
        match source.fetch_by_id(id) {
            Ok(fresh) => {
                if let Some(slot) = self.users_all.iter_mut().find(|u| u.id == id) {
                    *slot = fresh.clone();
                }
                if let Some(slot) = self.users.iter_mut().find(|u| u.id == id) {
                    *slot = fresh;
                }
            }
            Err(e) => tracing::warn!(id, error = %e, "detail refresh failed"),
        }
        self.view = View::Detail;
    }

    pub fn close_detail(&mut self) {
        self.view = View::List;
    }

    /// Turn the page so the selected row is on it.
    fn follow_selection(&mut self) {
        let page = self.selected_index / self.pager.page_size() + 1;
        self.pager.go_to(page, self.users.len());
    }

    /// Keep the selection on whichever page the pager shows.
    fn snap_selection_to_page(&mut self) {
        let view = self.pager.slice(&self.users);
        let start = view.offset;
        let end = start + view.items.len().saturating_sub(1);
        self.selected_index = self.selected_index.clamp(start, end.max(start));
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
