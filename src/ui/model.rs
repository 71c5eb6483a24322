use crate::probe::{ProbeResult, StatusClass};

/// Fixed header row of the results table.
pub const TABLE_HEADER: [&str; 5] = ["Name", "URL", "Timeout", "Response", "Duration"];

/// Events consumed by the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Tick,
    Resize { width: u16, height: u16 },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub url: String,
    pub timeout: String,
    pub status: String,
    pub duration: String,
    pub class: StatusClass,
}

impl TableRow {
    #[must_use]
    pub fn cells(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.url.as_str(),
            self.timeout.as_str(),
            self.status.as_str(),
            self.duration.as_str(),
        ]
    }
}

impl From<&ProbeResult> for TableRow {
    fn from(result: &ProbeResult) -> Self {
        let status = result.state.status_text();
        Self {
            name: result.descriptor.name().to_owned(),
            url: result.descriptor.url().to_owned(),
            timeout: result.descriptor.timeout_ms().to_string(),
            class: StatusClass::from_status_text(&status),
            status,
            duration: result.state.elapsed_text(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiRenderData {
    pub rows: Vec<TableRow>,
    pub pending: usize,
    pub no_color: bool,
}

impl UiRenderData {
    #[must_use]
    pub fn from_snapshot(snapshot: &[ProbeResult], no_color: bool) -> Self {
        Self {
            rows: snapshot.iter().map(TableRow::from).collect(),
            pending: snapshot
                .iter()
                .filter(|result| result.state.is_pending())
                .count(),
            no_color,
        }
    }
}

/// Region occupied by the table: full terminal width, height sized to the
/// row count and clamped to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub width: u16,
    pub height: u16,
    terminal_height: u16,
}

impl TableLayout {
    #[must_use]
    pub fn new(width: u16, terminal_height: u16, rows: usize) -> Self {
        let mut layout = Self {
            width,
            height: 0,
            terminal_height,
        };
        layout.fit_rows(rows);
        layout
    }

    pub fn fit_rows(&mut self, rows: usize) {
        self.height = table_height(rows).min(self.terminal_height);
    }

    pub fn resize(&mut self, width: u16, terminal_height: u16, rows: usize) {
        self.width = width;
        self.terminal_height = terminal_height;
        self.fit_rows(rows);
    }
}

/// Borders and header take three lines; each endpoint row gets two.
#[must_use]
pub fn table_height(rows: usize) -> u16 {
    let lines = rows.saturating_mul(2).saturating_add(3);
    u16::try_from(lines).unwrap_or(u16::MAX)
}
