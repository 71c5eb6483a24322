//! Status-class mapping shared by the console report and the table.

use crossterm::style::Color;

/// HTTP status class derived from the leading digit of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    Other,
}

impl StatusClass {
    /// Classifies a status line such as `"200 OK"`. Anything that does not
    /// start with 1-5 (including the sentinel) is `Other`.
    #[must_use]
    pub fn from_status_text(status: &str) -> Self {
        match status.trim_start().as_bytes().first() {
            Some(b'1') => StatusClass::Informational,
            Some(b'2') => StatusClass::Success,
            Some(b'3') => StatusClass::Redirection,
            Some(b'4') => StatusClass::ClientError,
            Some(b'5') => StatusClass::ServerError,
            Some(_) | None => StatusClass::Other,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            StatusClass::Informational => Color::Cyan,
            StatusClass::Success => Color::Green,
            StatusClass::Redirection => Color::Magenta,
            StatusClass::ClientError | StatusClass::ServerError => Color::Red,
            StatusClass::Other => Color::White,
        }
    }
}

/// Formats a response status as a status line, e.g. `"404 Not Found"`.
#[must_use]
pub fn status_line(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_str(), reason),
        None => status.as_str().to_owned(),
    }
}
