use crossterm::style::Color as ConsoleColor;
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};

use crate::probe::StatusClass;

pub(super) const TABLE_TITLE: &str = "pulsecheck";
pub(super) const QUIT_HINT: &str = "q to quit";
pub(super) const COLUMN_SPACING: u16 = 1;
pub(super) const HEADER_BOTTOM_MARGIN: u16 = 1;
pub(super) const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Percentage(20),
    Constraint::Min(20),
    Constraint::Length(8),
    Constraint::Length(24),
    Constraint::Length(14),
];
pub(super) const BORDER_RGB: (u8, u8, u8) = (0xe5, 0xe7, 0xeb);
pub(super) const HEADER_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);

pub(super) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn header_style(no_color: bool) -> Style {
    style_color(no_color, rgb(HEADER_RGB)).add_modifier(Modifier::BOLD)
}

pub(super) fn border_style(no_color: bool) -> Style {
    style_color(no_color, rgb(BORDER_RGB))
}

/// Status cell color, taken from the console report palette.
pub(super) const fn status_color(class: StatusClass) -> Color {
    from_console(class.color())
}

/// Inverse of the crossterm backend's color mapping, so a console color and
/// its table counterpart render the same.
pub(super) const fn from_console(color: ConsoleColor) -> Color {
    match color {
        ConsoleColor::Reset => Color::Reset,
        ConsoleColor::Black => Color::Black,
        ConsoleColor::DarkGrey => Color::DarkGray,
        ConsoleColor::Red => Color::LightRed,
        ConsoleColor::DarkRed => Color::Red,
        ConsoleColor::Green => Color::LightGreen,
        ConsoleColor::DarkGreen => Color::Green,
        ConsoleColor::Yellow => Color::LightYellow,
        ConsoleColor::DarkYellow => Color::Yellow,
        ConsoleColor::Blue => Color::LightBlue,
        ConsoleColor::DarkBlue => Color::Blue,
        ConsoleColor::Magenta => Color::LightMagenta,
        ConsoleColor::DarkMagenta => Color::Magenta,
        ConsoleColor::Cyan => Color::LightCyan,
        ConsoleColor::DarkCyan => Color::Cyan,
        ConsoleColor::White => Color::White,
        ConsoleColor::Grey => Color::Gray,
        ConsoleColor::Rgb { r, g, b } => Color::Rgb(r, g, b),
        ConsoleColor::AnsiValue(value) => Color::Indexed(value),
    }
}
