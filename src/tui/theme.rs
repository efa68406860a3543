//! Colors for the board.
//!
//! Status and priority colors mirror the ones `kanban show` paints with, so the
//! two renderings read the same.

use iocraft::prelude::Color;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_backlog: Color,
    pub status_todo: Color,
    pub status_in_progress: Color,
    pub status_done: Color,
    pub status_canceled: Color,
    pub status_other: Color,

    // Priority colors
    pub priority_urgent: Color,
    pub priority_high: Color,
    pub priority_default: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_backlog: GREY,
            status_todo: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_done: Color::Green,
            status_canceled: GREY,
            status_other: Color::White,

            priority_urgent: Color::Red,
            priority_high: Color::Yellow,
            priority_default: Color::White,

            border: GREY,
            border_focused: Color::Blue,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Color for a status string, matched case-insensitively
    pub fn status_color(&self, status: &str) -> Color {
        match status.to_ascii_lowercase().as_str() {
            "backlog" => self.status_backlog,
            "todo" => self.status_todo,
            "in progress" => self.status_in_progress,
            "done" => self.status_done,
            "canceled" | "cancelled" => self.status_canceled,
            _ => self.status_other,
        }
    }

    pub fn priority_color(&self, priority: Option<i64>) -> Color {
        match priority {
            Some(4) => self.priority_urgent,
            Some(3) => self.priority_high,
            _ => self.priority_default,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
