//! Color theme for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Styling for every widget in the browser
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub border_focused: Color,
    pub cursor: Color,
    pub selected: Color,
    pub text: Color,
    pub dim: Color,
    pub info: Color,
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            cursor: Color::Yellow,
            selected: Color::Green,
            text: Color::Reset,
            dim: Color::DarkGray,
            info: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Border style for a pane, highlighted when focused
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for the cursor row
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected-state checkmark
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.selected)
    }

    /// Style for normal text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for secondary text (hints, counters)
    #[must_use]
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }
}
