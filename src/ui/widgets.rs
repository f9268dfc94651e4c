//! Widgets for the browser layout
//!
//! Small `Widget` impls over borrowed view state: the four option panes,
//! the preview bar, the status/help bars and the modal overlays.

use super::state::{AppState, MessageLevel, Mode, Pane, StatusMessage};
use super::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
};

/// One selectable option group rendered as a bordered list
pub struct OptionPane<'a> {
    title: &'static str,
    labels: Vec<String>,
    selected: Vec<bool>,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> OptionPane<'a> {
    /// Create a pane from labels plus their selected-state markers
    #[must_use]
    pub fn new(
        pane: Pane,
        labels: Vec<String>,
        selected: Vec<bool>,
        state: &AppState,
        theme: &'a Theme,
    ) -> Self {
        Self {
            title: pane.title(),
            labels,
            selected,
            cursor: state.cursor(pane),
            focused: state.pane == pane,
            theme,
        }
    }

    fn render_row(&self, idx: usize, label: &str) -> ListItem<'static> {
        let is_cursor = self.focused && idx == self.cursor;
        let is_selected = self.selected.get(idx).copied().unwrap_or(false);

        let cursor_char = if is_cursor { ">" } else { " " };
        let select_char = if is_selected { "✓" } else { " " };

        let text_style = if is_cursor {
            self.theme.cursor_style()
        } else if is_selected {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char.to_string(), self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(select_char.to_string(), self.theme.selected_style()),
            Span::raw(" "),
            Span::styled(label.to_string(), text_style),
        ]);

        ListItem::new(line)
    }
}

impl Widget for OptionPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(self.title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Keep the cursor row inside the viewport
        let visible = inner.height as usize;
        let start = if self.focused && self.cursor >= visible {
            self.cursor + 1 - visible
        } else {
            0
        };
        let end = (start + visible).min(self.labels.len());

        let items: Vec<ListItem> = (start..end)
            .map(|idx| self.render_row(idx, &self.labels[idx]))
            .collect();

        List::new(items).render(inner, buf);
    }
}

/// Preview bar showing the live query summary
pub struct PreviewBar<'a> {
    preview: &'a str,
    theme: &'a Theme,
}

impl<'a> PreviewBar<'a> {
    #[must_use]
    pub const fn new(preview: &'a str, theme: &'a Theme) -> Self {
        Self { preview, theme }
    }
}

impl Widget for PreviewBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Preview ");

        Paragraph::new(self.preview)
            .style(self.theme.normal_style())
            .block(block)
            .render(area, buf);
    }
}

/// Status bar showing the latest action result
pub struct StatusBar<'a> {
    status: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(status: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { status, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Status ");

        let line = match self.status {
            Some(message) => {
                let color = match message.level {
                    MessageLevel::Info => self.theme.info,
                    MessageLevel::Success => self.theme.success,
                    MessageLevel::Error => self.theme.error,
                };
                Line::from(Span::styled(
                    message.text.clone(),
                    ratatui::style::Style::default().fg(color),
                ))
            }
            None => Line::from(Span::styled(
                "Pick a category to start".to_string(),
                self.theme.dim_style(),
            )),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Single-line key hint bar
pub struct HelpBar<'a> {
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    const HINTS: [(&'static str, &'static str); 8] = [
        ("↑/↓", "move"),
        ("TAB", "pane"),
        ("Enter", "pick"),
        ("r", "reroll"),
        ("n/c", "noise"),
        ("f/x", "free text"),
        ("s/y", "search"),
        ("?", "help"),
    ];
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, desc)) in Self::HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ".to_string(), self.theme.dim_style()));
            }
            spans.push(Span::styled((*key).to_string(), self.theme.cursor_style()));
            spans.push(Span::styled(format!(" {desc}"), self.theme.dim_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Centered modal for committing free-text tags
pub struct InputModal<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> InputModal<'a> {
    #[must_use]
    pub const fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Centered rect of the given size within `area`
    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }
}

impl Widget for InputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.state.mode {
            Mode::FeatureInput => " Add features (comma-separated) ",
            Mode::ExcludeInput => " Add excludes (comma-separated) ",
            Mode::Normal | Mode::Help => return,
        };

        let modal = Self::centered(area, 60, 3);
        Clear.render(modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(title);

        let line = Line::from(vec![
            Span::styled(self.state.input.clone(), self.theme.normal_style()),
            Span::styled("█".to_string(), self.theme.cursor_style()),
        ]);

        Paragraph::new(line).block(block).render(modal, buf);
    }
}

/// Full keybind reference shown over the browser
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    const BINDS: [(&'static str, &'static str); 13] = [
        ("↑/↓, j/k", "Move within the focused pane"),
        ("TAB / Shift-TAB", "Cycle pane focus"),
        ("Enter / Space", "Select or toggle the highlighted option"),
        ("r", "Reroll the random word"),
        ("w", "Toggle the no-random-word switch"),
        ("n", "Generate a noise token"),
        ("c", "Clear the noise token"),
        ("f", "Add feature tags as free text"),
        ("x", "Add exclusion tags as free text"),
        ("s", "Search on the video engine"),
        ("y", "Search on YouTube"),
        ("?", "Show this help"),
        ("q / ESC", "Quit"),
    ];
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        #[allow(clippy::cast_possible_truncation)]
        let modal = InputModal::centered(area, 56, Self::BINDS.len() as u16 + 2);
        Clear.render(modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(" Keys ");

        let items: Vec<ListItem> = Self::BINDS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>15}  "), self.theme.cursor_style()),
                    Span::styled((*desc).to_string(), self.theme.normal_style()),
                ]))
            })
            .collect();

        let inner = block.inner(modal);
        block.render(modal, buf);
        List::new(items).render(inner, buf);
    }
}
