//! Browser run loop: terminal setup, drawing and event dispatch

use super::events::{self, EventResult};
use super::state::{AppState, Mode, Pane};
use super::theme::Theme;
use super::widgets::{HelpBar, HelpOverlay, InputModal, OptionPane, PreviewBar, StatusBar};
use super::{Result, UiError};
use crate::search;
use crate::session::QuerySession;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(UiError::Io)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive browser until the user quits
///
/// Search dispatches happen inside the loop: the browser stays open after
/// opening a result tab, so the user can keep rolling.
///
/// # Errors
///
/// Returns `UiError` if the terminal cannot be driven.
pub fn run_browse(session: &mut QuerySession) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, session);
    cleanup_terminal()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut QuerySession,
) -> Result<()> {
    let mut state = AppState::new();
    let mut rng = rand::thread_rng();
    let theme = Theme::default();

    loop {
        terminal.draw(|frame| draw(frame, &state, session, &theme))?;

        match events::poll_and_handle(&mut state, session, &mut rng, Duration::from_millis(250))? {
            EventResult::Exit => return Ok(()),
            EventResult::Search(engine) => match session.build_query() {
                Ok(query) => match search::dispatch(engine, &query) {
                    Ok(url) => state.set_success(format!("Opened {url}")),
                    Err(e) => state.set_error(e.to_string()),
                },
                Err(_) => state.set_error(
                    "No search terms selected (pick a genre, feature, or exclude word)",
                ),
            },
            EventResult::Continue | EventResult::Ignored => {}
        }
    }
}

/// Render one frame of the browser
fn draw(frame: &mut Frame, state: &AppState, session: &QuerySession, theme: &Theme) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Option panes
            Constraint::Length(3), // Preview bar
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let pane_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(main_layout[0]);

    for (pane, rect) in Pane::ALL.into_iter().zip(pane_layout.iter()) {
        let (labels, selected) = pane_contents(session, pane);
        frame.render_widget(
            OptionPane::new(pane, labels, selected, state, theme),
            *rect,
        );
    }

    let preview = session.preview();
    frame.render_widget(PreviewBar::new(&preview, theme), main_layout[1]);
    frame.render_widget(StatusBar::new(state.status.as_ref(), theme), main_layout[2]);
    frame.render_widget(HelpBar::new(theme), main_layout[3]);

    match state.mode {
        Mode::FeatureInput | Mode::ExcludeInput => {
            frame.render_widget(InputModal::new(state, theme), area);
        }
        Mode::Help => frame.render_widget(HelpOverlay::new(theme), area),
        Mode::Normal => {}
    }
}

/// Labels and selected-state markers for one pane
fn pane_contents(session: &QuerySession, pane: Pane) -> (Vec<String>, Vec<bool>) {
    let state = session.state();
    match pane {
        Pane::Categories => {
            let labels: Vec<String> = session
                .catalog()
                .categories
                .iter()
                .map(|c| c.name.clone())
                .collect();
            let selected = (0..labels.len())
                .map(|i| session.category_index() == Some(i))
                .collect();
            (labels, selected)
        }
        Pane::Genres => {
            let labels: Vec<String> = session
                .current_genres()
                .iter()
                .map(|g| g.name.clone())
                .collect();
            let selected = (0..labels.len())
                .map(|i| session.genre_index() == Some(i))
                .collect();
            (labels, selected)
        }
        Pane::Features => {
            let labels = session.catalog().features.clone();
            let selected = labels.iter().map(|f| state.features.contains(f)).collect();
            (labels, selected)
        }
        Pane::Excludes => {
            let labels: Vec<String> = session
                .catalog()
                .excludes
                .iter()
                .map(|e| e.name.clone())
                .collect();
            let selected = labels
                .iter()
                .map(|e| state.exclude_display.contains(e))
                .collect();
            (labels, selected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Catalog, Category, ExcludeTag, Genre};

    #[test]
    fn test_pane_contents_mirror_selection_state() {
        let mut session = QuerySession::new(Catalog {
            categories: vec![Category {
                name: "Music".into(),
                genres: vec![Genre {
                    name: "Rock".into(),
                    words: vec!["live".into()],
                }],
            }],
            features: vec!["HD".into()],
            excludes: vec![ExcludeTag {
                name: "shorts".into(),
                substitution: None,
            }],
        });

        let (labels, selected) = pane_contents(&session, Pane::Categories);
        assert_eq!(labels, vec!["Music"]);
        assert_eq!(selected, vec![false]);

        // Genres pane is empty until a category is picked
        let (labels, _) = pane_contents(&session, Pane::Genres);
        assert!(labels.is_empty());

        session.select_category(0).unwrap();
        session.toggle_feature(0).unwrap();
        session.toggle_exclude(0).unwrap();

        let (_, selected) = pane_contents(&session, Pane::Categories);
        assert_eq!(selected, vec![true]);
        let (labels, _) = pane_contents(&session, Pane::Genres);
        assert_eq!(labels, vec!["Rock"]);
        let (_, selected) = pane_contents(&session, Pane::Features);
        assert_eq!(selected, vec![true]);
        let (_, selected) = pane_contents(&session, Pane::Excludes);
        assert_eq!(selected, vec![true]);
    }
}
