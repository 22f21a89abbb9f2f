//! Pure view functions for the player.
//!
//! Functions here read `AppState` and a board snapshot and draw to a ratatui
//! frame. No mutations, no side effects.

use polytype_core::panel::Panel;
use polytype_core::sequencer::{PlaybackStatus, SequencerState};
use polytype_core::surface::{BoardSnapshot, PanelView};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::AppState;

/// Rows per panel: border, two text rows and a spacer.
const PANEL_HEIGHT: u16 = 4;

/// Height of the status line.
const STATUS_HEIGHT: u16 = 1;

const CARET: &str = "▌";

/// Renders the whole player to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let snapshot = app.board.snapshot();
    let area = frame.area();

    let (panels_area, status_area) = if app.immersive {
        (area, None)
    } else {
        let [panels, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(STATUS_HEIGHT)])
                .areas(area);
        (panels, Some(status))
    };

    let rows = Layout::vertical([Constraint::Length(PANEL_HEIGHT); 4])
        .flex(Flex::Center)
        .split(panels_area);
    let typing = is_typing(snapshot.status.as_ref()) && app.caret_visible();
    for (panel, slot) in Panel::ALL.into_iter().zip(rows.iter()) {
        render_panel(app, frame, *slot, panel, snapshot.panel(panel), typing);
    }

    if let Some(status_area) = status_area {
        render_status_line(app, &snapshot, frame, status_area);
    }
}

fn is_typing(status: Option<&PlaybackStatus>) -> bool {
    status.is_some_and(|s| s.state == SequencerState::Playing)
}

fn render_panel(
    app: &AppState,
    frame: &mut Frame,
    area: Rect,
    panel: Panel,
    view: &PanelView,
    typing: bool,
) {
    let flag = view.flag.as_deref().unwrap_or("");
    let block = if app.immersive {
        Block::default().borders(Borders::NONE)
    } else {
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(format!(" {} ", panel.label())).left_aligned())
            .title(Line::from(format!(" {flag} ")).right_aligned())
    };

    let mut active = vec![Span::styled(
        view.active.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if typing && !view.active.is_empty() {
        active.push(Span::styled(CARET, Style::default().fg(Color::Cyan)));
    }

    let lines = vec![
        Line::from(Span::styled(
            view.overflow.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(active),
    ];

    frame.render_widget(Paragraph::new(lines).centered().block(block), area);
}

fn render_status_line(app: &AppState, snapshot: &BoardSnapshot, frame: &mut Frame, area: Rect) {
    let progress = match (&snapshot.status, app.playback_stopped) {
        (_, true) => "stopped".to_string(),
        (Some(status), false) => format!(
            "phrase {}/{} · {}",
            (status.cursor + 1).min(status.total),
            status.total,
            status.state
        ),
        (None, false) => "loading".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(progress, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" · {} · f immersive · q quit", app.source_label),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use polytype_core::panel::Row;
    use polytype_core::surface::{Board, Surface};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::events::UiEvent;
    use crate::update;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> AppState {
        let board = Arc::new(Board::new(60));
        board.set_flag(Panel::Main, Some("es.png"));
        board.set_row(Panel::Main, Row::Overflow, "Hola mundo");
        board.set_row(Panel::Main, Row::Active, "bonito");
        board.set_status(PlaybackStatus {
            state: SequencerState::Resting,
            cursor: 1,
            total: 3,
        });
        AppState::new(board, "content.json")
    }

    #[test]
    fn test_renders_rows_flags_and_status() {
        let screen = draw(&app());
        assert!(screen.contains("Hola mundo"));
        assert!(screen.contains("bonito"));
        assert!(screen.contains("es.png"));
        assert!(screen.contains("main"));
        assert!(screen.contains("phrase 2/3"));
        assert!(screen.contains("content.json"));
    }

    #[test]
    fn test_immersive_hides_chrome() {
        let mut app = app();
        app.immersive = true;
        let screen = draw(&app);
        assert!(screen.contains("bonito"));
        assert!(!screen.contains("es.png"));
        assert!(!screen.contains("phrase 2/3"));
    }

    #[test]
    fn test_status_after_playback_stops() {
        let mut app = app();
        update::update(&mut app, UiEvent::PlaybackStopped);
        let screen = draw(&app);
        assert!(screen.contains("stopped"));
        assert!(!screen.contains("phrase 2/3"));
    }

    #[test]
    fn test_status_before_first_step() {
        let app = AppState::new(Arc::new(Board::new(60)), "content.json");
        assert!(draw(&app).contains("loading"));
    }
}
