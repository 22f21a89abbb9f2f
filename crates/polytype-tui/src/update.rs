//! Reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use polytype_core::surface::{Board, Surface};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tick = app.tick.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, .. } => {
            sync_viewport(&app.board, width);
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) => handle_key(app, key),
        UiEvent::Terminal(_) => vec![],
        UiEvent::PlaybackStopped => {
            app.playback_stopped = true;
            vec![]
        }
    }
}

/// Keeps the wrap threshold in step with the terminal width.
fn sync_viewport(board: &Board, width: u16) {
    let width = usize::from(width);
    if board.viewport_width() != width {
        tracing::debug!(width, "viewport resized");
        board.set_viewport_width(width);
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![UiEffect::Quit]
        }
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('f' | 'F') => {
            app.immersive = !app.immersive;
            tracing::debug!(immersive = app.immersive, "immersive mode toggled");
            vec![UiEffect::ClearScreen]
        }
        _ => vec![],
    }
}
