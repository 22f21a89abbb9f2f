//! Display surface abstraction.
//!
//! The reveal engine and renderer never talk to a terminal directly. They
//! write rows and flags through [`Surface`] and read back the rendered width
//! of a panel's active row. [`Board`] is the in-memory surface the TUI draws
//! from; tests provide their own implementations.

use std::sync::{Mutex, MutexGuard, PoisonError};

use unicode_width::UnicodeWidthStr;

use crate::panel::{Panel, Row};
use crate::sequencer::PlaybackStatus;

/// Viewport width assumed until the host reports a real one.
pub const DEFAULT_VIEWPORT_WIDTH: usize = 80;

/// Writable display regions plus the width read-back the reveal engine needs.
///
/// Methods take `&self` so the four concurrent reveal tasks can share one
/// surface; each task only touches its own panel.
pub trait Surface: Sync {
    fn set_row(&self, panel: Panel, row: Row, text: &str);

    /// Sets the flag icon reference, or clears it with `None`.
    fn set_flag(&self, panel: Panel, icon: Option<&str>);

    /// Rendered width of the panel's active row, in the same unit as
    /// [`Surface::viewport_width`].
    fn measure_active(&self, panel: Panel) -> usize;

    fn viewport_width(&self) -> usize;

    /// Receives sequencer progress. Surfaces without a status area ignore it.
    fn set_status(&self, _status: PlaybackStatus) {}

    /// Empties both rows of every panel.
    fn clear_rows(&self) {
        for panel in Panel::ALL {
            self.set_row(panel, Row::Overflow, "");
            self.set_row(panel, Row::Active, "");
        }
    }
}

/// Contents of one panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelView {
    pub overflow: String,
    pub active: String,
    pub flag: Option<String>,
}

impl PanelView {
    pub fn row(&self, row: Row) -> &str {
        match row {
            Row::Overflow => &self.overflow,
            Row::Active => &self.active,
        }
    }
}

/// Point-in-time copy of everything on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub panels: [PanelView; 4],
    pub status: Option<PlaybackStatus>,
    pub viewport_width: usize,
}

impl BoardSnapshot {
    pub fn panel(&self, panel: Panel) -> &PanelView {
        &self.panels[panel.index()]
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            panels: Default::default(),
            status: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

/// In-memory surface shared between the playback task and the TUI.
///
/// Width is measured in terminal cells (`unicode-width`), so CJK characters
/// count double like they do on screen.
#[derive(Debug, Default)]
pub struct Board {
    inner: Mutex<BoardSnapshot>,
}

impl Board {
    pub fn new(viewport_width: usize) -> Self {
        Self {
            inner: Mutex::new(BoardSnapshot {
                viewport_width,
                ..BoardSnapshot::default()
            }),
        }
    }

    /// Updates the viewport width (terminal columns) used for wrapping.
    pub fn set_viewport_width(&self, width: usize) {
        self.lock().viewport_width = width;
    }

    pub fn row(&self, panel: Panel, row: Row) -> String {
        self.lock().panel(panel).row(row).to_string()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, BoardSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Surface for Board {
    fn set_row(&self, panel: Panel, row: Row, text: &str) {
        let mut inner = self.lock();
        let view = &mut inner.panels[panel.index()];
        let slot = match row {
            Row::Overflow => &mut view.overflow,
            Row::Active => &mut view.active,
        };
        slot.clear();
        slot.push_str(text);
    }

    fn set_flag(&self, panel: Panel, icon: Option<&str>) {
        self.lock().panels[panel.index()].flag = icon.map(str::to_string);
    }

    fn measure_active(&self, panel: Panel) -> usize {
        self.lock().panel(panel).active.width()
    }

    fn viewport_width(&self) -> usize {
        self.lock().viewport_width
    }

    fn set_status(&self, status: PlaybackStatus) {
        self.lock().status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measures_cells_not_bytes() {
        let board = Board::new(40);
        board.set_row(Panel::Chinese, Row::Active, "你好");
        board.set_row(Panel::Russian, Row::Active, "мир");
        assert_eq!(board.measure_active(Panel::Chinese), 4);
        assert_eq!(board.measure_active(Panel::Russian), 3);
    }

    #[test]
    fn test_clear_rows_keeps_flags() {
        let board = Board::default();
        board.set_row(Panel::Main, Row::Overflow, "one");
        board.set_row(Panel::Main, Row::Active, "two");
        board.set_flag(Panel::Main, Some("es.png"));
        board.clear_rows();

        let snapshot = board.snapshot();
        assert_eq!(snapshot.panel(Panel::Main).overflow, "");
        assert_eq!(snapshot.panel(Panel::Main).active, "");
        assert_eq!(snapshot.panel(Panel::Main).flag.as_deref(), Some("es.png"));
    }

    #[test]
    fn test_viewport_width_updates() {
        let board = Board::default();
        assert_eq!(board.viewport_width(), DEFAULT_VIEWPORT_WIDTH);
        board.set_viewport_width(120);
        assert_eq!(board.viewport_width(), 120);
    }
}
