//! Application state for the player.
//!
//! The board is shared with the playback task, which writes rows and flags
//! into it; everything else here is owned by the reducer.

use std::sync::Arc;

use polytype_core::surface::Board;

pub struct AppState {
    /// Surface the playback task writes to and the renderer reads from.
    pub board: Arc<Board>,
    /// Hides borders and the status line.
    pub immersive: bool,
    pub should_quit: bool,
    /// Shown in the status line (usually the content path).
    pub source_label: String,
    /// Set once the playback task has ended.
    pub playback_stopped: bool,
    /// Advances every tick; drives the caret blink.
    pub tick: u64,
}

impl AppState {
    pub fn new(board: Arc<Board>, source_label: impl Into<String>) -> Self {
        Self {
            board,
            immersive: false,
            should_quit: false,
            source_label: source_label.into(),
            playback_stopped: false,
            tick: 0,
        }
    }

    /// Whether the typing caret is visible on this tick.
    pub fn caret_visible(&self) -> bool {
        (self.tick / 30) % 2 == 0
    }
}
