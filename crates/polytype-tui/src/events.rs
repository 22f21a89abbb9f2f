//! Events fed to the reducer.

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Frame cadence tick; the only event that triggers a redraw.
    Tick,
    /// Current terminal size, sent before every batch of events.
    Frame { width: u16, height: u16 },
    Terminal(Event),
    /// The playback task has finished.
    PlaybackStopped,
}
