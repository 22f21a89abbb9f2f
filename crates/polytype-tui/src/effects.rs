//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes,
//! keeping the reducer free of I/O and task control.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Cancel playback and leave the event loop.
    Quit,
    /// Force a full repaint (after the layout changes shape).
    ClearScreen,
}
