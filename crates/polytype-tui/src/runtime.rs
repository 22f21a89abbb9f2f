//! Player runtime: owns the terminal, runs the event loop, executes effects.
//!
//! Playback runs in its own tokio task and writes into the shared board.
//! The event loop on the calling thread polls terminal input, feeds the
//! reducer, and redraws from the board at frame cadence.

use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use polytype_core::config::Config;
use polytype_core::content::ContentBundle;
use polytype_core::interrupt;
use polytype_core::sequencer;
use polytype_core::surface::Board;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::playback::Playback;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate (60fps = ~16ms per frame).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Full-screen player runtime.
///
/// Terminal state is restored on drop, panic, or a second Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    playback: Option<Playback>,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Enters the alternate screen and prepares an empty board.
    pub fn new(source_label: impl Into<String>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let width = terminal.size().map(|s| usize::from(s.width)).unwrap_or(80);
        let state = AppState::new(Arc::new(Board::new(width)), source_label);

        Ok(Self {
            terminal,
            state,
            playback: None,
            last_tick: Instant::now(),
        })
    }

    /// Plays `bundle` until the user quits.
    ///
    /// Must be called from within a tokio runtime.
    pub fn run(&mut self, bundle: ContentBundle, config: Config) -> Result<()> {
        self.spawn_playback(bundle, config);
        let result = self.event_loop();
        self.stop_playback();
        result
    }

    fn spawn_playback(&mut self, bundle: ContentBundle, config: Config) {
        let board = Arc::clone(&self.state.board);
        self.playback = Some(Playback::spawn(async move {
            sequencer::play(board.as_ref(), bundle, &config).await;
        }));
    }

    fn stop_playback(&mut self) {
        if let Some(playback) = self.playback.take() {
            playback.cancel();
        }
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            if interrupt::is_interrupted() {
                self.execute_effect(UiEffect::Quit);
                break;
            }

            let mut events = self.collect_events()?;

            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(event, UiEvent::Tick) {
                    dirty = true;
                }
                for effect in update::update(&mut self.state, event) {
                    self.execute_effect(effect);
                }
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects terminal input and the playback-stopped notice, then a Tick
    /// once the frame interval has elapsed.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        if let Some(stopped) = self.playback.as_mut().and_then(Playback::poll_stopped) {
            events.push(stopped);
        }

        let poll_duration = if events.is_empty() {
            FRAME_DURATION.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= FRAME_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                tracing::info!("quit requested");
                self.state.should_quit = true;
            }
            UiEffect::ClearScreen => {
                if let Err(e) = self.terminal.clear() {
                    tracing::warn!("failed to clear terminal: {e}");
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        self.stop_playback();
        let _ = terminal::restore_terminal();
    }
}
