//! Phrase sequencer.
//!
//! Owns the content bundle and the cursor, and walks an explicit state
//! machine:
//!
//! ```text
//! Starting ──pause(initial)──▶ Ready ──render──▶ Playing ──pause(phrase)──▶ Resting
//!                                ▲  │                                          │
//!                                │  └──pause(restart)──▶ Looping               │
//!                                │                          │ cursor = 0       │
//!                                └──────────────────────────┴──── cursor += 1 ─┘
//! ```
//!
//! `next_action` is pure bookkeeping; `step` and `run` perform the pauses and
//! renders. There is no terminal state: the host stops playback by dropping
//! the future.

use std::fmt;
use std::time::Duration;

use crate::config::{Config, TimingConfig};
use crate::content::ContentBundle;
use crate::renderer::Renderer;
use crate::reveal::RevealEngine;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Before the first phrase.
    Starting,
    /// About to render the phrase at the cursor, or loop if past the end.
    Ready,
    /// A phrase is being revealed.
    Playing,
    /// Pausing after a completed phrase.
    Resting,
    /// Pausing between the last and the first phrase.
    Looping,
}

impl fmt::Display for SequencerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequencerState::Starting => "starting",
            SequencerState::Ready => "ready",
            SequencerState::Playing => "playing",
            SequencerState::Resting => "resting",
            SequencerState::Looping => "looping",
        };
        f.write_str(name)
    }
}

/// Next thing the sequencer wants done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pause(Duration),
    /// Render the phrase at this index.
    Render(usize),
}

/// Progress snapshot published to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStatus {
    pub state: SequencerState,
    pub cursor: usize,
    pub total: usize,
}

pub struct Sequencer {
    bundle: ContentBundle,
    timing: TimingConfig,
    state: SequencerState,
    cursor: usize,
}

impl Sequencer {
    pub fn new(bundle: ContentBundle, timing: TimingConfig) -> Self {
        Self {
            bundle,
            timing,
            state: SequencerState::Starting,
            cursor: 0,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            state: self.state,
            cursor: self.cursor,
            total: self.bundle.phrases.len(),
        }
    }

    /// Advances the state machine and returns the action to perform.
    pub fn next_action(&mut self) -> Action {
        match self.state {
            SequencerState::Starting => {
                self.state = SequencerState::Ready;
                Action::Pause(self.timing.initial_delay())
            }
            SequencerState::Ready if self.cursor >= self.bundle.phrases.len() => {
                self.state = SequencerState::Looping;
                Action::Pause(self.timing.restart_delay())
            }
            SequencerState::Ready => {
                self.state = SequencerState::Playing;
                Action::Render(self.cursor)
            }
            SequencerState::Playing => {
                self.state = SequencerState::Resting;
                Action::Pause(self.timing.phrase_pause())
            }
            SequencerState::Resting => {
                self.cursor += 1;
                self.state = SequencerState::Ready;
                self.next_action()
            }
            SequencerState::Looping => {
                self.cursor = 0;
                self.state = SequencerState::Ready;
                self.next_action()
            }
        }
    }

    /// Performs one action: a pause, or a full phrase render.
    pub async fn step<S: Surface + ?Sized>(&mut self, renderer: &Renderer<'_, S>) -> Action {
        let action = self.next_action();
        renderer.surface().set_status(self.status());
        tracing::debug!(state = %self.state, cursor = self.cursor, ?action, "sequencer step");

        match action {
            Action::Pause(duration) => tokio::time::sleep(duration).await,
            Action::Render(index) => {
                let phrase = &self.bundle.phrases[index];
                let report = renderer.render(phrase, &self.bundle.flags).await;
                tracing::debug!(
                    index,
                    language = %phrase.language,
                    tokens = report.total_tokens(),
                    "phrase complete"
                );
            }
        }
        action
    }

    /// Plays the bundle forever.
    pub async fn run<S: Surface + ?Sized>(&mut self, renderer: &Renderer<'_, S>) {
        loop {
            self.step(renderer).await;
        }
    }
}

/// Shows the startup flags, then plays `bundle` on `surface` forever.
pub async fn play<S: Surface + ?Sized>(surface: &S, bundle: ContentBundle, config: &Config) {
    let renderer = Renderer::new(surface, RevealEngine::from_config(config));
    renderer.show_initial_flags(&bundle.flags, &config.initial_language);
    tracing::info!(phrases = bundle.phrases.len(), "playback started");

    let mut sequencer = Sequencer::new(bundle, config.timing);
    sequencer.run(&renderer).await;
}
