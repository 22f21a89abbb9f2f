//! Background playback task.
//!
//! The sequencer runs in its own tokio task. The runtime polls
//! [`Playback::poll_stopped`] once per frame to learn when that task has
//! ended, whether it returned, panicked, or was cancelled.

use std::future::Future;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

pub struct Playback {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
    reported: bool,
}

impl Playback {
    /// Spawns `play` on the current tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn<F>(play: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut task = tokio::spawn(play);
            tokio::select! {
                () = token.cancelled() => task.abort(),
                result = &mut task => match result {
                    Ok(()) => tracing::warn!("playback ended"),
                    Err(e) if e.is_panic() => tracing::error!("playback task panicked: {e}"),
                    Err(e) => tracing::warn!("playback task aborted: {e}"),
                },
            }
        });

        Self {
            cancel,
            handle,
            reported: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Returns `PlaybackStopped` the first time the task is seen finished.
    pub fn poll_stopped(&mut self) -> Option<UiEvent> {
        if self.reported || !self.is_finished() {
            return None;
        }
        self.reported = true;
        Some(UiEvent::PlaybackStopped)
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    async fn wait_finished(playback: &Playback) {
        while !playback.is_finished() {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_reports_stop_once_after_playback_returns() {
        let mut playback = Playback::spawn(async {});
        wait_finished(&playback).await;

        assert!(matches!(
            playback.poll_stopped(),
            Some(UiEvent::PlaybackStopped)
        ));
        assert!(playback.poll_stopped().is_none());
    }

    #[tokio::test]
    async fn test_reports_stop_after_panic() {
        let mut playback = Playback::spawn(async { panic!("sequencer failed"); });
        wait_finished(&playback).await;

        assert!(matches!(
            playback.poll_stopped(),
            Some(UiEvent::PlaybackStopped)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_playback_is_not_reported_until_cancelled() {
        let mut playback = Playback::spawn(std::future::pending());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(playback.poll_stopped().is_none());

        playback.cancel();
        wait_finished(&playback).await;
        assert!(playback.poll_stopped().is_some());
    }
}
